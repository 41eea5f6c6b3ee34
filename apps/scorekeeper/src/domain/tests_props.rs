//! Property tests for settlement and the hand/undo cycle.
//!
//! Properties tested:
//! - Every delta vector sums to zero, for any form input and any dealer
//! - Score conservation holds after every recorded hand
//! - N hands followed by N undos restores the starting state exactly
//! - Out-of-range points are rejected without panicking or mutating state

use proptest::prelude::*;

use crate::domain::hand_entry::HandEntry;
use crate::domain::rotation::advance_round;
use crate::domain::rules::RuleVariant;
use crate::domain::state::{default_players, RoundState};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::domain::undo::undo_last_hand;

fn game(variant: RuleVariant, dealer: u8) -> RoundState {
    let mut state = RoundState::fresh(variant, default_players(), 25_000, 0);
    state.current_dealer = dealer;
    state
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: dealer-double preview always sums to zero
    #[test]
    fn prop_dealer_double_deltas_sum_to_zero(
        dealer in test_gens::seat(),
        entry in test_gens::raw_dealer_double_entry(),
    ) {
        let state = game(RuleVariant::DealerDouble, dealer);
        let deltas = HandEntry::DealerDouble(entry).preview(&state).unwrap();
        prop_assert_eq!(deltas.iter().sum::<i64>(), 0);
    }

    /// Property: NTS preview always sums to zero
    #[test]
    fn prop_nts_deltas_sum_to_zero(
        dealer in test_gens::seat(),
        entry in test_gens::raw_nts_entry(),
    ) {
        let state = game(RuleVariant::Nts, dealer);
        let deltas = HandEntry::Nts(entry).preview(&state).unwrap();
        prop_assert_eq!(deltas.iter().sum::<i64>(), 0);
    }

    /// Property: play N hands, undo N times, get the original state back
    #[test]
    fn prop_hands_then_undos_restore_state(
        (variant, starting_dealer, entries) in test_gens::variant().prop_flat_map(|variant| {
            (
                Just(variant),
                match variant {
                    RuleVariant::DealerDouble => Just(0u8).boxed(),
                    RuleVariant::Nts => test_gens::seat().boxed(),
                },
                prop::collection::vec(test_gens::entry_for(variant), 1..24),
            )
        }),
    ) {
        let original = RoundState::fresh(variant, default_players(), 25_000, starting_dealer);
        let mut state = original.clone();

        for entry in &entries {
            let committed = entry.commit(&state).unwrap();
            advance_round(&mut state, committed.outcome, committed.deltas).unwrap();
            prop_assert!(state.is_conserved(), "scores drifted: {:?}", state.scores);
            prop_assert!(state.dealer_hand_count >= 1);
        }
        prop_assert_eq!(state.history.len(), entries.len());

        for _ in 0..entries.len() {
            prop_assert!(undo_last_hand(&mut state).is_some());
        }
        prop_assert!(undo_last_hand(&mut state).is_none());
        prop_assert_eq!(state, original);
    }

    /// Property: any points input either settles to a zero-sum vector or is
    /// rejected as out of range, and a rejected hand leaves the game untouched
    #[test]
    fn prop_unbounded_points_never_corrupt_state(
        dealer in test_gens::seat(),
        entry in test_gens::unbounded_entry(),
    ) {
        let mut state = game(entry.variant(), dealer);
        let before = state.clone();

        match entry.preview(&state) {
            Ok(deltas) => prop_assert_eq!(deltas.iter().sum::<i64>(), 0),
            Err(err) => prop_assert!(
                matches!(err, DomainError::Validation(ValidationKind::PointsOutOfRange, _)),
                "unexpected preview error: {:?}", err
            ),
        }

        let applied = entry
            .commit(&state)
            .and_then(|hand| advance_round(&mut state, hand.outcome, hand.deltas));
        match applied {
            Ok(_) => prop_assert!(state.is_conserved()),
            Err(_) => prop_assert_eq!(state, before),
        }
    }
}
