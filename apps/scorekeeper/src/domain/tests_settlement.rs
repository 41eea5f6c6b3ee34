//! Reference settlement cases for both rule variants.

use crate::domain::hand_entry::{DealerDoubleEntry, HandEntry, NtsEntry};
use crate::domain::rules::RuleVariant;
use crate::domain::settlement::{
    DealerDouble, DealerDoubleInput, NtsInput, NtsProportional, SettlementCalculator, WinType,
};
use crate::domain::state::{default_players, RoundState, Seat};

fn game(variant: RuleVariant, dealer: Seat) -> RoundState {
    let mut state = RoundState::fresh(variant, default_players(), 25_000, 0);
    state.current_dealer = dealer;
    state
}

fn discard(points: i64, discarder: Seat) -> DealerDoubleInput {
    DealerDoubleInput {
        base_points: Some(points),
        win_type: WinType::Discard,
        discarder: Some(discarder),
    }
}

#[test]
fn dealer_self_draw_collects_double_from_everyone() {
    let state = game(RuleVariant::DealerDouble, 0);
    let input = DealerDoubleInput {
        base_points: Some(1_000),
        win_type: WinType::SelfDraw,
        discarder: None,
    };
    let deltas = DealerDouble.settle(&state, Some(0), &input);
    assert_eq!(deltas, [6_000, -2_000, -2_000, -2_000]);
}

#[test]
fn discard_between_non_dealers_is_single() {
    let state = game(RuleVariant::DealerDouble, 0);
    let deltas = DealerDouble.settle(&state, Some(2), &discard(500, 1));
    assert_eq!(deltas, [0, -500, 500, 0]);
}

#[test]
fn discard_by_dealer_is_doubled() {
    let state = game(RuleVariant::DealerDouble, 0);
    let deltas = DealerDouble.settle(&state, Some(2), &discard(500, 0));
    assert_eq!(deltas, [-1_000, 0, 1_000, 0]);
}

#[test]
fn discard_to_dealer_is_doubled() {
    let state = game(RuleVariant::DealerDouble, 3);
    let deltas = DealerDouble.settle(&state, Some(3), &discard(500, 1));
    assert_eq!(deltas, [0, -1_000, 0, 1_000]);
}

#[test]
fn nts_reference_vector() {
    let state = game(RuleVariant::Nts, 0);
    let input = NtsInput {
        counts: [2, 5, 3, 1],
    };
    let deltas = NtsProportional.settle(&state, Some(1), &input);
    assert_eq!(deltas, [-10, 20, -1, -9]);
}

#[test]
fn nts_pair_settlement_is_order_independent() {
    // Reference case mirrored: seat s becomes 3 - s.
    let state = game(RuleVariant::Nts, 3);
    let input = NtsInput {
        counts: [1, 3, 5, 2],
    };
    let deltas = NtsProportional.settle(&state, Some(2), &input);
    assert_eq!(deltas, [-9, -1, 20, -10]);
    assert_eq!(deltas.iter().sum::<i64>(), 0);
}

#[test]
fn no_winner_previews_zero_for_both_variants() {
    let a = game(RuleVariant::DealerDouble, 0);
    let entry = HandEntry::DealerDouble(DealerDoubleEntry {
        base_points: Some(800),
        ..DealerDoubleEntry::default()
    });
    assert_eq!(entry.preview(&a).unwrap(), [0; 4]);

    let b = game(RuleVariant::Nts, 0);
    let entry = HandEntry::Nts(NtsEntry {
        winner: None,
        counts: [4, 4, 4, 4],
    });
    assert_eq!(entry.preview(&b).unwrap(), [0; 4]);
}

#[test]
fn committed_deltas_match_preview() {
    let state = game(RuleVariant::DealerDouble, 1);
    let entry = HandEntry::DealerDouble(DealerDoubleEntry {
        winner: Some(1),
        draw: false,
        base_points: Some(400),
        win_type: WinType::SelfDraw,
        discarder: None,
    });
    let preview = entry.preview(&state).unwrap();
    let committed = entry.commit(&state).unwrap();
    assert_eq!(committed.deltas, preview);
    assert_eq!(preview, [-800, 2_400, -800, -800]);
}
