// Proptest generators for domain types.
// Hand entries are valid by construction so commits never need prop_assume!.

use proptest::prelude::*;

use crate::domain::hand_entry::{DealerDoubleEntry, HandEntry, NtsEntry};
use crate::domain::rules::{RuleVariant, MAX_POINTS};
use crate::domain::settlement::WinType;
use crate::domain::state::{seat_offset, Seat};

pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..4
}

pub fn variant() -> impl Strategy<Value = RuleVariant> {
    prop_oneof![Just(RuleVariant::DealerDouble), Just(RuleVariant::Nts)]
}

/// Any seat other than `winner`.
fn other_seat(winner: Seat) -> impl Strategy<Value = Seat> {
    (1i8..4).prop_map(move |offset| seat_offset(winner, offset))
}

/// Dealer-double entry that passes commit validation.
pub fn dealer_double_entry() -> impl Strategy<Value = HandEntry> {
    let draw = Just(HandEntry::DealerDouble(DealerDoubleEntry {
        draw: true,
        ..DealerDoubleEntry::default()
    }));
    let self_draw = (seat(), 1i64..=8_000).prop_map(|(winner, points)| {
        HandEntry::DealerDouble(DealerDoubleEntry {
            winner: Some(winner),
            draw: false,
            base_points: Some(points),
            win_type: WinType::SelfDraw,
            discarder: None,
        })
    });
    let discard = (seat(), 1i64..=8_000)
        .prop_flat_map(|(winner, points)| (Just(winner), Just(points), other_seat(winner)))
        .prop_map(|(winner, points, discarder)| {
            HandEntry::DealerDouble(DealerDoubleEntry {
                winner: Some(winner),
                draw: false,
                base_points: Some(points),
                win_type: WinType::Discard,
                discarder: Some(discarder),
            })
        });
    prop_oneof![1 => draw, 3 => self_draw, 3 => discard]
}

/// NTS entry that passes commit validation: the winner's count is never zero.
pub fn nts_entry() -> impl Strategy<Value = HandEntry> {
    (seat(), prop::array::uniform4(0i64..=400)).prop_map(|(winner, mut counts)| {
        counts[winner as usize] = counts[winner as usize].max(1);
        HandEntry::Nts(NtsEntry {
            winner: Some(winner),
            counts,
        })
    })
}

pub fn entry_for(variant: RuleVariant) -> BoxedStrategy<HandEntry> {
    match variant {
        RuleVariant::DealerDouble => dealer_double_entry().boxed(),
        RuleVariant::Nts => nts_entry().boxed(),
    }
}

/// Arbitrary, possibly incomplete dealer-double form input.
pub fn raw_dealer_double_entry() -> impl Strategy<Value = DealerDoubleEntry> {
    (
        prop::option::of(seat()),
        any::<bool>(),
        prop::option::of(-1_000i64..=8_000),
        prop_oneof![Just(WinType::SelfDraw), Just(WinType::Discard)],
        prop::option::of(seat()),
    )
        .prop_map(
            |(winner, draw, base_points, win_type, discarder)| DealerDoubleEntry {
                winner,
                draw,
                base_points,
                win_type,
                discarder,
            },
        )
}

/// Arbitrary NTS form input, including negative counts.
pub fn raw_nts_entry() -> impl Strategy<Value = NtsEntry> {
    (
        prop::option::of(seat()),
        prop::array::uniform4(-200i64..=400),
    )
        .prop_map(|(winner, counts)| NtsEntry { winner, counts })
}

/// Point values across the whole `i64` range, biased toward the edges.
pub fn any_points() -> impl Strategy<Value = i64> {
    prop_oneof![
        Just(i64::MIN),
        Just(i64::MAX),
        Just(MAX_POINTS),
        Just(MAX_POINTS + 1),
        Just(-MAX_POINTS - 1),
        any::<i64>(),
        -1_000i64..=8_000,
    ]
}

/// Form input with unbounded points or counts.
pub fn unbounded_entry() -> impl Strategy<Value = HandEntry> {
    let dealer_double = (
        prop::option::of(seat()),
        prop::option::of(any_points()),
        prop_oneof![Just(WinType::SelfDraw), Just(WinType::Discard)],
        prop::option::of(seat()),
    )
        .prop_map(|(winner, base_points, win_type, discarder)| {
            HandEntry::DealerDouble(DealerDoubleEntry {
                winner,
                draw: false,
                base_points,
                win_type,
                discarder,
            })
        });
    let nts = (prop::option::of(seat()), prop::array::uniform4(any_points()))
        .prop_map(|(winner, counts)| HandEntry::Nts(NtsEntry { winner, counts }));
    prop_oneof![dealer_double, nts]
}
