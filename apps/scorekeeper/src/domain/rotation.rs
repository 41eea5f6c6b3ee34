//! Applying a settled hand to the round state and moving the dealer seat.

use tracing::debug;

use crate::domain::rules::{RuleVariant, SEATS};
use crate::domain::state::{
    next_seat, require_seat, HandOutcome, HandRecord, RoundState, ScoreDeltas,
};
use crate::errors::domain::{DomainError, ValidationKind};

/// Dealer/wind progression after a hand has been recorded.
///
/// Called once per hand, after `round_hand_count` has been incremented.
pub trait RotationPolicy {
    fn rotate(&self, state: &mut RoundState, outcome: HandOutcome);
}

/// Dealer-double rules: the dealer keeps the seat on a dealer win or a
/// draw; the prevailing wind moves on once the seat returns to seat 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct DealerRetains;

impl RotationPolicy for DealerRetains {
    fn rotate(&self, state: &mut RoundState, outcome: HandOutcome) {
        let dealer_keeps_seat = match outcome {
            HandOutcome::Draw => true,
            HandOutcome::Winner(seat) => seat == state.current_dealer,
        };

        if dealer_keeps_seat {
            state.dealer_hand_count += 1;
            return;
        }

        state.current_dealer = next_seat(state.current_dealer);
        state.dealer_hand_count = 1;

        if state.current_dealer == 0 && state.round_hand_count > 0 {
            state.prevailing_wind = state.prevailing_wind.next();
            state.round_hand_count = 0;
        }
    }
}

/// NTS rules: the dealer seat moves every hand and the wind changes every
/// four hands.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysRotates;

impl RotationPolicy for AlwaysRotates {
    fn rotate(&self, state: &mut RoundState, _outcome: HandOutcome) {
        state.current_dealer = next_seat(state.current_dealer);
        state.dealer_hand_count += 1;
        if state.round_hand_count % SEATS as u32 == 0 {
            state.prevailing_wind = state.prevailing_wind.next();
        }
    }
}

pub fn rotation_for(variant: RuleVariant) -> &'static dyn RotationPolicy {
    match variant {
        RuleVariant::DealerDouble => &DealerRetains,
        RuleVariant::Nts => &AlwaysRotates,
    }
}

/// Record one hand: apply deltas, append the history entry, rotate.
///
/// Validation happens before anything is touched, so an `Err` leaves the
/// state exactly as it was.
pub fn advance_round(
    state: &mut RoundState,
    outcome: HandOutcome,
    deltas: ScoreDeltas,
) -> Result<HandRecord, DomainError> {
    match outcome {
        HandOutcome::Draw if !state.variant.allows_draw() => {
            return Err(DomainError::validation(
                ValidationKind::DrawNotAllowed,
                "Every NTS hand has a winner",
            ));
        }
        HandOutcome::Draw => {}
        HandOutcome::Winner(seat) => {
            require_seat(seat, "winner")?;
        }
    }
    debug_assert_eq!(
        deltas.iter().try_fold(0i64, |acc, &d| acc.checked_add(d)),
        Some(0),
        "deltas must sum to zero"
    );

    let mut scores = state.scores;
    for (score, delta) in scores.iter_mut().zip(deltas) {
        *score = score.checked_add(delta).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::PointsOutOfRange,
                "This hand would push a score beyond the supported range",
            )
        })?;
    }

    let before = state.marker();
    let hand_label = state.round_label();
    state.scores = scores;

    let record = HandRecord {
        hand_label,
        prevailing_wind: before.prevailing_wind,
        dealer: before.dealer,
        outcome,
        score_changes: deltas,
        resulting_scores: state.scores,
        before,
    };
    state.history.push(record.clone());

    state.round_hand_count += 1;
    rotation_for(state.variant).rotate(state, outcome);

    debug!(
        hand_no = state.history.len(),
        dealer = state.current_dealer,
        wind = state.prevailing_wind.name(),
        dealer_hand_count = state.dealer_hand_count,
        round_hand_count = state.round_hand_count,
        "Hand recorded"
    );

    Ok(record)
}
