//! Score settlement: turn a hand result into per-seat point transfers.
//!
//! Both calculators are pure. Missing or zero inputs produce `ZERO_DELTAS`
//! so an in-progress entry form can always show a preview. Inputs are
//! expected within `MAX_POINTS`; `HandEntry` enforces that before calling.

use serde::{Deserialize, Serialize};

use crate::domain::rules::SEATS;
use crate::domain::state::{RoundState, ScoreDeltas, Seat, ZERO_DELTAS};

/// Shared contract for the settlement rules.
pub trait SettlementCalculator {
    type Input;

    fn settle(&self, state: &RoundState, winner: Option<Seat>, input: &Self::Input)
        -> ScoreDeltas;
}

/// Move `amount` points from `payer` to `payee`.
#[inline]
fn transfer(deltas: &mut ScoreDeltas, payer: Seat, payee: Seat, amount: i64) {
    deltas[payer as usize] -= amount;
    deltas[payee as usize] += amount;
}

#[inline]
fn doubled_if(amount: i64, double: bool) -> i64 {
    if double {
        amount * 2
    } else {
        amount
    }
}

fn non_winners(winner: Seat) -> impl Iterator<Item = Seat> {
    (0..SEATS as Seat).filter(move |&s| s != winner)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WinType {
    #[default]
    SelfDraw,
    Discard,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DealerDoubleInput {
    pub base_points: Option<i64>,
    pub win_type: WinType,
    /// Required for `WinType::Discard`.
    pub discarder: Option<Seat>,
}

/// Winner takes all; any payment touching the dealer is doubled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DealerDouble;

impl SettlementCalculator for DealerDouble {
    type Input = DealerDoubleInput;

    fn settle(
        &self,
        state: &RoundState,
        winner: Option<Seat>,
        input: &DealerDoubleInput,
    ) -> ScoreDeltas {
        let Some(winner) = winner else {
            return ZERO_DELTAS;
        };
        let base = match input.base_points {
            Some(points) if points > 0 => points,
            _ => return ZERO_DELTAS,
        };

        let dealer = state.current_dealer;
        let winner_is_dealer = winner == dealer;
        let mut deltas = ZERO_DELTAS;

        match input.win_type {
            WinType::SelfDraw => {
                for payer in non_winners(winner) {
                    let amount = doubled_if(base, winner_is_dealer || payer == dealer);
                    transfer(&mut deltas, payer, winner, amount);
                }
            }
            WinType::Discard => {
                let Some(discarder) = input.discarder else {
                    return ZERO_DELTAS;
                };
                // Commit validation rejects this; preview shows nothing.
                if discarder == winner {
                    return ZERO_DELTAS;
                }
                let amount = doubled_if(base, winner_is_dealer || discarder == dealer);
                transfer(&mut deltas, discarder, winner, amount);
            }
        }

        deltas
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NtsInput {
    /// Hand value entered for each seat.
    pub counts: [i64; SEATS],
}

/// NTS proportional settlement.
///
/// The winner collects its own count from every other seat, then each pair
/// of non-winners settles the difference between their counts. A payment
/// involving the dealer on either side is doubled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NtsProportional;

impl SettlementCalculator for NtsProportional {
    type Input = NtsInput;

    fn settle(&self, state: &RoundState, winner: Option<Seat>, input: &NtsInput) -> ScoreDeltas {
        let Some(winner) = winner else {
            return ZERO_DELTAS;
        };
        if input.counts.iter().all(|&c| c == 0) {
            return ZERO_DELTAS;
        }

        let dealer = state.current_dealer;
        let counts = &input.counts;
        let mut deltas = ZERO_DELTAS;

        let winner_value = counts[winner as usize];
        for payer in non_winners(winner) {
            let amount = doubled_if(winner_value, winner == dealer || payer == dealer);
            transfer(&mut deltas, payer, winner, amount);
        }

        let losers: Vec<Seat> = non_winners(winner).collect();
        for (i, &p1) in losers.iter().enumerate() {
            for &p2 in &losers[i + 1..] {
                let diff = counts[p1 as usize] - counts[p2 as usize];
                let amount = doubled_if(diff, p1 == dealer || p2 == dealer);
                // p1 receives `amount` from p2; a negative amount flows the other way.
                transfer(&mut deltas, p2, p1, amount);
            }
        }

        deltas
    }
}
