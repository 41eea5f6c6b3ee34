//! Raw hand input as entered on the score form, tagged by rule variant.
//!
//! `preview` is lenient: incomplete input gives a zero vector. `commit`
//! is strict: it either returns the outcome and deltas to apply, or a
//! validation error and nothing is mutated. Both reject seats outside 0..=3
//! and point values beyond `MAX_POINTS`.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{RuleVariant, MAX_POINTS, SEATS};
use crate::domain::settlement::{
    DealerDouble, DealerDoubleInput, NtsInput, NtsProportional, SettlementCalculator, WinType,
};
use crate::domain::state::{require_seat, HandOutcome, RoundState, ScoreDeltas, Seat, ZERO_DELTAS};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum HandEntry {
    DealerDouble(DealerDoubleEntry),
    Nts(NtsEntry),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerDoubleEntry {
    #[serde(default)]
    pub winner: Option<Seat>,
    /// Record the hand as a draw; winner and points are ignored.
    #[serde(default)]
    pub draw: bool,
    #[serde(default)]
    pub base_points: Option<i64>,
    #[serde(default)]
    pub win_type: WinType,
    #[serde(default)]
    pub discarder: Option<Seat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NtsEntry {
    #[serde(default)]
    pub winner: Option<Seat>,
    #[serde(default)]
    pub counts: [i64; SEATS],
}

/// A hand that passed commit validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedHand {
    pub outcome: HandOutcome,
    pub deltas: ScoreDeltas,
}

impl HandEntry {
    pub fn variant(&self) -> RuleVariant {
        match self {
            HandEntry::DealerDouble(_) => RuleVariant::DealerDouble,
            HandEntry::Nts(_) => RuleVariant::Nts,
        }
    }

    /// Live delta preview for the current form contents.
    ///
    /// Only structural problems (wrong variant, seat or points out of range)
    /// are errors.
    pub fn preview(&self, state: &RoundState) -> Result<ScoreDeltas, DomainError> {
        self.check_shape(state)?;
        Ok(match self {
            HandEntry::DealerDouble(entry) if entry.draw => ZERO_DELTAS,
            HandEntry::DealerDouble(entry) => {
                DealerDouble.settle(state, entry.winner, &entry.settlement_input())
            }
            HandEntry::Nts(entry) => NtsProportional.settle(
                state,
                entry.winner,
                &NtsInput {
                    counts: entry.counts,
                },
            ),
        })
    }

    /// Validate a finished entry and compute what to apply.
    pub fn commit(&self, state: &RoundState) -> Result<CommittedHand, DomainError> {
        self.check_shape(state)?;
        match self {
            HandEntry::DealerDouble(entry) => entry.commit(state),
            HandEntry::Nts(entry) => entry.commit(state),
        }
    }

    fn check_shape(&self, state: &RoundState) -> Result<(), DomainError> {
        if self.variant() != state.variant {
            return Err(DomainError::validation(
                ValidationKind::VariantMismatch,
                format!(
                    "hand entry is for {:?} but the game uses {:?}",
                    self.variant(),
                    state.variant
                ),
            ));
        }
        match self {
            HandEntry::DealerDouble(entry) => {
                if let Some(winner) = entry.winner {
                    require_seat(winner, "winner")?;
                }
                if let Some(discarder) = entry.discarder {
                    require_seat(discarder, "discarder")?;
                }
                if let Some(points) = entry.base_points {
                    require_in_range(points, "base points")?;
                }
            }
            HandEntry::Nts(entry) => {
                if let Some(winner) = entry.winner {
                    require_seat(winner, "winner")?;
                }
                for &count in &entry.counts {
                    require_in_range(count, "hand value")?;
                }
            }
        }
        Ok(())
    }
}

fn require_in_range(value: i64, what: &str) -> Result<(), DomainError> {
    if (-MAX_POINTS..=MAX_POINTS).contains(&value) {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::PointsOutOfRange,
            format!("{what} must be at most {MAX_POINTS} in size, got {value}"),
        ))
    }
}

impl DealerDoubleEntry {
    fn settlement_input(&self) -> DealerDoubleInput {
        DealerDoubleInput {
            base_points: self.base_points,
            win_type: self.win_type,
            discarder: self.discarder,
        }
    }

    fn commit(&self, state: &RoundState) -> Result<CommittedHand, DomainError> {
        if self.draw {
            return Ok(CommittedHand {
                outcome: HandOutcome::Draw,
                deltas: ZERO_DELTAS,
            });
        }

        let winner = self.winner.ok_or_else(|| {
            DomainError::validation(ValidationKind::NoWinner, "Please select who had Mahjong")
        })?;
        match self.base_points {
            Some(points) if points > 0 => {}
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::MissingPoints,
                    "Please enter the points value",
                ))
            }
        }
        if self.win_type == WinType::Discard {
            let discarder = self.discarder.ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::MissingDiscarder,
                    "Please select who discarded the winning tile",
                )
            })?;
            if discarder == winner {
                return Err(DomainError::validation(
                    ValidationKind::DiscarderIsWinner,
                    "The discarder cannot be the winner",
                ));
            }
        }

        Ok(CommittedHand {
            outcome: HandOutcome::Winner(winner),
            deltas: DealerDouble.settle(state, Some(winner), &self.settlement_input()),
        })
    }
}

impl NtsEntry {
    fn commit(&self, state: &RoundState) -> Result<CommittedHand, DomainError> {
        let winner = self.winner.ok_or_else(|| {
            DomainError::validation(ValidationKind::NoWinner, "Please select who had Mahjong")
        })?;
        if self.counts.iter().all(|&c| c == 0) {
            return Err(DomainError::validation(
                ValidationKind::MissingCounts,
                "Please enter the hand values",
            ));
        }

        let input = NtsInput {
            counts: self.counts,
        };
        Ok(CommittedHand {
            outcome: HandOutcome::Winner(winner),
            deltas: NtsProportional.settle(state, Some(winner), &input),
        })
    }
}
