use serde::{Deserialize, Serialize};

use crate::domain::rules::{RuleVariant, Wind, DEFAULT_STARTING_POINTS, SEATS};
use crate::errors::domain::{DomainError, ValidationKind};

pub type Seat = u8; // 0..=3

/// Per-seat score changes for one hand. Always sums to zero.
pub type ScoreDeltas = [i64; SEATS];

pub const ZERO_DELTAS: ScoreDeltas = [0; SEATS];

/// Seat math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    ((seat as i16 + delta as i16).rem_euclid(SEATS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// Dealer for a 1-based hand number when the seat rotates every hand.
///
/// Hand 1 → starting_dealer
/// Hand 2 → starting_dealer + 1 (mod 4)
#[inline]
pub fn dealer_for_hand(starting_dealer: Seat, hand_no: usize) -> Seat {
    debug_assert!(hand_no >= 1, "hand_no is 1-based and must be >= 1");
    let steps = hand_no.saturating_sub(1) % SEATS;
    seat_offset(starting_dealer, steps as i8)
}

/// Seat wind relative to the dealer: the dealer sits East, the next seat South.
#[inline]
pub fn seat_wind(seat: Seat, dealer: Seat) -> Wind {
    Wind::from_index(seat_offset(seat, -(dealer as i8)))
}

pub fn require_seat(seat: Seat, what: &'static str) -> Result<Seat, DomainError> {
    if (seat as usize) < SEATS {
        Ok(seat)
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidSeat,
            format!("{what} seat must be between 0 and 3, got {seat}"),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
}

impl Player {
    pub fn default_for(seat: usize) -> Self {
        Self {
            name: format!("Player {}", seat + 1),
        }
    }
}

pub fn default_players() -> [Player; SEATS] {
    std::array::from_fn(Player::default_for)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub show_plus_minus: bool,
    pub highlight_dealer: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_plus_minus: true,
            highlight_dealer: true,
        }
    }
}

/// How a hand ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "seat", rename_all = "snake_case")]
pub enum HandOutcome {
    Winner(Seat),
    /// Nobody won; only recorded under dealer-double rules.
    Draw,
}

impl HandOutcome {
    pub fn winner(self) -> Option<Seat> {
        match self {
            HandOutcome::Winner(seat) => Some(seat),
            HandOutcome::Draw => None,
        }
    }
}

/// The four rotation scalars. Each hand record keeps the values that were in
/// force before the hand so undo can put them back verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundMarker {
    pub dealer: Seat,
    pub dealer_hand_count: u32,
    pub prevailing_wind: Wind,
    pub round_hand_count: u32,
}

/// One recorded hand. Never edited; only removed from the tail by undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandRecord {
    pub hand_label: String,
    pub prevailing_wind: Wind,
    pub dealer: Seat,
    pub outcome: HandOutcome,
    pub score_changes: ScoreDeltas,
    /// Display only.
    pub resulting_scores: [i64; SEATS],
    pub before: RoundMarker,
}

/// Entire scoring session, sufficient for pure engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub variant: RuleVariant,
    pub players: [Player; SEATS],
    pub scores: [i64; SEATS],
    pub starting_points: i64,
    pub prevailing_wind: Wind,
    pub current_dealer: Seat,
    /// Dealer of hand 1. Drives the NTS score sheet layout.
    pub starting_dealer: Seat,
    /// Dealer-double: consecutive hands held by the current dealer.
    /// NTS: cumulative hand counter.
    pub dealer_hand_count: u32,
    /// Dealer-double: hands within the current prevailing wind.
    /// NTS: hands since game start.
    pub round_hand_count: u32,
    pub history: Vec<HandRecord>,
    pub settings: DisplaySettings,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::fresh(
            RuleVariant::DealerDouble,
            default_players(),
            DEFAULT_STARTING_POINTS,
            0,
        )
    }
}

impl RoundState {
    /// A game before its first hand. Inputs are assumed validated.
    pub fn fresh(
        variant: RuleVariant,
        players: [Player; SEATS],
        starting_points: i64,
        starting_dealer: Seat,
    ) -> Self {
        Self {
            variant,
            players,
            scores: [starting_points; SEATS],
            starting_points,
            prevailing_wind: Wind::East,
            current_dealer: starting_dealer,
            starting_dealer,
            dealer_hand_count: 1,
            round_hand_count: 0,
            history: Vec::new(),
            settings: DisplaySettings::default(),
        }
    }

    pub fn marker(&self) -> RoundMarker {
        RoundMarker {
            dealer: self.current_dealer,
            dealer_hand_count: self.dealer_hand_count,
            prevailing_wind: self.prevailing_wind,
            round_hand_count: self.round_hand_count,
        }
    }

    pub fn restore(&mut self, marker: &RoundMarker) {
        self.current_dealer = marker.dealer;
        self.dealer_hand_count = marker.dealer_hand_count;
        self.prevailing_wind = marker.prevailing_wind;
        self.round_hand_count = marker.round_hand_count;
    }

    /// 1-based number of the hand about to be played.
    pub fn next_hand_no(&self) -> usize {
        self.history.len() + 1
    }

    /// Label shown for the current hand, e.g. `East-2`.
    pub fn round_label(&self) -> String {
        let n = match self.variant {
            RuleVariant::DealerDouble => self.dealer_hand_count,
            RuleVariant::Nts => self.round_hand_count % SEATS as u32 + 1,
        };
        format!("{}-{}", self.prevailing_wind.name(), n)
    }

    pub fn player_name(&self, seat: Seat) -> &str {
        self.players
            .get(seat as usize)
            .map(|p| p.name.as_str())
            .unwrap_or("?")
    }

    pub fn expected_total(&self) -> i64 {
        self.starting_points * SEATS as i64
    }

    /// Sum of scores equals four times the starting points.
    pub fn is_conserved(&self) -> bool {
        self.scores.iter().sum::<i64>() == self.expected_total()
    }
}
