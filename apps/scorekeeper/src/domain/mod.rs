//! Domain layer: pure scoring and round-state logic.

pub mod hand_entry;
pub mod rotation;
pub mod rules;
pub mod settlement;
pub mod setup;
pub mod snapshot;
pub mod state;
pub mod undo;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props;
#[cfg(test)]
mod tests_rotation;
#[cfg(test)]
mod tests_settlement;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use hand_entry::{CommittedHand, DealerDoubleEntry, HandEntry, NtsEntry};
pub use rotation::{advance_round, rotation_for, AlwaysRotates, DealerRetains, RotationPolicy};
pub use rules::{
    RuleVariant, Wind, DEFAULT_STARTING_POINTS, MAX_POINTS, SCORE_SHEET_ROWS, SEATS,
};
pub use settlement::{
    DealerDouble, DealerDoubleInput, NtsInput, NtsProportional, SettlementCalculator, WinType,
};
pub use setup::{new_game, GameSetup, SettingsUpdate};
pub use snapshot::{snapshot, GameSnapshot};
pub use state::{
    DisplaySettings, HandOutcome, HandRecord, Player, RoundMarker, RoundState, ScoreDeltas, Seat,
};
pub use undo::undo_last_hand;
