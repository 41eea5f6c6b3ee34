//! Error codes for the scorekeeper API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code is SCREAMING_SNAKE_CASE and appears verbatim in HTTP responses.

use core::fmt;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Hand entry validation
    /// No winner selected
    NoWinner,
    /// Base points missing or zero
    MissingPoints,
    /// Discard win without a discarder
    MissingDiscarder,
    /// Discarder and winner are the same seat
    DiscarderIsWinner,
    /// NTS hand values all zero
    MissingCounts,
    /// Seat index outside 0..=3
    InvalidSeat,
    /// Points or hand value beyond the supported range
    PointsOutOfRange,
    /// Draw submitted for a game that does not record draws
    DrawNotAllowed,
    /// Hand entry variant differs from the game's rules
    VariantMismatch,

    // Setup and settings validation
    /// Starting points must be positive
    InvalidStartingPoints,
    /// Starting points cannot change once hands are recorded
    StartingPointsLocked,
    /// Player name is blank
    InvalidPlayerName,
    /// Starting dealer not allowed for this variant
    InvalidStartingDealer,

    // Request handling
    /// Malformed or oversized request body
    BadRequest,
    /// Destructive command without confirmation
    ConfirmationRequired,

    // Resource Not Found
    /// No game has been set up
    GameNotFound,

    // Conflicts
    /// Undo with an empty history
    NothingToUndo,

    // Storage warnings (reported on the game view and /health, never as errors)
    /// Save file could not be read or written
    StorageUnavailable,
    /// Save file exists but cannot be decoded
    DataCorruption,

    // System Errors
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoWinner => "NO_WINNER",
            Self::MissingPoints => "MISSING_POINTS",
            Self::MissingDiscarder => "MISSING_DISCARDER",
            Self::DiscarderIsWinner => "DISCARDER_IS_WINNER",
            Self::MissingCounts => "MISSING_COUNTS",
            Self::InvalidSeat => "INVALID_SEAT",
            Self::PointsOutOfRange => "POINTS_OUT_OF_RANGE",
            Self::DrawNotAllowed => "DRAW_NOT_ALLOWED",
            Self::VariantMismatch => "VARIANT_MISMATCH",

            Self::InvalidStartingPoints => "INVALID_STARTING_POINTS",
            Self::StartingPointsLocked => "STARTING_POINTS_LOCKED",
            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::InvalidStartingDealer => "INVALID_STARTING_DEALER",

            Self::BadRequest => "BAD_REQUEST",
            Self::ConfirmationRequired => "CONFIRMATION_REQUIRED",

            Self::GameNotFound => "GAME_NOT_FOUND",

            Self::NothingToUndo => "NOTHING_TO_UNDO",

            Self::StorageUnavailable => "STORAGE_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
