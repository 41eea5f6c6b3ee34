//! Persistence contract for the single active game.

use thiserror::Error;
use uuid::Uuid;

use crate::domain::state::RoundState;
use crate::errors::ErrorCode;

/// A stored game plus its revision counter. The revision is bumped on every
/// mutation and feeds the snapshot ETag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGame {
    pub state: RoundState,
    pub revision: u64,
    /// Minted at setup and on every new game. Part of the ETag, so a game
    /// started after a reset never matches a validator from an older one.
    pub game_id: String,
}

impl SavedGame {
    /// A just-created game under a fresh id.
    pub fn fresh(state: RoundState) -> Self {
        Self {
            state,
            revision: 0,
            game_id: mint_game_id(),
        }
    }
}

pub fn mint_game_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("saved game could not be decoded: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("save file is locked by another process: {0}")]
    Locked(String),
}

impl StoreError {
    /// Code reported alongside the storage warning.
    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::Serde(_) => ErrorCode::DataCorruption,
            StoreError::Io(_) | StoreError::Locked(_) => ErrorCode::StorageUnavailable,
        }
    }
}

/// Key-value store for one game record.
///
/// Implementations are synchronous; callers hold the session lock across
/// load/save so there is exactly one writer per process.
pub trait GameRepo: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<SavedGame>, StoreError>;
    fn save(&self, key: &str, game: &SavedGame) -> Result<(), StoreError>;
    /// Remove the record. Clearing a missing record is not an error.
    fn clear(&self, key: &str) -> Result<(), StoreError>;
}
