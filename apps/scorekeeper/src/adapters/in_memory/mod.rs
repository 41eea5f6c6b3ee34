//! In-process game store for tests and ephemeral runs.

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::repos::{GameRepo, SavedGame, StoreError};

#[derive(Default)]
pub struct InMemoryRepo {
    games: Mutex<HashMap<String, SavedGame>>,
    unavailable: AtomicBool,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with an I/O error, as a full disk or
    /// revoked permissions would.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Io(io::Error::other("store unavailable")))
        } else {
            Ok(())
        }
    }
}

impl GameRepo for InMemoryRepo {
    fn load(&self, key: &str) -> Result<Option<SavedGame>, StoreError> {
        self.check()?;
        Ok(self.games.lock().get(key).cloned())
    }

    fn save(&self, key: &str, game: &SavedGame) -> Result<(), StoreError> {
        self.check()?;
        self.games.lock().insert(key.to_string(), game.clone());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StoreError> {
        self.check()?;
        self.games.lock().remove(key);
        Ok(())
    }
}
