//! The live scoring session: owns the active game, runs engine operations,
//! and persists after every mutation.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, warn};

use crate::domain::hand_entry::HandEntry;
use crate::domain::rotation::advance_round;
use crate::domain::setup::{new_game, GameSetup, SettingsUpdate};
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::state::{RoundState, ScoreDeltas};
use crate::domain::undo::undo_last_hand;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::errors::ErrorCode;
use crate::repos::{GameRepo, SavedGame, StoreError};

/// Last storage failure. Play continues in memory while one is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageWarning {
    pub code: ErrorCode,
    pub detail: String,
}

impl StorageWarning {
    fn new(context: &str, err: &StoreError) -> Self {
        Self {
            code: err.code(),
            detail: format!("{context}: {err}"),
        }
    }
}

/// Snapshot plus session bookkeeping, as served to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub game_id: String,
    pub revision: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_warning: Option<StorageWarning>,
    #[serde(flatten)]
    pub game: GameSnapshot,
}

pub struct SessionService {
    repo: Arc<dyn GameRepo>,
    key: String,
    game: Option<SavedGame>,
    /// Highest revision handed out in this process. Survives a reset; the
    /// game id keeps ETags distinct across restarts.
    last_revision: u64,
    storage_warning: Option<StorageWarning>,
}

impl SessionService {
    /// Restore the saved game for `key`, if any.
    ///
    /// A record that cannot be read is logged and the session starts empty;
    /// the broken file is left in place until the next save replaces it.
    pub fn load(repo: Arc<dyn GameRepo>, key: impl Into<String>) -> Self {
        let key = key.into();
        let (game, storage_warning) = match repo.load(&key) {
            Ok(Some(game)) => {
                info!(
                    key = %key,
                    revision = game.revision,
                    hands = game.state.history.len(),
                    "Restored saved game"
                );
                (Some(game), None)
            }
            Ok(None) => {
                info!(key = %key, "No saved game; waiting for setup");
                (None, None)
            }
            Err(e) => {
                error!(key = %key, error = %e, "Failed to load saved game");
                (None, Some(StorageWarning::new("Saved game could not be loaded", &e)))
            }
        };
        let last_revision = game.as_ref().map_or(0, |g| g.revision);

        Self {
            repo,
            key,
            game,
            last_revision,
            storage_warning,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn has_game(&self) -> bool {
        self.game.is_some()
    }

    /// Revision of the active game, for conditional GETs.
    pub fn revision(&self) -> Option<u64> {
        self.game.as_ref().map(|g| g.revision)
    }

    pub fn storage_warning(&self) -> Option<&StorageWarning> {
        self.storage_warning.as_ref()
    }

    pub fn state(&self) -> Option<&RoundState> {
        self.game.as_ref().map(|g| &g.state)
    }

    pub fn view(&self) -> Result<SessionView, DomainError> {
        let game = self.current()?;
        Ok(SessionView {
            game_id: game.game_id.clone(),
            revision: game.revision,
            storage_warning: self.storage_warning.clone(),
            game: snapshot(&game.state),
        })
    }

    /// Start a game from the setup screen, replacing any existing one.
    pub fn setup(&mut self, setup: &GameSetup) -> Result<SessionView, DomainError> {
        let state = setup.build().inspect_err(|e| {
            warn!(error = %e, "Rejected game setup");
        })?;
        info!(variant = ?state.variant, starting_points = state.starting_points, "New game set up");
        self.replace(state);
        self.view()
    }

    /// Deltas the entry would apply, without recording anything.
    pub fn preview(&self, entry: &HandEntry) -> Result<ScoreDeltas, DomainError> {
        let deltas = entry.preview(&self.current()?.state)?;
        tracing::debug!(?deltas, "Hand preview");
        Ok(deltas)
    }

    pub fn submit_hand(&mut self, entry: &HandEntry) -> Result<SessionView, DomainError> {
        let game = self.current_mut()?;
        let record = entry
            .commit(&game.state)
            .and_then(|hand| advance_round(&mut game.state, hand.outcome, hand.deltas))
            .inspect_err(|e| warn!(error = %e, "Rejected hand"))?;

        info!(
            hand_label = %record.hand_label,
            outcome = ?record.outcome,
            changes = ?record.score_changes,
            "Hand recorded"
        );
        self.commit();
        self.view()
    }

    /// Remove the most recent hand. Needs `confirm`.
    pub fn undo(&mut self, confirm: bool) -> Result<SessionView, DomainError> {
        let game = self.current_mut()?;
        if game.state.history.is_empty() {
            return Err(DomainError::conflict(
                ConflictKind::NothingToUndo,
                "No hands to undo",
            ));
        }
        require_confirmation(confirm, "Undo the last hand?")?;

        if let Some(record) = undo_last_hand(&mut game.state) {
            info!(hand_label = %record.hand_label, "Hand undone");
        }
        self.commit();
        self.view()
    }

    /// Clear scores and history, keeping rules and settings. Needs `confirm`.
    pub fn new_game(&mut self, confirm: bool, keep_names: bool) -> Result<SessionView, DomainError> {
        let current = &self.current()?.state;
        require_confirmation(confirm, "Start a new game? Current scores will be lost.")?;

        let fresh = new_game(current, keep_names);
        info!(keep_names, "New game started");
        self.replace(fresh);
        self.view()
    }

    /// Drop the game entirely and delete the saved record. Needs `confirm`.
    pub fn reset_all(&mut self, confirm: bool) -> Result<(), DomainError> {
        require_confirmation(
            confirm,
            "This will delete all data including player names and settings.",
        )?;

        self.game = None;
        match self.repo.clear(&self.key) {
            Ok(()) => self.storage_warning = None,
            Err(e) => {
                error!(key = %self.key, error = %e, "Failed to clear saved game");
                self.storage_warning =
                    Some(StorageWarning::new("Saved game could not be deleted", &e));
            }
        }
        info!(key = %self.key, "All data reset");
        Ok(())
    }

    pub fn update_settings(&mut self, update: &SettingsUpdate) -> Result<SessionView, DomainError> {
        let game = self.current_mut()?;
        update
            .apply(&mut game.state)
            .inspect_err(|e| warn!(error = %e, "Rejected settings update"))?;
        info!("Settings updated");
        self.commit();
        self.view()
    }

    fn current(&self) -> Result<&SavedGame, DomainError> {
        self.game.as_ref().ok_or_else(no_game)
    }

    fn current_mut(&mut self) -> Result<&mut SavedGame, DomainError> {
        self.game.as_mut().ok_or_else(no_game)
    }

    fn replace(&mut self, state: RoundState) {
        self.game = Some(SavedGame::fresh(state));
        self.commit();
    }

    /// Bump the revision and write through to the store.
    fn commit(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        self.last_revision += 1;
        game.revision = self.last_revision;

        match self.repo.save(&self.key, game) {
            Ok(()) => self.storage_warning = None,
            Err(e) => {
                error!(key = %self.key, revision = game.revision, error = %e, "Failed to save game");
                self.storage_warning = Some(StorageWarning::new("Game could not be saved", &e));
            }
        }
    }
}

fn no_game() -> DomainError {
    DomainError::not_found(NotFoundKind::Game, "No game has been set up")
}

fn require_confirmation(confirm: bool, prompt: &str) -> Result<(), DomainError> {
    if confirm {
        Ok(())
    } else {
        Err(DomainError::confirmation_required(prompt))
    }
}
