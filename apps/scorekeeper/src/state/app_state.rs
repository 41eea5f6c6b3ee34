use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::adapters::in_memory::InMemoryRepo;
use crate::adapters::json_file::JsonFileRepo;
use crate::config::{AppConfig, DEFAULT_SESSION_KEY};
use crate::repos::GameRepo;
use crate::services::session::SessionService;

/// Shared application state. Every request takes the session lock, runs one
/// operation to completion, and releases it.
pub struct AppState {
    session: Mutex<SessionService>,
}

impl AppState {
    pub fn new(session: SessionService) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }

    /// File-backed state as configured for the server.
    pub fn from_config(config: &AppConfig) -> Self {
        let repo: Arc<dyn GameRepo> = Arc::new(JsonFileRepo::new(&config.data_dir));
        Self::with_repo(repo, &config.session_key)
    }

    pub fn with_repo(repo: Arc<dyn GameRepo>, key: &str) -> Self {
        Self::new(SessionService::load(repo, key))
    }

    /// Ephemeral state for tests and throwaway runs.
    pub fn in_memory() -> Self {
        Self::with_repo(Arc::new(InMemoryRepo::new()), DEFAULT_SESSION_KEY)
    }

    pub fn session(&self) -> MutexGuard<'_, SessionService> {
        self.session.lock()
    }
}
