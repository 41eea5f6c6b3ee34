//! File-backed game store: one pretty-printed JSON document per key.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::repos::{GameRepo, SavedGame, StoreError};

pub mod dto;

pub use dto::GameRecord;

pub struct JsonFileRepo {
    dir: PathBuf,
}

/// Holds the OS-level lock on `<key>.json.lock`; released on drop.
struct WriteLock {
    _file: File,
}

impl JsonFileRepo {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{key}.json.tmp"))
    }

    fn lock_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json.lock"))
    }

    fn lock(&self, key: &str) -> Result<WriteLock, StoreError> {
        use fs4::fs_std::FileExt;

        let lock_path = self.lock_path(key);
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .read(true)
            .write(true)
            .open(&lock_path)?;

        // Ok(true) = acquired, Ok(false) = held elsewhere
        match file.try_lock_exclusive() {
            Ok(true) => Ok(WriteLock { _file: file }),
            Ok(false) => Err(StoreError::Locked(lock_path.display().to_string())),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                Err(StoreError::Locked(lock_path.display().to_string()))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

impl GameRepo for JsonFileRepo {
    fn load(&self, key: &str) -> Result<Option<SavedGame>, StoreError> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record: GameRecord = serde_json::from_str(&raw)?;
        let game = SavedGame::try_from(record)?;
        debug!(path = %path.display(), revision = game.revision, hands = game.state.history.len(), "Loaded saved game");
        Ok(Some(game))
    }

    fn save(&self, key: &str, game: &SavedGame) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let _lock = self.lock(key)?;

        let bytes = serde_json::to_vec_pretty(&GameRecord::from(game))?;
        let tmp = self.temp_path(key);
        {
            let mut file = File::create(&tmp)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, self.path_for(key))?;

        debug!(key, revision = game.revision, "Saved game");
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
