//! Process configuration read from the environment.

use std::env;
use std::path::PathBuf;

use crate::error::AppError;

pub const DEFAULT_SESSION_KEY: &str = "mahjong_game_state";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding `<session_key>.json`.
    pub data_dir: PathBuf,
    pub session_key: String,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = var_or("SCOREKEEPER_HOST", "0.0.0.0");
        let port = var_or("SCOREKEEPER_PORT", "3001")
            .parse::<u16>()
            .map_err(|_| AppError::config("SCOREKEEPER_PORT must be a valid port number"))?;
        let data_dir = PathBuf::from(var_or("SCOREKEEPER_DATA_DIR", "./data"));
        let session_key = session_key(&var_or("SCOREKEEPER_SESSION_KEY", DEFAULT_SESSION_KEY))?;
        let cors_origins = cors_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        Ok(Self {
            host,
            port,
            data_dir,
            session_key,
            cors_origins,
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// The key doubles as a file name, so it is restricted to a safe alphabet.
fn session_key(raw: &str) -> Result<String, AppError> {
    let ok = raw
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok && !raw.is_empty() {
        Ok(raw.to_string())
    } else {
        Err(AppError::config(format!(
            "SCOREKEEPER_SESSION_KEY may only contain letters, digits, '_' and '-', got '{raw}'"
        )))
    }
}

/// Comma-separated origins, e.g.
/// CORS_ALLOWED_ORIGINS=http://localhost:5173,https://scores.example.org
///
/// Empty, `null`, and non-http(s) entries are dropped; localhost is the
/// fallback when nothing usable is configured.
fn cors_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ]
    } else {
        origins
    }
}
