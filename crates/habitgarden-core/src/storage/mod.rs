//! Persistence for application state and configuration.

mod config;
mod state_store;

pub use config::Config;
pub use state_store::{JsonFileStore, MemoryStore, StateStore, STATE_FILE};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/habitgarden[-dev]/` based on HABITGARDEN_ENV.
///
/// Set HABITGARDEN_ENV=dev to use the development data directory, or
/// HABITGARDEN_DATA_DIR to point at an explicit directory (used by
/// tests so they never touch the real home directory).
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("HABITGARDEN_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HABITGARDEN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("habitgarden-dev")
    } else {
        base_dir.join("habitgarden")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
