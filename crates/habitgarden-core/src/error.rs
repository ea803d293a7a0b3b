//! Core error types for habitgarden-core.
//!
//! This module defines the error hierarchy using thiserror. Derivation
//! functions are total over well-formed input; only boundary functions
//! (date-key parsing, persistence, configuration) can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitgarden-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed date key, empty window, unknown view tag, or any other
    /// argument the caller must fix. Never silently coerced.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// State persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the whole-state persistence adapter.
#[derive(Error, Debug)]
pub enum StorageError {
    /// State file exists but could not be read
    #[error("Failed to read state from {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    /// State file could not be written
    #[error("Failed to write state to {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    /// State file exists but does not parse as an application state document
    #[error("Persisted state at {path} is corrupt: {message}")]
    Corrupt { path: PathBuf, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Missing or unrecognized configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
