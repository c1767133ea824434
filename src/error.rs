//! Error types for Simak.
//!
//! Uses `thiserror` for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for record store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("NIM {0} is already registered")]
    DuplicateKey(String),

    #[error("no student found with NIM {0}")]
    NotFound(String),

    #[error("import data is not valid JSON: {0}")]
    Parse(String),

    #[error("import data is not a JSON array of student records")]
    Format,

    #[error("stored data could not be parsed: {0}")]
    Load(String),

    #[error("no student data to export")]
    EmptyStore,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from configuration loading and path resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine user directories")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error type for CLI command handlers.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Nim(#[from] crate::types::NimError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;
