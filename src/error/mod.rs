// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for review-ready.
//!
//! Only the outer layers can fail: opening the repository, resolving refs,
//! computing the diff and loading configuration. The analysis core is total
//! and has no error type of its own.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for review-ready operations.
#[derive(Error, Debug)]
pub enum ReviewError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("{0}")]
    Git(#[from] GitError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Branch or ref '{reference}' does not exist locally or on {remote}")]
    RefNotFound { reference: String, remote: String },

    #[error("Failed to get diff: {message}")]
    DiffFailed { message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::DiffFailed {
            message: err.message().to_string(),
        }
    }
}

/// Result type alias for review-ready operations.
pub type Result<T> = std::result::Result<T, ReviewError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ReviewError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
