//! Error types for fscache operations.
//!
//! This module defines [`FsCacheError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Only the strict read path ([`get`](crate::PathCache::get)) reports a
//!   missing entry; `get_or_default` recovers from it locally
//! - Write and clear failures are always propagated, never swallowed
//! - Existence checks and deletes have no error type at all
//! - Use `anyhow::Error` (via `FsCacheError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fscache operations.
#[derive(Debug, Error)]
pub enum FsCacheError {
    /// No readable entry exists at the key's path.
    #[error("Cache entry not found: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating the entry's directories or writing its file failed.
    #[error("Failed to write cache entry {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The namespace directory exists but could not be removed.
    #[error("Failed to clear cache at {}: {source}", .path.display())]
    Clear {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {}: {message}", .path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FsCacheError {
    /// Whether this error means the entry is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for fscache operations.
pub type Result<T> = std::result::Result<T, FsCacheError>;
