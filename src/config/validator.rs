//! Configuration validation rules.
//!
//! The entry file must stay inside its hex directory, so the file name has
//! to be a single plain path component.

use std::path::{Component, Path};

use crate::cache::NAMESPACE;
use crate::config::schema::CacheConfig;
use crate::error::{FsCacheError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Check a single entry file name against the layout rules.
///
/// The name must be exactly one normal path component, so the entry file
/// always lands directly inside its last hex directory.
pub fn check_file_name(name: &str) -> Option<ValidationError> {
    if name.is_empty() {
        return Some(ValidationError {
            rule: "empty-file-name".to_string(),
            message: "file_name must not be empty".to_string(),
        });
    }
    if name == "." || name == ".." {
        return Some(ValidationError {
            rule: "relative-file-name".to_string(),
            message: format!("file_name '{}' is not a file name", name),
        });
    }

    let mut components = Path::new(name).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single || name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
        return Some(ValidationError {
            rule: "nested-file-name".to_string(),
            message: format!("file_name '{}' must not contain a path separator", name),
        });
    }

    None
}

/// Reject an entry file name that could escape the cache directory.
pub fn validate_file_name(name: &str) -> Result<()> {
    match check_file_name(name) {
        Some(error) => Err(FsCacheError::ConfigValidationError {
            message: error.message,
        }),
        None => Ok(()),
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &CacheConfig) -> Vec<ValidationError> {
    let errors: Vec<ValidationError> = check_file_name(&config.file_name).into_iter().collect();

    if config.root.ends_with(NAMESPACE) {
        tracing::warn!(
            root = %config.root.display(),
            "cache root already ends in {}; entries will be nested one level deeper",
            NAMESPACE
        );
    }

    errors
}

/// Validate a configuration, returning a single error describing every
/// problem found.
pub fn validate(config: &CacheConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(FsCacheError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
