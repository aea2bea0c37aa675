//! Configuration file discovery and loading.
//!
//! Settings are resolved in priority order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Config file (`--config`, or `fscache.yml` in the cache root)
//! 3. Command-line flags and their environment variables

use crate::config::schema::CacheConfig;
use crate::config::validator::validate;
use crate::error::{FsCacheError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the cache root.
pub const CONFIG_FILE_NAME: &str = "fscache.yml";

/// Values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Cache root; also where `fscache.yml` is discovered.
    pub root: Option<PathBuf>,
    /// Explicit config file; must exist.
    pub config_path: Option<PathBuf>,
    /// Entry file name.
    pub file_name: Option<String>,
}

/// Find `fscache.yml` in `root`, if present.
pub fn discover_config(root: &Path) -> Option<PathBuf> {
    let path = root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// The config file that [`load_config`] will read, if any.
pub fn resolve_config_path(overrides: &ConfigOverrides) -> Option<PathBuf> {
    match &overrides.config_path {
        Some(path) => Some(path.clone()),
        None => discover_config(overrides.root.as_deref().unwrap_or_else(|| Path::new(""))),
    }
}

/// Load a single config file.
///
/// A relative (or missing) `root` is resolved against the directory that
/// contains the file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CacheConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FsCacheError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FsCacheError::Io(e)
        }
    })?;

    let mut config = parse_config(&content, path)?;
    let config_dir = path.parent().unwrap_or_else(|| Path::new(""));
    if config.root.as_os_str().is_empty() {
        config.root = config_dir.to_path_buf();
    } else if config.root.is_relative() {
        config.root = config_dir.join(&config.root);
    }

    Ok(config)
}

/// Parse YAML content into a [`CacheConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<CacheConfig> {
    // An empty file is a valid, empty config.
    if content.trim().is_empty() {
        return Ok(CacheConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| FsCacheError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the effective configuration.
///
/// Loads the explicit or discovered config file, applies overrides and
/// validates the result.
pub fn load_config(overrides: &ConfigOverrides) -> Result<CacheConfig> {
    let search_root = overrides.root.clone().unwrap_or_default();

    let mut config = match resolve_config_path(overrides) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_config_file(&path)?
        }
        None => CacheConfig::with_root(search_root),
    };

    if let Some(root) = &overrides.root {
        config.root = root.clone();
    }
    if let Some(file_name) = &overrides.file_name {
        config.file_name = file_name.clone();
    }

    validate(&config)?;
    Ok(config)
}
