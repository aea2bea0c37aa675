//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cache::DEFAULT_FILE_NAME;

/// Cache configuration, as read from `fscache.yml`.
///
/// # Example
///
/// ```
/// use fscache::config::CacheConfig;
///
/// let config: CacheConfig = serde_yaml::from_str("file_name: value.bin").unwrap();
/// assert_eq!(config.file_name, "value.bin");
/// assert!(config.root.as_os_str().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Directory holding the `.fscache` namespace.
    ///
    /// Empty means the current directory. Relative paths in a config file
    /// are resolved against the file's directory.
    #[serde(skip_serializing_if = "is_empty_path")]
    pub root: PathBuf,

    /// Name of the file storing each entry's value.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            file_name: default_file_name(),
        }
    }
}

impl CacheConfig {
    /// Configuration rooted at `root` with default settings.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn is_empty_path(p: &Path) -> bool {
    p.as_os_str().is_empty()
}
