//! Cache storage implementation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::fs::{FileSystem, OsFileSystem};
use super::key::{entry_path, CacheKey, DEFAULT_FILE_NAME, NAMESPACE};
use crate::config::{validate_file_name, CacheConfig};
use crate::error::{FsCacheError, Result};

/// A key/value cache stored as files under `<root>/.fscache`.
///
/// Each key maps to `<root>/.fscache/<32 hex dirs>/<file_name>`; the file's
/// content is the value and its existence is cache membership. Nothing is
/// kept in memory besides the root and file name.
///
/// # Example
///
/// ```
/// use fscache::PathCache;
///
/// let temp = tempfile::TempDir::new().unwrap();
/// let cache = PathCache::new(temp.path());
///
/// assert!(!cache.contains("http://google.com/abc"));
/// cache.set("http://google.com/abc", b"<html>abc</html>").unwrap();
/// assert!(cache.contains("http://google.com/abc"));
/// assert_eq!(cache.get("http://google.com/abc").unwrap(), b"<html>abc</html>");
///
/// cache.clear().unwrap();
/// assert!(!cache.contains("http://google.com/abc"));
/// ```
#[derive(Debug, Clone)]
pub struct PathCache<F: FileSystem = OsFileSystem> {
    /// Base directory; entries live under `root/.fscache`.
    root: PathBuf,
    /// Name of the file at the bottom of each entry's directory chain.
    file_name: String,
    fs: F,
}

impl PathCache<OsFileSystem> {
    /// Create a cache rooted at `root` on the real filesystem.
    ///
    /// An empty path means the current working directory. Nothing is
    /// created until the first [`set`](Self::set).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_fs(root, OsFileSystem)
    }

    /// Create a cache from a loaded configuration.
    ///
    /// Fails if the configured file name is not a single plain component.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::with_config(config, OsFileSystem)
    }
}

impl Default for PathCache<OsFileSystem> {
    fn default() -> Self {
        Self::new(PathBuf::new())
    }
}

impl<F: FileSystem> PathCache<F> {
    /// Create a cache rooted at `root` on the given filesystem.
    pub fn with_fs(root: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            root: root.into(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            fs,
        }
    }

    /// Create a cache from a configuration on the given filesystem.
    pub fn with_config(config: &CacheConfig, fs: F) -> Result<Self> {
        validate_file_name(&config.file_name)?;
        Ok(Self {
            root: config.root.clone(),
            file_name: config.file_name.clone(),
            fs,
        })
    }

    /// Use a different entry file name.
    ///
    /// Caches written with one file name are invisible to a cache using
    /// another. Names that are empty, `.`/`..` or contain a separator are
    /// rejected with [`FsCacheError::ConfigValidationError`].
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Result<Self> {
        let file_name = file_name.into();
        validate_file_name(&file_name)?;
        self.file_name = file_name;
        Ok(self)
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the entry file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Get the filesystem the cache operates on.
    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// The directory holding every entry (`<root>/.fscache`).
    pub fn namespace_dir(&self) -> PathBuf {
        self.root.join(NAMESPACE)
    }

    /// The file path storing the value for `key`.
    pub fn key_path<'k>(&self, key: impl Into<CacheKey<'k>>) -> PathBuf {
        entry_path(&self.root, key.into(), &self.file_name)
    }

    /// Whether a value is stored for `key`.
    ///
    /// Anything that prevents confirming the entry reads as `false`.
    pub fn contains<'k>(&self, key: impl Into<CacheKey<'k>>) -> bool {
        let path = self.key_path(key);
        let found = self.fs.is_file(&path);
        debug!(path = %path.display(), found, "contains");
        found
    }

    /// Read the value stored for `key`.
    ///
    /// Returns [`FsCacheError::NotFound`] if the entry is missing or cannot
    /// be read.
    pub fn get<'k>(&self, key: impl Into<CacheKey<'k>>) -> Result<Vec<u8>> {
        let path = self.key_path(key);
        debug!(path = %path.display(), "get");
        self.fs
            .read(&path)
            .map_err(|source| FsCacheError::NotFound { path, source })
    }

    /// Read the value stored for `key`, or `default` if there is none.
    pub fn get_or_default<'k>(
        &self,
        key: impl Into<CacheKey<'k>>,
        default: impl Into<Vec<u8>>,
    ) -> Vec<u8> {
        match self.get(key) {
            Ok(value) => value,
            Err(_) => default.into(),
        }
    }

    /// Store `value` for `key`, replacing any previous value.
    ///
    /// Missing directories are created. On failure no entry is left behind
    /// that could be mistaken for the value.
    pub fn set<'k>(&self, key: impl Into<CacheKey<'k>>, value: impl AsRef<[u8]>) -> Result<()> {
        let path = self.key_path(key);
        let value = value.as_ref();
        debug!(path = %path.display(), bytes = value.len(), "set");

        if let Some(parent) = path.parent() {
            if !self.fs.is_dir(parent) {
                self.fs
                    .create_dir_all(parent)
                    .map_err(|source| FsCacheError::Write {
                        path: path.clone(),
                        source,
                    })?;
            }
        }

        if let Err(source) = self.fs.write(&path, value) {
            // The write may have truncated the file before failing.
            if self.fs.is_file(&path) {
                if let Err(e) = self.fs.remove_file(&path) {
                    warn!(path = %path.display(), error = %e, "failed to remove partial entry");
                }
            }
            return Err(FsCacheError::Write { path, source });
        }

        Ok(())
    }

    /// Remove the value for `key` and prune emptied directories.
    ///
    /// Parents are removed bottom-up until one is non-empty; the namespace
    /// directory itself is never removed. Returns whether an entry file was
    /// removed. Failures are logged and otherwise ignored.
    pub fn delete<'k>(&self, key: impl Into<CacheKey<'k>>) -> bool {
        let path = self.key_path(key);
        let removed = match self.fs.remove_file(&path) {
            Ok(()) => true,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    warn!(path = %path.display(), error = %e, "failed to remove entry");
                }
                false
            }
        };
        debug!(path = %path.display(), removed, "delete");

        self.prune_empty_parents(&path);
        removed
    }

    /// Remove every entry by deleting the namespace directory.
    ///
    /// A missing namespace is not an error.
    pub fn clear(&self) -> Result<()> {
        let namespace = self.namespace_dir();
        if !self.fs.is_dir(&namespace) {
            debug!(path = %namespace.display(), "clear: nothing to remove");
            return Ok(());
        }

        debug!(path = %namespace.display(), "clear");
        match self.fs.remove_dir_all(&namespace) {
            Ok(()) => Ok(()),
            // Removed concurrently.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(FsCacheError::Clear {
                path: namespace,
                source,
            }),
        }
    }

    fn prune_empty_parents(&self, entry: &Path) {
        let namespace = self.namespace_dir();
        let mut dir = entry.parent();

        while let Some(current) = dir {
            if current == namespace || !current.starts_with(&namespace) {
                break;
            }
            match self.fs.remove_dir(current) {
                Ok(()) => dir = current.parent(),
                Err(e) => {
                    // Non-empty, already gone, or racing with another delete.
                    if !matches!(
                        e.kind(),
                        ErrorKind::NotFound | ErrorKind::DirectoryNotEmpty
                    ) {
                        debug!(path = %current.display(), error = %e, "stopped pruning");
                    }
                    break;
                }
            }
        }
    }
}
