//! Filesystem abstraction used by the cache.
//!
//! [`PathCache`](super::PathCache) never calls `std::fs` directly; it goes
//! through a [`FileSystem`] so tests can run against [`MemoryFileSystem`]
//! without touching disk.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use fscache::cache::{FileSystem, MemoryFileSystem};
//!
//! let fs = MemoryFileSystem::new();
//! fs.create_dir_all(Path::new("a/b")).unwrap();
//! fs.write(Path::new("a/b/file"), b"data").unwrap();
//!
//! assert!(fs.is_file(Path::new("a/b/file")));
//! assert!(fs.is_dir(Path::new("a")));
//! assert_eq!(fs.read(Path::new("a/b/file")).unwrap(), b"data");
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// Filesystem primitives the cache is built on.
pub trait FileSystem: Send + Sync {
    /// Whether a regular file exists at `path`.
    fn is_file(&self, path: &Path) -> bool;

    /// Whether a directory exists at `path`.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read the whole file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or truncate the file and write `contents` to it.
    ///
    /// The parent directory must already exist.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Create a directory and all missing ancestors.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Remove a file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Remove a directory, failing unless it is empty.
    fn remove_dir(&self, path: &Path) -> io::Result<()>;

    /// Remove a directory and everything below it.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for Arc<T> {
    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        (**self).write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        (**self).remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        (**self).remove_dir(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).remove_dir_all(path)
    }
}

/// The real filesystem, via `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
}

impl MemoryState {
    fn has_children(&self, dir: &Path) -> bool {
        self.files.keys().any(|p| p.parent() == Some(dir))
            || self.dirs.iter().any(|p| p.parent() == Some(dir))
    }

    /// A parent of `path` that must exist before `path` can be created.
    ///
    /// Relative single-component paths (and `/`) have no such parent.
    fn required_parent(path: &Path) -> Option<&Path> {
        path.parent().filter(|p| !p.as_os_str().is_empty() && p.parent().is_some())
    }
}

/// In-memory filesystem for tests.
///
/// Paths are compared as given; no normalization of `.` or `..` is done.
/// Relative roots behave like paths under an always-present current
/// directory, and `/` always exists.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    state: Mutex<MemoryState>,
}

impl MemoryFileSystem {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files currently stored.
    pub fn file_count(&self) -> usize {
        self.lock().files.len()
    }

    /// Number of directories currently present.
    pub fn dir_count(&self) -> usize {
        self.lock().dirs.len()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // A panic while holding the lock leaves the maps consistent.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(ErrorKind::NotFound, format!("{} not found", path.display()))
}

fn is_a_directory(path: &Path) -> io::Error {
    io::Error::new(
        ErrorKind::IsADirectory,
        format!("{} is a directory", path.display()),
    )
}

impl FileSystem for MemoryFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        self.lock().files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.lock().dirs.contains(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let state = self.lock();
        if state.dirs.contains(path) {
            return Err(is_a_directory(path));
        }
        state.files.get(path).cloned().ok_or_else(|| not_found(path))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut state = self.lock();
        if state.dirs.contains(path) {
            return Err(is_a_directory(path));
        }
        if let Some(parent) = MemoryState::required_parent(path) {
            if !state.dirs.contains(parent) {
                return Err(not_found(parent));
            }
        }
        state.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.lock();
        let mut missing = Vec::new();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() || ancestor.parent().is_none() {
                break;
            }
            if state.files.contains_key(ancestor) {
                return Err(io::Error::new(
                    ErrorKind::NotADirectory,
                    format!("{} is not a directory", ancestor.display()),
                ));
            }
            if state.dirs.contains(ancestor) {
                break;
            }
            missing.push(ancestor.to_path_buf());
        }
        state.dirs.extend(missing);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let mut state = self.lock();
        if state.dirs.contains(path) {
            return Err(is_a_directory(path));
        }
        state
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| not_found(path))
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        let mut state = self.lock();
        if !state.dirs.contains(path) {
            return Err(not_found(path));
        }
        if state.has_children(path) {
            return Err(io::Error::new(
                ErrorKind::DirectoryNotEmpty,
                format!("{} is not empty", path.display()),
            ));
        }
        state.dirs.remove(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.lock();
        if !state.dirs.contains(path) {
            return Err(not_found(path));
        }
        state.files.retain(|p, _| !p.starts_with(path));
        state.dirs.retain(|p| !p.starts_with(path));
        Ok(())
    }
}
