//! fscache - a persistent key/value cache stored on the filesystem.
//!
//! Values are kept in files whose paths are derived from the MD5 digest of
//! their key, one directory level per hex digit, so lookups need no index:
//!
//! ```text
//! <root>/.fscache/c/1/3/9/3/b/d/.../a/c/index.html
//! ```
//!
//! # Modules
//!
//! - [`cache`] - Key hashing, the filesystem abstraction and [`PathCache`]
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use fscache::{MemoryFileSystem, PathCache};
//!
//! let cache = PathCache::with_fs("", MemoryFileSystem::new());
//! let url = "http://google.com/abc";
//!
//! assert!(!cache.contains(url));
//! cache.set(url, "<html>abc</html>").unwrap();
//! assert_eq!(cache.get(url).unwrap(), b"<html>abc</html>");
//! assert_eq!(cache.get_or_default("<html>abc</html>", ""), b"");
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

pub use cache::{CacheKey, FileSystem, MemoryFileSystem, OsFileSystem, PathCache};
pub use error::{FsCacheError, Result};
