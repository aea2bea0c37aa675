//! Filesystem-backed key/value cache.
//!
//! This module provides [`PathCache`], which stores each value in a file
//! whose path is derived from the MD5 digest of its key, plus the
//! [`FileSystem`] abstraction it runs on.

pub mod fs;
pub mod key;
pub mod store;

pub use fs::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use key::{digest_hex, entry_path, CacheKey, DEFAULT_FILE_NAME, DIGEST_HEX_LEN, NAMESPACE};
pub use store::PathCache;
