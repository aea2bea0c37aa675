//! Key hashing and the on-disk entry layout.
//!
//! A key is hashed with MD5 and the 32 lowercase hex characters of the digest
//! become 32 nested single-character directories under the namespace:
//!
//! ```text
//! <root>/.fscache/c/1/3/9/.../a/c/index.html
//! ```
//!
//! This layout is the on-disk format; changing the hash or the nesting makes
//! previously written caches unreadable.

use std::path::{Path, PathBuf};

/// Directory under the cache root that holds every entry.
pub const NAMESPACE: &str = ".fscache";

/// Default name of the file holding an entry's value.
pub const DEFAULT_FILE_NAME: &str = "index.html";

/// Number of hex characters (and nested directories) per entry.
pub const DIGEST_HEX_LEN: usize = 32;

/// A cache key: either text or raw bytes.
///
/// Text keys are hashed as their UTF-8 encoding. Byte keys are hashed as-is,
/// whether or not they are valid UTF-8, so `CacheKey::from("abc")` and
/// `CacheKey::from(b"abc")` address the same entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKey<'a> {
    /// A string key.
    Text(&'a str),
    /// A byte key.
    Bytes(&'a [u8]),
}

impl<'a> CacheKey<'a> {
    /// The bytes fed to the hash.
    pub fn as_bytes(&self) -> &'a [u8] {
        match *self {
            Self::Text(s) => s.as_bytes(),
            Self::Bytes(b) => b,
        }
    }
}

impl<'a> From<&'a str> for CacheKey<'a> {
    fn from(key: &'a str) -> Self {
        Self::Text(key)
    }
}

impl<'a> From<&'a String> for CacheKey<'a> {
    fn from(key: &'a String) -> Self {
        Self::Text(key.as_str())
    }
}

impl<'a> From<&'a [u8]> for CacheKey<'a> {
    fn from(key: &'a [u8]) -> Self {
        Self::Bytes(key)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for CacheKey<'a> {
    fn from(key: &'a [u8; N]) -> Self {
        Self::Bytes(key.as_slice())
    }
}

impl<'a> From<&'a Vec<u8>> for CacheKey<'a> {
    fn from(key: &'a Vec<u8>) -> Self {
        Self::Bytes(key.as_slice())
    }
}

/// Lowercase hex MD5 digest of the key bytes.
pub fn digest_hex(key: CacheKey<'_>) -> String {
    format!("{:x}", md5::compute(key.as_bytes()))
}

/// Path of the entry file for `key` under `root`.
pub fn entry_path(root: &Path, key: CacheKey<'_>, file_name: &str) -> PathBuf {
    let mut path = root.join(NAMESPACE);
    let digest = digest_hex(key);
    let mut buf = [0u8; 4];
    for c in digest.chars() {
        path.push(&*c.encode_utf8(&mut buf));
    }
    path.push(file_name);
    path
}
