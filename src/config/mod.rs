//! Configuration loading, parsing, and validation.
//!
//! - Schema definition in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use fscache::config::{load_config, ConfigOverrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("fscache.yml"), "file_name: page.html").unwrap();
//!
//! let config = load_config(&ConfigOverrides {
//!     root: Some(temp.path().to_path_buf()),
//!     ..Default::default()
//! })
//! .unwrap();
//! assert_eq!(config.file_name, "page.html");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    discover_config, load_config, load_config_file, parse_config, resolve_config_path,
    ConfigOverrides, CONFIG_FILE_NAME,
};
pub use schema::CacheConfig;
pub use validator::{
    check_file_name, validate, validate_config, validate_file_name, ValidationError,
};
