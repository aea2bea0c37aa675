//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// fscache - a key/value cache stored on the filesystem.
#[derive(Debug, Parser)]
#[command(name = "fscache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the .fscache namespace (defaults to the current directory)
    #[arg(short, long, global = true, env = "FSCACHE_ROOT")]
    pub root: Option<PathBuf>,

    /// Path to config file (overrides <root>/fscache.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Name of the file storing each entry
    #[arg(long, global = true, env = "FSCACHE_FILE_NAME")]
    pub file_name: Option<String>,

    /// Only print results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration overrides taken from global flags.
    pub fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            root: self.root.clone(),
            config_path: self.config.clone(),
            file_name: self.file_name.clone(),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether a key is cached (exit code 1 when it is not)
    Contains(KeyArgs),

    /// Print the cached value for a key
    Get(GetArgs),

    /// Store a value for a key
    Set(SetArgs),

    /// Remove a key from the cache
    Delete(KeyArgs),

    /// Remove every cached entry
    Clear,

    /// Print the file path a key is stored at
    Path(KeyArgs),

    /// Show resolved configuration
    Config,
}

/// Arguments for commands that take only a key.
#[derive(Debug, Clone, clap::Args)]
pub struct KeyArgs {
    /// Cache key
    pub key: String,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GetArgs {
    /// Cache key
    pub key: String,

    /// Print this instead of failing when the key is not cached
    #[arg(short, long)]
    pub default: Option<String>,
}

/// Arguments for the `set` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SetArgs {
    /// Cache key
    pub key: String,

    /// Value to store (read from stdin when neither VALUE nor --file is given)
    #[arg(conflicts_with = "file")]
    pub value: Option<String>,

    /// Read the value from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}
