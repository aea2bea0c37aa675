//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cache::{FileSystem, OsFileSystem, PathCache};
use crate::cli::args::Commands;
use crate::config::CacheConfig;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<F: FileSystem = OsFileSystem> {
    config: CacheConfig,
    config_source: Option<PathBuf>,
    cache: PathCache<F>,
}

impl CommandDispatcher<OsFileSystem> {
    /// Create a dispatcher operating on the real filesystem.
    pub fn new(config: CacheConfig, config_source: Option<PathBuf>) -> Result<Self> {
        Self::with_fs(config, config_source, OsFileSystem)
    }
}

impl<F: FileSystem> CommandDispatcher<F> {
    /// Create a dispatcher operating on the given filesystem.
    pub fn with_fs(config: CacheConfig, config_source: Option<PathBuf>, fs: F) -> Result<Self> {
        let cache = PathCache::with_config(&config, fs)?;
        Ok(Self {
            config,
            config_source,
            cache,
        })
    }

    /// Get the cache commands operate on.
    pub fn cache(&self) -> &PathCache<F> {
        &self.cache
    }

    /// Get the config file the configuration was loaded from.
    pub fn config_source(&self) -> Option<&Path> {
        self.config_source.as_deref()
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, command: &Commands, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match command {
            Commands::Contains(args) => {
                super::contains::ContainsCommand::new(&self.cache, args.clone()).execute(ui)
            }
            Commands::Get(args) => {
                super::get::GetCommand::new(&self.cache, args.clone()).execute(ui)
            }
            Commands::Set(args) => {
                super::set::SetCommand::new(&self.cache, args.clone()).execute(ui)
            }
            Commands::Delete(args) => {
                super::delete::DeleteCommand::new(&self.cache, args.clone()).execute(ui)
            }
            Commands::Clear => super::clear::ClearCommand::new(&self.cache).execute(ui),
            Commands::Path(args) => {
                super::path::PathCommand::new(&self.cache, args.clone()).execute(ui)
            }
            Commands::Config => {
                super::config::ConfigCommand::new(&self.config, self.config_source.as_deref())
                    .execute(ui)
            }
        }
    }
}
