//! Config command implementation.
//!
//! The `fscache config` command shows resolved configuration.

use std::path::Path;

use crate::config::CacheConfig;
use crate::error::{FsCacheError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand<'a> {
    config: &'a CacheConfig,
    source: Option<&'a Path>,
}

impl<'a> ConfigCommand<'a> {
    /// Create a new config command.
    pub fn new(config: &'a CacheConfig, source: Option<&'a Path>) -> Self {
        Self { config, source }
    }
}

impl Command for ConfigCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.source {
            Some(path) => ui.message(&format!("# {}", path.display())),
            None => ui.message("# defaults (no config file)"),
        }

        let yaml = serde_yaml::to_string(self.config).map_err(|e| FsCacheError::Other(e.into()))?;
        ui.message(yaml.trim_end());

        Ok(CommandResult::success())
    }
}
