//! Clear command implementation.

use crate::cache::{FileSystem, PathCache};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The clear command implementation.
pub struct ClearCommand<'a, F: FileSystem> {
    cache: &'a PathCache<F>,
}

impl<'a, F: FileSystem> ClearCommand<'a, F> {
    /// Create a new clear command.
    pub fn new(cache: &'a PathCache<F>) -> Self {
        Self { cache }
    }
}

impl<F: FileSystem> Command for ClearCommand<'_, F> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let namespace = self.cache.namespace_dir();
        if !self.cache.filesystem().is_dir(&namespace) {
            ui.message("Cache is already empty");
            return Ok(CommandResult::success());
        }

        self.cache.clear()?;
        ui.success(&format!("Cleared {}", namespace.display()));
        Ok(CommandResult::success())
    }
}
