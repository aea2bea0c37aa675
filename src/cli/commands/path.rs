//! Path command implementation.
//!
//! The `fscache path` command prints where a key is (or would be) stored.

use crate::cache::{FileSystem, PathCache};
use crate::cli::args::KeyArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The path command implementation.
pub struct PathCommand<'a, F: FileSystem> {
    cache: &'a PathCache<F>,
    args: KeyArgs,
}

impl<'a, F: FileSystem> PathCommand<'a, F> {
    /// Create a new path command.
    pub fn new(cache: &'a PathCache<F>, args: KeyArgs) -> Self {
        Self { cache, args }
    }
}

impl<F: FileSystem> Command for PathCommand<'_, F> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = self.cache.key_path(self.args.key.as_str());
        ui.message(&path.display().to_string());
        Ok(CommandResult::success())
    }
}
