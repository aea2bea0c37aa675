//! Delete command implementation.

use crate::cache::{FileSystem, PathCache};
use crate::cli::args::KeyArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The delete command implementation.
///
/// Deleting a key that is not cached still succeeds.
pub struct DeleteCommand<'a, F: FileSystem> {
    cache: &'a PathCache<F>,
    args: KeyArgs,
}

impl<'a, F: FileSystem> DeleteCommand<'a, F> {
    /// Create a new delete command.
    pub fn new(cache: &'a PathCache<F>, args: KeyArgs) -> Self {
        Self { cache, args }
    }
}

impl<F: FileSystem> Command for DeleteCommand<'_, F> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.cache.delete(self.args.key.as_str()) {
            ui.success(&format!("Deleted {}", self.args.key));
        } else {
            ui.warning(&format!("{} was not cached", self.args.key));
        }
        Ok(CommandResult::success())
    }
}
