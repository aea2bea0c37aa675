//! Contains command implementation.
//!
//! The `fscache contains` command reports whether a key is cached. Like
//! `test -e`, it exits with 1 when the key is absent.

use crate::cache::{FileSystem, PathCache};
use crate::cli::args::KeyArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The contains command implementation.
pub struct ContainsCommand<'a, F: FileSystem> {
    cache: &'a PathCache<F>,
    args: KeyArgs,
}

impl<'a, F: FileSystem> ContainsCommand<'a, F> {
    /// Create a new contains command.
    pub fn new(cache: &'a PathCache<F>, args: KeyArgs) -> Self {
        Self { cache, args }
    }
}

impl<F: FileSystem> Command for ContainsCommand<'_, F> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.cache.contains(self.args.key.as_str()) {
            ui.message("yes");
            Ok(CommandResult::success())
        } else {
            ui.message("no");
            Ok(CommandResult::failure(1))
        }
    }
}
