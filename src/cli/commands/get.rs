//! Get command implementation.
//!
//! The `fscache get` command writes a cached value to stdout, byte for byte.

use crate::cache::{FileSystem, PathCache};
use crate::cli::args::GetArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The get command implementation.
pub struct GetCommand<'a, F: FileSystem> {
    cache: &'a PathCache<F>,
    args: GetArgs,
}

impl<'a, F: FileSystem> GetCommand<'a, F> {
    /// Create a new get command.
    pub fn new(cache: &'a PathCache<F>, args: GetArgs) -> Self {
        Self { cache, args }
    }
}

impl<F: FileSystem> Command for GetCommand<'_, F> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let key = self.args.key.as_str();

        let value = match &self.args.default {
            Some(default) => self.cache.get_or_default(key, default.as_bytes()),
            None => match self.cache.get(key) {
                Ok(value) => value,
                Err(e) if e.is_not_found() => {
                    ui.error(&format!("Key not cached: {}", key));
                    return Ok(CommandResult::failure(1));
                }
                Err(e) => return Err(e),
            },
        };

        ui.write_raw(&value)?;
        Ok(CommandResult::success())
    }
}
