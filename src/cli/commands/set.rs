//! Set command implementation.
//!
//! The `fscache set` command stores a value given on the command line, read
//! from a file, or read from stdin.

use std::fs;
use std::io::Read;

use crate::cache::{FileSystem, PathCache};
use crate::cli::args::SetArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The set command implementation.
pub struct SetCommand<'a, F: FileSystem> {
    cache: &'a PathCache<F>,
    args: SetArgs,
}

impl<'a, F: FileSystem> SetCommand<'a, F> {
    /// Create a new set command.
    pub fn new(cache: &'a PathCache<F>, args: SetArgs) -> Self {
        Self { cache, args }
    }

    /// Store the value read from `input` when the arguments name no source.
    pub fn execute_with_input(
        &self,
        ui: &mut dyn UserInterface,
        input: &mut dyn Read,
    ) -> Result<CommandResult> {
        let value = read_value(&self.args, input)?;
        self.cache.set(self.args.key.as_str(), &value)?;
        ui.success(&format!(
            "Stored {} bytes for {}",
            value.len(),
            self.args.key
        ));
        Ok(CommandResult::success())
    }
}

impl<F: FileSystem> Command for SetCommand<'_, F> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with_input(ui, &mut std::io::stdin().lock())
    }
}

fn read_value(args: &SetArgs, input: &mut dyn Read) -> Result<Vec<u8>> {
    if let Some(value) = &args.value {
        return Ok(value.as_bytes().to_vec());
    }
    if let Some(path) = &args.file {
        return Ok(fs::read(path)?);
    }
    let mut buf = Vec::new();
    input.read_to_end(&mut buf)?;
    Ok(buf)
}
