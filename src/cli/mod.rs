//! Command-line interface for fscache.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, GetArgs, KeyArgs, SetArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
