//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`], which owns the cache they operate on.

pub mod clear;
pub mod config;
pub mod contains;
pub mod delete;
pub mod dispatcher;
pub mod get;
pub mod path;
pub mod set;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
