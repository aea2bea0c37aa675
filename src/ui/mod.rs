//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing results to stdout and errors to stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use fscache::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("yes");
//! ui.success("Stored entry");
//!
//! assert!(ui.has_message("yes"));
//! assert!(ui.has_success("Stored entry"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, FsCacheTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a result line (shown in every mode).
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Write raw bytes to the result stream, unmodified.
    fn write_raw(&mut self, bytes: &[u8]) -> Result<()>;
}
