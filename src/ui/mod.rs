//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing results to stdout and diagnostics to stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use coderlm_cli::ui::{MockUI, UserInterface};
//! use serde_json::json;
//!
//! let mut ui = MockUI::new();
//! ui.json(&json!({"count": 2}));
//! ui.error("Cannot connect");
//!
//! assert_eq!(ui.documents()[0]["count"], 2);
//! assert!(ui.has_error("Cannot connect"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::{JsonStyle, OutputMode};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, CoderlmTheme};

use serde_json::Value;

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational line on stdout.
    fn message(&mut self, msg: &str);

    /// Display a success line on stdout.
    fn success(&mut self, msg: &str);

    /// Display a warning on stderr.
    fn warning(&mut self, msg: &str);

    /// Display an error on stderr. Never suppressed.
    fn error(&mut self, msg: &str);

    /// Print a JSON document on stdout. Never suppressed.
    fn json(&mut self, value: &Value);
}
