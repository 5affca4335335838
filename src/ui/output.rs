//! Output mode and JSON rendering.

use serde_json::Value;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show informational lines and results.
    #[default]
    Normal,
    /// Show results and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows informational messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// How JSON documents are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Two-space indented.
    #[default]
    Pretty,
    /// Single line.
    Compact,
}

impl JsonStyle {
    /// Render a document in this style.
    pub fn render(&self, value: &Value) -> String {
        let rendered = match self {
            Self::Pretty => serde_json::to_string_pretty(value),
            Self::Compact => serde_json::to_string(value),
        };
        // Serializing a `Value` cannot fail: all keys are strings.
        rendered.unwrap_or_default()
    }
}
