//! Visual theme and styling.

use console::{Style, Term};

/// Styles for diagnostic lines.
///
/// JSON documents are never styled.
#[derive(Debug, Clone)]
pub struct CoderlmTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for CoderlmTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CoderlmTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the colored or plain theme for a terminal.
    pub fn for_term(term: &Term) -> Self {
        if should_use_colors(term) {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Evaluate color support against stderr instead of stdout.
    pub fn for_stderr(self) -> Self {
        Self {
            success: self.success.for_stderr(),
            warning: self.warning.for_stderr(),
            error: self.error.for_stderr(),
            dim: self.dim.for_stderr(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message.
    ///
    /// Only the first line carries the icon; follow-up lines are remediation
    /// hints and are dimmed.
    pub fn format_error(&self, msg: &str) -> String {
        let mut lines = msg.lines();
        let first = lines.next().unwrap_or_default();
        let mut out = format!("{}", self.error.apply_to(format!("✗ {}", first)));
        for line in lines {
            out.push('\n');
            out.push_str(&format!("  {}", self.dim.apply_to(line)));
        }
        out
    }
}

/// Check if colors should be enabled for a terminal.
pub fn should_use_colors(term: &Term) -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    term.is_term()
}
