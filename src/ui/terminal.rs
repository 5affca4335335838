//! Terminal UI.

use console::Term;
use std::io::Write;

use serde_json::Value;

use super::{CoderlmTheme, JsonStyle, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Results and informational lines go to stdout, diagnostics to stderr, so
/// stdout stays parseable when piped.
pub struct TerminalUI {
    out: Term,
    err: Term,
    out_theme: CoderlmTheme,
    err_theme: CoderlmTheme,
    mode: OutputMode,
    style: JsonStyle,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, style: JsonStyle) -> Self {
        let out = Term::stdout();
        let err = Term::stderr();
        Self {
            out_theme: CoderlmTheme::for_term(&out),
            err_theme: CoderlmTheme::for_term(&err).for_stderr(),
            out,
            err,
            mode,
            style,
        }
    }

    /// Get the JSON layout.
    pub fn json_style(&self) -> JsonStyle {
        self.style
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.out_theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.err_theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.err_theme.format_error(msg)).ok();
    }

    fn json(&mut self, value: &Value) {
        writeln!(self.out, "{}", self.style.render(value)).ok();
    }
}

/// Create the UI for this process.
pub fn create_ui(mode: OutputMode, style: JsonStyle) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet, JsonStyle::Pretty);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn terminal_ui_json_style() {
        let ui = TerminalUI::new(OutputMode::Normal, JsonStyle::Compact);
        assert_eq!(ui.json_style(), JsonStyle::Compact);
    }

    #[test]
    fn create_ui_respects_mode() {
        let ui = create_ui(OutputMode::Quiet, JsonStyle::Pretty);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
