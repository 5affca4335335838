//! Annotation writes.
//!
//! `define-file`, `redefine-file`, `define-symbol`, `redefine-symbol`, `mark`
//! and `annotations save|load` each POST one JSON body to the cached
//! session's server and print the reply.

use serde_json::{json, Value};

use crate::cli::args::{FileDefinitionArgs, MarkArgs, SymbolDefinitionArgs};
use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// A session-bound POST whose JSON response is printed.
pub struct UpdateCommand<'a> {
    config: &'a ClientConfig,
    path: &'static str,
    body: Value,
}

impl<'a> UpdateCommand<'a> {
    /// Create an update for an API path.
    pub fn new(config: &'a ClientConfig, path: &'static str, body: Value) -> Self {
        Self { config, path, body }
    }
}

impl Command for UpdateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = ApiClient::for_session(self.config)?;
        let response = client.post(self.path, &self.body)?;
        ui.json(&response);
        Ok(CommandResult::success())
    }
}

impl FileDefinitionArgs {
    /// Body for `POST /structure/define` and `/structure/redefine`.
    pub fn body(&self) -> Value {
        json!({
            "file": self.file,
            "definition": self.definition,
        })
    }
}

impl SymbolDefinitionArgs {
    /// Body for `POST /symbols/define` and `/symbols/redefine`.
    pub fn body(&self) -> Value {
        json!({
            "symbol": self.symbol,
            "file": self.file,
            "definition": self.definition,
        })
    }
}

impl MarkArgs {
    /// Body for `POST /structure/mark`.
    pub fn body(&self) -> Value {
        json!({
            "file": self.file,
            "mark": self.mark.as_str(),
        })
    }
}
