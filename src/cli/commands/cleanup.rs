//! Cleanup command implementation.
//!
//! The `coderlm-cli cleanup` command deletes the cached session on the
//! server and removes the local session file.

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The cleanup command implementation.
pub struct CleanupCommand<'a> {
    config: &'a ClientConfig,
}

impl<'a> CleanupCommand<'a> {
    /// Create a new cleanup command.
    pub fn new(config: &'a ClientConfig) -> Self {
        Self { config }
    }
}

impl Command for CleanupCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.config.unreadable.is_some() {
            self.config.store().clear()?;
            ui.warning("Removed unreadable session file.");
            return Ok(CommandResult::success());
        }

        let Some(id) = self.config.session.as_ref().and_then(|s| s.id()) else {
            ui.message("No active session.");
            return Ok(CommandResult::success());
        };

        let client = ApiClient::for_session(self.config)?;
        match client.delete(&format!("/sessions/{}", id)) {
            Ok(_) => {
                self.config.store().clear()?;
                ui.success(&format!("Session {} deleted.", id));
                Ok(CommandResult::success())
            }
            // The server answered, so the cached id is stale whatever it said.
            Err(e) if e.is_server_error() => {
                self.config.store().clear()?;
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
