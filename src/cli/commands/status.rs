//! Status command implementation.
//!
//! The `coderlm-cli status` command shows server health and, when a session
//! is cached, the cached descriptor and what the server knows about it.

use serde_json::{json, Value};

use crate::client::{ApiClient, QueryParams};
use crate::config::ClientConfig;
use crate::error::{CoderlmError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Placeholder reported when the server no longer answers for the session.
pub const SESSION_EXPIRED: &str = "session may have expired";

/// The status command implementation.
pub struct StatusCommand<'a> {
    config: &'a ClientConfig,
}

impl<'a> StatusCommand<'a> {
    /// Create a new status command.
    pub fn new(config: &'a ClientConfig) -> Self {
        Self { config }
    }
}

impl Command for StatusCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(session) = &self.config.session else {
            if let Some(err) = self.config.session_error() {
                ui.warning(&err.to_string());
            }
            let client = ApiClient::for_server(self.config)?;
            let health = client.get("/health", &QueryParams::new())?;
            ui.json(&health);
            return Ok(CommandResult::success());
        };

        let client = ApiClient::new(&session.server(), self.config.timeout)?;
        let health = client.get("/health", &QueryParams::new())?;
        let mut report = json!({
            "server": health,
            "session": session,
        });

        if let Some(id) = session.id() {
            let details = match client.get(&format!("/sessions/{}", id), &QueryParams::new()) {
                Ok(details) => details,
                Err(e @ CoderlmError::SessionEvicted) => return Err(e),
                Err(e) => {
                    tracing::debug!("Session lookup failed: {}", e);
                    Value::String(SESSION_EXPIRED.to_string())
                }
            };
            report["session_details"] = details;
        }

        ui.json(&report);
        Ok(CommandResult::success())
    }
}
