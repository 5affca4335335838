//! Session descriptor.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::config::{ServerAddress, DEFAULT_HOST, DEFAULT_PORT};

/// The cached description of a server session.
///
/// Missing fields fall back to defaults so that a hand-edited or partially
/// written file still loads; an empty `session_id` means "no session".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Opaque id issued by the server.
    #[serde(default)]
    pub session_id: String,
    /// Server host the session lives on.
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port the session lives on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Absolute path of the project directory.
    #[serde(default)]
    pub project: String,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created_at: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl SessionState {
    /// Create a descriptor for a freshly created session.
    pub fn new(
        session_id: impl Into<String>,
        server: &ServerAddress,
        project: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            host: server.host.clone(),
            port: server.port,
            project: project.into(),
            created_at: created_at.into(),
        }
    }

    /// The session id, if one is recorded.
    pub fn id(&self) -> Option<&str> {
        if self.session_id.is_empty() {
            None
        } else {
            Some(&self.session_id)
        }
    }

    /// The server this session was created on.
    pub fn server(&self) -> ServerAddress {
        ServerAddress::new(self.host.clone(), self.port)
    }

    /// Parsed creation time, if the stored value is valid RFC 3339.
    pub fn created(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.created_at).ok()
    }
}
