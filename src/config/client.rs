//! Per-invocation configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{CoderlmError, Result};
use crate::session::{SessionState, SessionStore};

use super::{ServerAddress, DEFAULT_HOST, DEFAULT_PORT};

/// Configuration shared by every command of one invocation.
///
/// Built once in `main`; commands never read the session file themselves.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Working directory the session file is resolved against.
    pub root: PathBuf,
    /// Location of the session file.
    pub state_path: PathBuf,
    /// Host given by `--host` or `CODERLM_HOST`.
    pub host: Option<String>,
    /// Port given by `--port` or `CODERLM_PORT`.
    pub port: Option<u16>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Cached session, if one was found.
    pub session: Option<SessionState>,
    /// Parse error of a session file that exists but is unreadable.
    pub unreadable: Option<String>,
}

impl ClientConfig {
    /// Load configuration for a working directory.
    ///
    /// A malformed session file does not fail the load: it is treated as no
    /// session, and [`require_session`](Self::require_session) reports it.
    pub fn load(
        root: &Path,
        host: Option<String>,
        port: Option<u16>,
        timeout: Duration,
    ) -> Result<Self> {
        let store = SessionStore::in_dir(root);
        let (session, unreadable) = match store.load() {
            Ok(session) => (session, None),
            Err(CoderlmError::StateFile { path, message }) => {
                tracing::warn!("Ignoring unreadable session file {:?}: {}", path, message);
                (None, Some(message))
            }
            Err(e) => return Err(e),
        };
        Ok(Self {
            root: root.to_path_buf(),
            state_path: store.path().to_path_buf(),
            host,
            port,
            timeout,
            session,
            unreadable,
        })
    }

    /// Store for the session file.
    pub fn store(&self) -> SessionStore {
        SessionStore::new(&self.state_path)
    }

    /// Error describing an unreadable session file, if there is one.
    pub fn session_error(&self) -> Option<CoderlmError> {
        self.unreadable.as_ref().map(|message| CoderlmError::StateFile {
            path: self.state_path.clone(),
            message: message.clone(),
        })
    }

    /// The cached session.
    ///
    /// Fails with [`CoderlmError::StateFile`] if the session file is
    /// unreadable, otherwise with [`CoderlmError::NoSession`] if none is cached.
    pub fn require_session(&self) -> Result<&SessionState> {
        if let Some(err) = self.session_error() {
            return Err(err);
        }
        self.session
            .as_ref()
            .filter(|s| s.id().is_some())
            .ok_or(CoderlmError::NoSession)
    }

    /// Server for commands that are not bound to the cached session.
    ///
    /// Explicit `--host`/`--port` win, then the cached session's server,
    /// then `127.0.0.1:3000`. Each part resolves independently.
    pub fn server(&self) -> ServerAddress {
        let cached = self.session.as_ref();
        let host = self
            .host
            .clone()
            .or_else(|| cached.map(|s| s.host.clone()))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = self
            .port
            .or_else(|| cached.map(|s| s.port))
            .unwrap_or(DEFAULT_PORT);
        ServerAddress::new(host, port)
    }
}
