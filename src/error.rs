//! Error types for coderlm-cli operations.
//!
//! This module defines [`CoderlmError`], the error type returned by every
//! command, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Session, transport and server failures get their own variants so the
//!   dispatcher can react to them (clear the session file, print the server's
//!   error body)
//! - Use `anyhow::Error` (via `CoderlmError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for coderlm-cli operations.
#[derive(Debug, Error)]
pub enum CoderlmError {
    /// No session is cached in the working directory.
    #[error("No active session. Run: coderlm-cli init")]
    NoSession,

    /// The server could not be reached at all.
    #[error(
        "Cannot connect to coderlm-server at {url}: {reason}\n\
         Make sure the server is running: coderlm-server serve"
    )]
    ServerUnreachable { url: String, reason: String },

    /// The server answered with a non-success status.
    ///
    /// `body` holds the server's JSON error document.
    #[error("Server returned HTTP {status}")]
    Server {
        status: u16,
        body: serde_json::Value,
    },

    /// The server no longer knows the cached session (HTTP 410).
    #[error("Project was evicted from server. Run: coderlm-cli init")]
    SessionEvicted,

    /// The server answered 2xx with a body that is not JSON.
    #[error("Invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    /// The session file exists but could not be parsed.
    #[error("Failed to parse session file at {path}: {message}")]
    StateFile { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoderlmError {
    /// Check if this error came from the server's response status.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Server { .. } | Self::SessionEvicted)
    }
}

/// Result type alias for coderlm-cli operations.
pub type Result<T> = std::result::Result<T, CoderlmError>;
