//! Client configuration.
//!
//! Everything a command needs to know about its environment is gathered once
//! at process start into a [`ClientConfig`] and passed to each command:
//! - the working directory and the session file location under it
//! - the cached [`SessionState`](crate::session::SessionState), if any
//! - `--host`/`--port` overrides, resolved into a [`ServerAddress`]
//! - the request timeout
//!
//! # Example
//!
//! ```
//! use coderlm_cli::config::{ClientConfig, ServerAddress, DEFAULT_TIMEOUT};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let config = ClientConfig::load(temp.path(), None, Some(4000), DEFAULT_TIMEOUT).unwrap();
//! assert!(config.session.is_none());
//! assert_eq!(config.server(), ServerAddress::new("127.0.0.1", 4000));
//! ```

mod client;
mod server;

use std::time::Duration;

pub use client::ClientConfig;
pub use server::ServerAddress;

/// Host used when neither `--host` nor `CODERLM_HOST` is given.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port used when neither `--port` nor `CODERLM_PORT` is given.
pub const DEFAULT_PORT: u16 = 3000;

/// Path prefix of the versioned REST API.
pub const API_PREFIX: &str = "/api/v1";

/// Request timeout used when `--timeout` is not given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
