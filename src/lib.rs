//! coderlm-cli - command-line client for a coderlm analysis server.
//!
//! The server parses and indexes a project; this crate relays exploration
//! queries (file structure, symbols, callers, grep, annotations) to it over
//! HTTP and caches the session descriptor locally so later invocations reuse
//! the same session.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`client`] - HTTP requests against the server's REST API
//! - [`config`] - Per-invocation configuration
//! - [`error`] - Error types and result aliases
//! - [`session`] - Session descriptor and its file storage
//! - [`ui`] - Result and diagnostic output
//!
//! # Example
//!
//! ```
//! use coderlm_cli::client::QueryParams;
//!
//! // Unset optional flags never reach the server
//! let params = QueryParams::new()
//!     .with("q", "parse")
//!     .with_opt::<usize>("limit", None);
//! assert!(!params.contains("limit"));
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod ui;

pub use error::{CoderlmError, Result};
