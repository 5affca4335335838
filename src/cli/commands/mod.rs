//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Most verbs are a single request:
//! - [`query::QueryCommand`] for GET lookups
//! - [`annotate::UpdateCommand`] for POST annotation writes
//!
//! `init`, `status` and `cleanup` manage the cached session and have their
//! own commands.

pub mod annotate;
pub mod cleanup;
pub mod completions;
pub mod dispatcher;
pub mod init;
pub mod query;
pub mod status;

pub use dispatcher::{report_error, Command, CommandDispatcher, CommandResult};
