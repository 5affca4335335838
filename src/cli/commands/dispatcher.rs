//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands
//! - [`report_error`] for turning a failed command into user-facing output

use crate::cli::args::{AnnotationsAction, Cli, Commands};
use crate::client::QueryParams;
use crate::config::ClientConfig;
use crate::error::{CoderlmError, Result};
use crate::ui::UserInterface;

use super::annotate::UpdateCommand;
use super::cleanup::CleanupCommand;
use super::completions::CompletionsCommand;
use super::init::InitCommand;
use super::query::QueryCommand;
use super::status::StatusCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying results and messages
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: ClientConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher for a loaded configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Dispatch and execute a command.
    ///
    /// If the server reports the session as evicted, the local session file
    /// is removed before the error is returned.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let result = self.route(&cli.command, ui);

        if let Err(CoderlmError::SessionEvicted) = &result {
            tracing::warn!("Clearing evicted session at {:?}", self.config.state_path);
            if let Err(e) = self.config.store().clear() {
                ui.warning(&format!("Failed to clear session file: {}", e));
            }
        }

        result
    }

    fn route(&self, command: &Commands, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = &self.config;
        match command {
            Commands::Init(args) => InitCommand::new(config, args.clone()).execute(ui),
            Commands::Status => StatusCommand::new(config).execute(ui),
            Commands::Structure(args) => {
                QueryCommand::session(config, "/structure", args.params()).execute(ui)
            }
            Commands::Symbols(args) => {
                QueryCommand::session(config, "/symbols", args.params()).execute(ui)
            }
            Commands::Search(args) => {
                QueryCommand::session(config, "/symbols/search", args.params()).execute(ui)
            }
            Commands::Impl(args) => {
                QueryCommand::session(config, "/symbols/implementation", args.params())
                    .execute(ui)
            }
            Commands::Callers(args) => {
                QueryCommand::session(config, "/symbols/callers", args.params()).execute(ui)
            }
            Commands::Tests(args) => {
                QueryCommand::session(config, "/symbols/tests", args.params()).execute(ui)
            }
            Commands::Variables(args) => {
                QueryCommand::session(config, "/symbols/variables", args.params()).execute(ui)
            }
            Commands::Peek(args) => {
                QueryCommand::session(config, "/peek", args.params()).execute(ui)
            }
            Commands::Grep(args) => {
                QueryCommand::session(config, "/grep", args.params()).execute(ui)
            }
            Commands::Chunks(args) => {
                QueryCommand::session(config, "/chunk_indices", args.params()).execute(ui)
            }
            Commands::History(args) if args.all => {
                QueryCommand::server(config, "/history", args.params()).execute(ui)
            }
            Commands::History(args) => {
                QueryCommand::session(config, "/history", args.params()).execute(ui)
            }
            Commands::DefineFile(args) => {
                UpdateCommand::new(config, "/structure/define", args.body()).execute(ui)
            }
            Commands::RedefineFile(args) => {
                UpdateCommand::new(config, "/structure/redefine", args.body()).execute(ui)
            }
            Commands::DefineSymbol(args) => {
                UpdateCommand::new(config, "/symbols/define", args.body()).execute(ui)
            }
            Commands::RedefineSymbol(args) => {
                UpdateCommand::new(config, "/symbols/redefine", args.body()).execute(ui)
            }
            Commands::Mark(args) => {
                UpdateCommand::new(config, "/structure/mark", args.body()).execute(ui)
            }
            Commands::Annotations(args) => {
                let path = match args.action {
                    AnnotationsAction::Save => "/annotations/save",
                    AnnotationsAction::Load => "/annotations/load",
                };
                UpdateCommand::new(config, path, serde_json::json!({})).execute(ui)
            }
            Commands::Sessions => {
                QueryCommand::server(config, "/sessions", QueryParams::new()).execute(ui)
            }
            Commands::Roots => {
                QueryCommand::server(config, "/roots", QueryParams::new()).execute(ui)
            }
            Commands::Cleanup => CleanupCommand::new(config).execute(ui),
            Commands::Completions(args) => CompletionsCommand::new(args.clone()).execute(ui),
        }
    }
}

/// Report a failed command.
///
/// Server-reported errors print the server's JSON error document on stdout;
/// every other failure prints a message on stderr.
pub fn report_error(err: &CoderlmError, ui: &mut dyn UserInterface) {
    match err {
        CoderlmError::Server { body, .. } => ui.json(body),
        other => ui.error(&format!("Error: {}", other)),
    }
}
