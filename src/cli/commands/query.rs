//! Read-only queries.
//!
//! Every exploration verb (`structure`, `symbols`, `search`, `impl`,
//! `callers`, `tests`, `variables`, `peek`, `grep`, `chunks`, `history`) is a
//! single GET whose response is printed as-is. The verbs differ only in path
//! and parameters, so they share [`QueryCommand`]; each argument struct knows
//! how to turn itself into [`QueryParams`].

use crate::cli::args::{
    CallersArgs, ChunksArgs, GrepArgs, HistoryArgs, ImplArgs, PeekArgs, SearchArgs,
    StructureArgs, SymbolsArgs, TestsArgs, VariablesArgs,
};
use crate::client::{ApiClient, QueryParams};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Which server a query goes to, and whether it carries the session header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryScope {
    /// The cached session's server, with the session header. Requires a session.
    Session,
    /// The configured server, without a session header.
    Server,
}

/// A GET request whose JSON response is printed.
pub struct QueryCommand<'a> {
    config: &'a ClientConfig,
    scope: QueryScope,
    path: &'static str,
    params: QueryParams,
}

impl<'a> QueryCommand<'a> {
    /// Create a query bound to the cached session.
    pub fn session(config: &'a ClientConfig, path: &'static str, params: QueryParams) -> Self {
        Self {
            config,
            scope: QueryScope::Session,
            path,
            params,
        }
    }

    /// Create a server-level query that needs no session.
    pub fn server(config: &'a ClientConfig, path: &'static str, params: QueryParams) -> Self {
        Self {
            config,
            scope: QueryScope::Server,
            path,
            params,
        }
    }
}

impl Command for QueryCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = match self.scope {
            QueryScope::Session => ApiClient::for_session(self.config)?,
            QueryScope::Server => ApiClient::for_server(self.config)?,
        };

        let response = client.get(self.path, &self.params)?;
        ui.json(&response);
        Ok(CommandResult::success())
    }
}

impl StructureArgs {
    /// Query parameters for `GET /structure`.
    pub fn params(&self) -> QueryParams {
        QueryParams::new().with_opt("depth", self.depth)
    }
}

impl SymbolsArgs {
    /// Query parameters for `GET /symbols`.
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("kind", self.kind.as_deref())
            .with_opt("file", self.file.as_deref())
            .with_opt("limit", self.limit)
    }
}

impl SearchArgs {
    /// Query parameters for `GET /symbols/search`.
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("q", &self.query)
            .with_opt("limit", self.limit)
    }
}

impl ImplArgs {
    /// Query parameters for `GET /symbols/implementation`.
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("symbol", &self.symbol)
            .with("file", &self.file)
    }
}

impl CallersArgs {
    /// Query parameters for `GET /symbols/callers`.
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("symbol", &self.symbol)
            .with("file", &self.file)
            .with_opt("limit", self.limit)
    }
}

impl TestsArgs {
    /// Query parameters for `GET /symbols/tests`.
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("symbol", &self.symbol)
            .with("file", &self.file)
            .with_opt("limit", self.limit)
    }
}

impl VariablesArgs {
    /// Query parameters for `GET /symbols/variables`.
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("function", &self.function)
            .with("file", &self.file)
    }
}

impl PeekArgs {
    /// Query parameters for `GET /peek`.
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("file", &self.file)
            .with_opt("start", self.start)
            .with_opt("end", self.end)
    }
}

impl GrepArgs {
    /// Query parameters for `GET /grep`.
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("pattern", &self.pattern)
            .with_opt("max_matches", self.max_matches)
            .with_opt("context_lines", self.context_lines)
            .with_opt("scope", self.scope.map(|s| s.as_str()))
    }
}

impl ChunksArgs {
    /// Query parameters for `GET /chunk_indices`.
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("file", &self.file)
            .with_opt("size", self.size)
            .with_opt("overlap", self.overlap)
    }
}

impl HistoryArgs {
    /// Query parameters for `GET /history`.
    pub fn params(&self) -> QueryParams {
        QueryParams::new().with_opt("limit", self.limit)
    }
}
