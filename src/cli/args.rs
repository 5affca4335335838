//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Argument and flag names map
//! one-to-one onto the server's query parameters and body fields.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// coderlm-cli - Explore a codebase through a coderlm server.
#[derive(Debug, Parser)]
#[command(name = "coderlm-cli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Server host (default: cached session's host, then 127.0.0.1)
    #[arg(long, global = true, env = "CODERLM_HOST")]
    pub host: Option<String>,

    /// Server port (default: cached session's port, then 3000)
    #[arg(long, global = true, env = "CODERLM_PORT")]
    pub port: Option<u16>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Print JSON results on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    /// Only print results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a session for the current project
    Init(InitArgs),

    /// Show server and session status
    Status,

    /// Get project file tree
    Structure(StructureArgs),

    /// List symbols
    Symbols(SymbolsArgs),

    /// Search symbols by name
    Search(SearchArgs),

    /// Get full source of a symbol
    Impl(ImplArgs),

    /// Find call sites for a symbol
    Callers(CallersArgs),

    /// Find tests referencing a symbol
    Tests(TestsArgs),

    /// List local variables in a function
    Variables(VariablesArgs),

    /// Read a line range from a file
    Peek(PeekArgs),

    /// Regex search across all files
    Grep(GrepArgs),

    /// Compute chunk boundaries for a file
    Chunks(ChunksArgs),

    /// Set a description for a file
    DefineFile(FileDefinitionArgs),

    /// Update a file description
    RedefineFile(FileDefinitionArgs),

    /// Set a description for a symbol
    DefineSymbol(SymbolDefinitionArgs),

    /// Update a symbol description
    RedefineSymbol(SymbolDefinitionArgs),

    /// Tag a file with a category
    Mark(MarkArgs),

    /// Session command history
    History(HistoryArgs),

    /// Persist or reload the project's annotations on the server
    Annotations(AnnotationsArgs),

    /// List active sessions on the server
    Sessions,

    /// List projects indexed by the server
    Roots,

    /// Delete the current session
    Cleanup,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(long)]
    pub cwd: Option<PathBuf>,
}

/// Arguments for the `structure` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StructureArgs {
    /// Tree depth (0=unlimited)
    #[arg(long)]
    pub depth: Option<usize>,
}

/// Arguments for the `symbols` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SymbolsArgs {
    /// Filter: function, method, class, struct, enum, trait, interface, constant, type, module
    #[arg(long)]
    pub kind: Option<String>,

    /// Filter by file path
    #[arg(long)]
    pub file: Option<String>,

    /// Maximum number of symbols
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the `search` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SearchArgs {
    /// Search term
    pub query: String,

    /// Maximum number of matches
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the `impl` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ImplArgs {
    /// Symbol name
    pub symbol: String,

    /// File containing the symbol
    #[arg(long)]
    pub file: String,
}

/// Arguments for the `callers` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CallersArgs {
    /// Symbol name
    pub symbol: String,

    /// File containing the symbol
    #[arg(long)]
    pub file: String,

    /// Maximum number of call sites
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the `tests` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TestsArgs {
    /// Symbol name
    pub symbol: String,

    /// File containing the symbol
    #[arg(long)]
    pub file: String,

    /// Maximum number of tests
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the `variables` command.
#[derive(Debug, Clone, clap::Args)]
pub struct VariablesArgs {
    /// Function name
    pub function: String,

    /// File containing the function
    #[arg(long)]
    pub file: String,
}

/// Arguments for the `peek` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PeekArgs {
    /// File path
    pub file: String,

    /// Start line (0-indexed)
    #[arg(long)]
    pub start: Option<usize>,

    /// End line (exclusive)
    #[arg(long)]
    pub end: Option<usize>,
}

/// Arguments for the `grep` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GrepArgs {
    /// Regex pattern
    pub pattern: String,

    /// Stop after this many matches
    #[arg(long)]
    pub max_matches: Option<usize>,

    /// Lines of context around each match
    #[arg(long)]
    pub context_lines: Option<usize>,

    /// Where matches may occur
    #[arg(long, value_enum)]
    pub scope: Option<GrepScope>,
}

/// Grep scope filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GrepScope {
    /// Match anywhere
    All,
    /// Skip matches inside comments and string literals
    Code,
}

impl GrepScope {
    /// Wire value sent to the server.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Code => "code",
        }
    }
}

/// Arguments for the `chunks` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ChunksArgs {
    /// File path
    pub file: String,

    /// Chunk size in bytes
    #[arg(long)]
    pub size: Option<usize>,

    /// Overlap between chunks
    #[arg(long)]
    pub overlap: Option<usize>,
}

/// Arguments for the `define-file` and `redefine-file` commands.
#[derive(Debug, Clone, clap::Args)]
pub struct FileDefinitionArgs {
    /// File path
    pub file: String,

    /// Human-readable description
    pub definition: String,
}

/// Arguments for the `define-symbol` and `redefine-symbol` commands.
#[derive(Debug, Clone, clap::Args)]
pub struct SymbolDefinitionArgs {
    /// Symbol name
    pub symbol: String,

    /// File containing the symbol
    #[arg(long)]
    pub file: String,

    /// Human-readable description
    pub definition: String,
}

/// Arguments for the `mark` command.
#[derive(Debug, Clone, clap::Args)]
pub struct MarkArgs {
    /// File path
    pub file: String,

    /// Mark type
    #[arg(value_enum, value_name = "TYPE")]
    pub mark: MarkType,
}

/// Categories a file can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkType {
    Documentation,
    Ignore,
    Test,
    Config,
    Generated,
    Custom,
}

impl MarkType {
    /// Wire value sent to the server.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Documentation => "documentation",
            Self::Ignore => "ignore",
            Self::Test => "test",
            Self::Config => "config",
            Self::Generated => "generated",
            Self::Custom => "custom",
        }
    }
}

/// Arguments for the `history` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(long)]
    pub limit: Option<usize>,

    /// Show history of every session on the server
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the `annotations` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AnnotationsArgs {
    #[command(subcommand)]
    pub action: AnnotationsAction,
}

/// Annotation persistence actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum AnnotationsAction {
    /// Write definitions and marks to the project's annotation file
    Save,
    /// Reload definitions and marks from the project's annotation file
    Load,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
