//! coderlm-cli entry point.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use coderlm_cli::cli::{report_error, Cli, CommandDispatcher};
use coderlm_cli::config::ClientConfig;
use coderlm_cli::ui::{create_ui, JsonStyle, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries only results.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("coderlm_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("coderlm_cli=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("coderlm-cli starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let json_style = if cli.compact {
        JsonStyle::Compact
    } else {
        JsonStyle::Pretty
    };

    // Handle --no-color
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let mut ui = create_ui(output_mode, json_style);

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            ui.error(&format!("Error: cannot determine working directory: {}", e));
            return ExitCode::from(1);
        }
    };

    let config = match ClientConfig::load(
        &root,
        cli.host.clone(),
        cli.port,
        Duration::from_secs(cli.timeout),
    ) {
        Ok(config) => config,
        Err(e) => {
            report_error(&e, ui.as_mut());
            return ExitCode::from(1);
        }
    };

    let dispatcher = CommandDispatcher::new(config);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            report_error(&e, ui.as_mut());
            ExitCode::from(1)
        }
    }
}
