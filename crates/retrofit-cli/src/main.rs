//! # Retrofit CLI
//!
//! Renders fixed scenes through a legacy engine (behind adapters) and
//! through a native renderer, printing one trace line per action.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging, stderr).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`] trace sink (stdout).
//! 5. Run the demonstration.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Logging setup failed    |
//! |  2   | User / input error      |
//! |  4   | Configuration error     |

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use retrofit_core::domain::ValidationPolicy;
use tracing::{debug, info, instrument};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod config;
mod demo;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine; real deployments use the environment directly.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version land here too and exit 0.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let no_color = cli.global.no_color;
    match run(cli) {
        Ok(()) => {
            info!("Retrofit completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

/// Load configuration and run the demonstration.
#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<()> {
    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = AppConfig::load(cli.global.config.as_ref()).map_err(CliError::from)?;

    let policy = cli
        .policy
        .map(ValidationPolicy::from)
        .unwrap_or(config.render.policy);
    debug!(%policy, shape = ?cli.shape, "configuration resolved");

    // ── 4. Build output sink ──────────────────────────────────────────────
    let output = Arc::new(OutputManager::new(&cli.global, &config));

    // ── 5. Run ────────────────────────────────────────────────────────────
    demo::run(cli.shape, policy, output)
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    let colored = !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr());
    eprint!("{}", err.report(verbose, colored));

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
