//! Tracing subscriber for the `retrofit` binary.
//!
//! The library crates only emit events; this is where they get filtered and
//! written. Everything goes to stderr so stdout carries nothing but trace
//! lines.
//!
//! | Flag(s)   | Level | What appears                                   |
//! |-----------|-------|------------------------------------------------|
//! | `--quiet` | ERROR | the failure that aborted the run               |
//! | (none)    | WARN  | blank arguments skipped by a lenient adapter   |
//! | `-v`      | INFO  | which renderer drives each scene               |
//! | `-vv`     | DEBUG | resolved policy, each load to draw hand-off    |
//! | `-vvv`    | TRACE | a timed span for every renderer call           |
//!
//! `RUST_LOG` replaces the per-crate filter when set.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events the verbosity flags control.
const CRATES: [&str; 3] = ["retrofit", "retrofit_core", "retrofit_adapters"];

/// Install the global subscriber. Call once, before anything logs.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = verbosity(args);
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(crate_directives(level))?,
    };

    // Renderer calls are `#[instrument]`ed; at TRACE their close events carry
    // the elapsed time.
    let spans = if level == LevelFilter::TRACE {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(level >= LevelFilter::DEBUG)
        .with_span_events(spans)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn verbosity(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// One `crate=level` directive per workspace crate; other crates stay silent.
fn crate_directives(level: LevelFilter) -> String {
    CRATES
        .iter()
        .map(|name| format!("{name}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
