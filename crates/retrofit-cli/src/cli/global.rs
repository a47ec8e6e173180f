//! Flags that tune how a run is reported, not what it renders.

use clap::{ArgAction, Args, builder::FalseyValueParser};
use std::path::PathBuf;

/// Reporting flags. None are required: a bare `retrofit` runs the whole
/// demonstration with warnings only on stderr.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Log more of the demo on stderr (-v, -vv, -vvv).
    ///
    /// -v names the renderer driving each scene, -vv adds the resolved policy
    /// and each loadResourceByName to drawImage hand-off, -vvv adds a timed
    /// span per renderer call. Skipped blank input is logged at every level
    /// except --quiet.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log errors only, so skipped blank input goes unreported on stderr.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print trace lines without coloured `[origin]` tags (honours NO_COLOR).
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// TOML file with `[render]` and `[output]` tables.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
