//! Terminal trace sink.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use retrofit_core::{
    application::ports::TraceSink,
    domain::{TraceKind, TraceLine},
};

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Writes trace lines to stdout, one per line.
///
/// When stdout is a terminal the `[origin]` tag is coloured by kind; the
/// text itself is never altered.
pub struct OutputManager {
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            no_color: args.no_color || config.output.no_color || !io::stdout().is_terminal(),
            term: Term::stdout(),
        }
    }

    fn format(&self, line: &TraceLine) -> String {
        if self.no_color {
            return line.to_string();
        }
        let tag = format!("[{}]", line.origin);
        let tag = match line.kind {
            TraceKind::Load => tag.blue().to_string(),
            TraceKind::Render => tag.green().to_string(),
            TraceKind::Diagnostic => tag.yellow().bold().to_string(),
        };
        format!("{tag} {}: {}", line.operation, line.detail)
    }
}

impl TraceSink for OutputManager {
    fn emit(&self, line: TraceLine) {
        if let Err(e) = self.term.write_line(&self.format(&line)) {
            tracing::warn!(error = %e, "failed to write trace line");
        }
    }
}
