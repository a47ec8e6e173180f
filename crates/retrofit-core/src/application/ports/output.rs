//! Driven (output) ports - implemented by infrastructure.

use crate::domain::TraceLine;

/// Port for recording trace lines.
///
/// Implemented by:
/// - `retrofit_adapters::trace::MemoryTrace` (testing)
/// - `retrofit_cli::output::OutputManager` (terminal)
///
/// Emitting never fails: a trace is an observation, not part of the
/// operation's outcome.
pub trait TraceSink: Send + Sync {
    /// Record one line.
    fn emit(&self, line: TraceLine);
}
