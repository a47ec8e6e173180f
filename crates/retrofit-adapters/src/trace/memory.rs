//! In-memory trace sink for testing.

use std::sync::{Arc, RwLock};

use retrofit_core::{
    application::ports::TraceSink,
    domain::{TraceKind, TraceLine},
};

/// Collects trace lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryTrace {
    inner: Arc<RwLock<Vec<TraceLine>>>,
}

impl MemoryTrace {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines recorded so far, in order.
    pub fn lines(&self) -> Vec<TraceLine> {
        self.inner.read().map(|v| v.clone()).unwrap_or_default()
    }

    /// Recorded lines in their display form.
    pub fn rendered(&self) -> Vec<String> {
        self.lines().iter().map(ToString::to_string).collect()
    }

    /// Kind of each recorded line.
    pub fn kinds(&self) -> Vec<TraceKind> {
        self.lines().iter().map(|l| l.kind).collect()
    }

    /// Lines of one kind only.
    pub fn of_kind(&self, kind: TraceKind) -> Vec<TraceLine> {
        self.lines().into_iter().filter(|l| l.kind == kind).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.clear();
        }
    }
}

impl TraceSink for MemoryTrace {
    fn emit(&self, line: TraceLine) {
        // A poisoned lock means a test already panicked; drop the line.
        if let Ok(mut inner) = self.inner.write() {
            inner.push(line);
        }
    }
}
