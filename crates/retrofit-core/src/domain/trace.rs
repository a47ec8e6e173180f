//! Trace lines: the observable record of every load, render, and diagnostic.

use std::fmt;

/// What kind of action a trace line records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceKind {
    /// A resource was resolved by the legacy engine.
    Load,
    /// Something was drawn.
    Render,
    /// A call was skipped because of invalid input.
    Diagnostic,
}

impl TraceKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Render => "render",
            Self::Diagnostic => "diagnostic",
        }
    }
}

impl fmt::Display for TraceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single human-readable line describing one side effect.
///
/// Rendered as `[origin] operation: detail`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLine {
    pub kind: TraceKind,
    pub origin: &'static str,
    pub operation: &'static str,
    pub detail: String,
}

impl TraceLine {
    pub fn new(
        kind: TraceKind,
        origin: &'static str,
        operation: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            origin,
            operation,
            detail: detail.into(),
        }
    }

    pub fn load(origin: &'static str, operation: &'static str, detail: impl Into<String>) -> Self {
        Self::new(TraceKind::Load, origin, operation, detail)
    }

    pub fn render(
        origin: &'static str,
        operation: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self::new(TraceKind::Render, origin, operation, detail)
    }

    pub fn diagnostic(
        origin: &'static str,
        operation: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self::new(TraceKind::Diagnostic, origin, operation, detail)
    }
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.origin, self.operation, self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let line = TraceLine::render("modern", "renderText", "Score: 100");
        assert_eq!(line.to_string(), "[modern] renderText: Score: 100");
        assert_eq!(line.kind, TraceKind::Render);
    }
}
