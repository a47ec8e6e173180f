//! The legacy engine itself.

use std::sync::Arc;

use retrofit_core::{
    application::ports::TraceSink,
    domain::{TraceLine, require_non_empty},
    error::RetrofitResult,
};
use tracing::{debug, instrument};

use crate::legacy::asset::{decode_asset, encode_asset};

const ORIGIN: &str = "legacy";

/// Third-party style rendering engine with a fixed API.
///
/// Every call is independent. The only thing the engine holds is where to
/// send its trace lines.
#[derive(Clone)]
pub struct LegacyEngine {
    trace: Arc<dyn TraceSink>,
}

impl LegacyEngine {
    /// Create an engine that reports to `trace`.
    pub fn new(trace: Arc<dyn TraceSink>) -> Self {
        Self { trace }
    }

    /// Where this engine reports. Renderers in this crate reuse it for
    /// their own diagnostics unless told otherwise.
    pub(crate) fn trace_sink(&self) -> Arc<dyn TraceSink> {
        Arc::clone(&self.trace)
    }

    /// Draw a raw image buffer at floating-point coordinates.
    ///
    /// The buffer is not validated; an empty one is drawn as a zero-byte
    /// payload.
    #[instrument(skip(self, buffer), fields(len = buffer.len()))]
    pub fn draw_image(&self, buffer: &[u8], x: f64, y: f64) {
        let detail = match decode_asset(buffer) {
            Some(label) => format!(
                "{}-byte payload '{label}' at ({x:.1}, {y:.1})",
                buffer.len()
            ),
            None => format!("{}-byte payload at ({x:.1}, {y:.1})", buffer.len()),
        };
        self.trace
            .emit(TraceLine::render(ORIGIN, "drawImage", detail));
    }

    /// Draw a string of text.
    #[instrument(skip(self))]
    pub fn draw_text(&self, content: &str) {
        self.trace
            .emit(TraceLine::render(ORIGIN, "drawText", format!("'{content}'")));
    }

    /// Resolve a named resource to its asset buffer.
    ///
    /// Only emptiness is checked; whitespace names load like any other.
    #[instrument(skip(self))]
    pub fn load_resource_by_name(&self, name: &str) -> RetrofitResult<Vec<u8>> {
        let name = require_non_empty("name", name)?;
        let buffer = encode_asset(name);
        debug!(len = buffer.len(), "resource resolved");
        self.trace.emit(TraceLine::load(
            ORIGIN,
            "loadResourceByName",
            format!("'{name}' -> {} bytes", buffer.len()),
        ));
        Ok(buffer)
    }
}

impl std::fmt::Debug for LegacyEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegacyEngine").finish_non_exhaustive()
    }
}
