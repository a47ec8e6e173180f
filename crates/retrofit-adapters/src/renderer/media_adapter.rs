//! Media adapter: `MediaRenderer` on top of the legacy engine.

use retrofit_core::{
    application::ports::MediaRenderer,
    domain::{Position, ValidationPolicy},
    error::RetrofitResult,
};
use tracing::{debug, instrument};

use crate::legacy::LegacyEngine;
use crate::renderer::builder::{AdapterBuilder, AdapterParts};
use crate::renderer::guard::InputGuard;

/// Renders images and text through a [`LegacyEngine`].
///
/// The legacy engine has no notion of paths or placement for images, so
/// the path is resolved as a resource name and drawn at the origin.
#[derive(Debug)]
pub struct LegacyMediaAdapter {
    engine: LegacyEngine,
    guard: InputGuard,
}

impl LegacyMediaAdapter {
    /// Wrap `engine` with the strict policy.
    pub fn new(engine: LegacyEngine) -> Self {
        Self::from(AdapterParts::strict(engine))
    }

    pub fn builder() -> AdapterBuilder<Self> {
        AdapterBuilder::new()
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.guard.policy()
    }
}

impl From<AdapterParts> for LegacyMediaAdapter {
    fn from(parts: AdapterParts) -> Self {
        Self {
            engine: parts.engine,
            guard: parts.guard,
        }
    }
}

impl MediaRenderer for LegacyMediaAdapter {
    #[instrument(skip(self), fields(policy = %self.guard.policy()))]
    fn render_image(&self, path: &str) -> RetrofitResult<()> {
        let Some(path) = self.guard.admit("renderImage", "path", path)? else {
            return Ok(());
        };

        let buffer = self.engine.load_resource_by_name(path)?;
        let (x, y) = Position::ORIGIN.to_legacy();
        debug!(bytes = buffer.len(), "delegating to drawImage");
        self.engine.draw_image(&buffer, x, y);
        Ok(())
    }

    #[instrument(skip(self), fields(policy = %self.guard.policy()))]
    fn render_text(&self, content: &str) -> RetrofitResult<()> {
        let Some(content) = self.guard.admit("renderText", "content", content)? else {
            return Ok(());
        };

        self.engine.draw_text(content);
        Ok(())
    }
}
