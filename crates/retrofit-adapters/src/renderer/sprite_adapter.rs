//! Sprite adapter: `SpriteRenderer` on top of the legacy engine.

use retrofit_core::{
    application::ports::SpriteRenderer,
    domain::{Position, ValidationPolicy},
    error::RetrofitResult,
};
use tracing::{debug, instrument};

use crate::legacy::LegacyEngine;
use crate::renderer::builder::{AdapterBuilder, AdapterParts};
use crate::renderer::guard::InputGuard;

/// Renders sprites by name through a [`LegacyEngine`].
///
/// Each call resolves the sprite with `load_resource_by_name`, converts the
/// integer position to legacy floats and hands both to `draw_image`.
/// Nothing is cached between calls.
#[derive(Debug)]
pub struct LegacySpriteAdapter {
    engine: LegacyEngine,
    guard: InputGuard,
}

impl LegacySpriteAdapter {
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

impl From<AdapterParts> for LegacySpriteAdapter {
    fn from(parts: AdapterParts) -> Self {
        Self {
            engine: parts.engine,
            guard: parts.guard,
        }
    }
}

impl SpriteRenderer for LegacySpriteAdapter {
    #[instrument(skip(self), fields(policy = %self.guard.policy()))]
    fn render_sprite(&self, name: &str, x: i32, y: i32) -> RetrofitResult<()> {
        let Some(name) = self.guard.admit("renderSprite", "name", name)? else {
            return Ok(());
        };

        let buffer = self.engine.load_resource_by_name(name)?;
        let (lx, ly) = Position::new(x, y).to_legacy();
        debug!(bytes = buffer.len(), lx, ly, "delegating to drawImage");
        self.engine.draw_image(&buffer, lx, ly);
        Ok(())
    }
}
