//! Native renderer: both ports, no legacy engine involved.

use std::sync::Arc;

use retrofit_core::{
    application::ports::{MediaRenderer, SpriteRenderer, TraceSink},
    domain::{Position, ResourceName, TraceLine},
    error::RetrofitResult,
};
use tracing::instrument;

const ORIGIN: &str = "modern";

/// Direct implementation of [`SpriteRenderer`] and [`MediaRenderer`].
///
/// Always strict: blank input is an error.
#[derive(Clone)]
pub struct ModernRenderer {
    trace: Arc<dyn TraceSink>,
}

impl ModernRenderer {
    pub fn new(trace: Arc<dyn TraceSink>) -> Self {
        Self { trace }
    }
}

impl std::fmt::Debug for ModernRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModernRenderer").finish_non_exhaustive()
    }
}

impl SpriteRenderer for ModernRenderer {
    #[instrument(skip(self))]
    fn render_sprite(&self, name: &str, x: i32, y: i32) -> RetrofitResult<()> {
        let name = ResourceName::parse("name", name)?;
        self.trace.emit(TraceLine::render(
            ORIGIN,
            "renderSprite",
            format!("'{name}' at {}", Position::new(x, y)),
        ));
        Ok(())
    }
}

impl MediaRenderer for ModernRenderer {
    #[instrument(skip(self))]
    fn render_image(&self, path: &str) -> RetrofitResult<()> {
        let path = ResourceName::parse("path", path)?;
        self.trace
            .emit(TraceLine::render(ORIGIN, "renderImage", format!("'{path}'")));
        Ok(())
    }

    #[instrument(skip(self))]
    fn render_text(&self, content: &str) -> RetrofitResult<()> {
        let content = ResourceName::parse("content", content)?;
        self.trace
            .emit(TraceLine::render(ORIGIN, "renderText", format!("'{content}'")));
        Ok(())
    }
}
