//! The modern rendering interface client code is written against.
//!
//! Implemented by:
//! - `retrofit_adapters::renderer::LegacySpriteAdapter` (Shape A over the legacy engine)
//! - `retrofit_adapters::renderer::LegacyMediaAdapter` (Shape B over the legacy engine)
//! - `retrofit_adapters::renderer::ModernRenderer` (both shapes, direct)
//!
//! ## Contract
//!
//! - Every string argument is validated before anything is delegated
//! - A blank argument is `RetrofitError::InvalidArgument` under the strict
//!   policy; a lenient implementation traces one diagnostic and returns `Ok`
//! - A successful call leaves exactly one render trace line

use crate::error::RetrofitResult;

/// Shape A: sprites addressed by name.
#[cfg_attr(test, mockall::automock)]
pub trait SpriteRenderer: Send + Sync {
    /// Render the sprite called `name` with its origin at `(x, y)`.
    fn render_sprite(&self, name: &str, x: i32, y: i32) -> RetrofitResult<()>;
}

/// Shape B: images addressed by path, plus free text.
#[cfg_attr(test, mockall::automock)]
pub trait MediaRenderer: Send + Sync {
    /// Render the image found at `path`.
    fn render_image(&self, path: &str) -> RetrofitResult<()>;

    /// Render `content` as text.
    fn render_text(&self, content: &str) -> RetrofitResult<()>;
}
