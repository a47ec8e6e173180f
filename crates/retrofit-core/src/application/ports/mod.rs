//! Application ports (traits) for external dependencies.
//!
//! ## Port Types
//!
//! - **Driving Ports**: Called by client code, implemented by renderers
//!   - `SpriteRenderer`: sprites by name at integer coordinates
//!   - `MediaRenderer`: images by path and plain text
//!
//! - **Driven (Output) Ports**: Called by renderers, implemented by infrastructure
//!   - `TraceSink`: where trace lines end up

pub mod output;
pub mod render;

pub use output::TraceSink;
pub use render::{MediaRenderer, SpriteRenderer};
