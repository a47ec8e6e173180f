//! Renderer adapters: implementations of the modern renderer ports.
//!
//! - [`LegacySpriteAdapter`] and [`LegacyMediaAdapter`] translate each
//!   modern call into legacy engine calls
//! - [`ModernRenderer`] implements both ports natively

mod builder;
mod guard;
mod media_adapter;
mod modern;
mod sprite_adapter;

pub use builder::AdapterBuilder;
pub use media_adapter::LegacyMediaAdapter;
pub use modern::ModernRenderer;
pub use sprite_adapter::LegacySpriteAdapter;
