//! Infrastructure adapters for Retrofit.
//!
//! This crate implements the ports defined in `retrofit-core::application::ports`.
//! It also hosts the legacy engine those adapters wrap.

pub mod legacy;
pub mod renderer;
pub mod trace;

// Re-export commonly used adapters
pub use legacy::LegacyEngine;
pub use renderer::{LegacyMediaAdapter, LegacySpriteAdapter, ModernRenderer};
pub use trace::MemoryTrace;
