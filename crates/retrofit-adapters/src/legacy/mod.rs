//! The legacy rendering engine and its asset format.
//!
//! Nothing in here may change shape: the engine takes byte buffers and
//! float coordinates, and that is what the renderers in
//! [`crate::renderer`] must translate to.

pub mod asset;
mod engine;

pub use asset::{decode_asset, encode_asset};
pub use engine::LegacyEngine;
