//! Application services - client code for the renderer ports.
//!
//! Clients take any boxed renderer and run a fixed scene against it. They
//! never look at the concrete type, which is what lets an adapter stand in
//! for a native implementation.

pub mod media_client;
pub mod sprite_client;

pub use media_client::{MediaClient, MediaCommand};
pub use sprite_client::{SpriteClient, SpriteCommand};
