//! Application layer for Retrofit.
//!
//! This layer contains:
//! - **Ports**: The modern renderer traits and the trace output port
//! - **Services**: Client code that drives any renderer (SpriteClient, MediaClient)
//!
//! Services only see the traits. Whether a renderer is adapter-backed or a
//! direct implementation is decided by whoever wires them together.

pub mod ports;
pub mod services;

pub use services::{MediaClient, MediaCommand, SpriteClient, SpriteCommand};

pub use ports::{MediaRenderer, SpriteRenderer, TraceSink};
