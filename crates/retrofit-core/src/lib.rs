//! Retrofit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Retrofit, a
//! small showcase of putting a legacy rendering engine behind a modern
//! rendering interface, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          retrofit-cli (CLI)             │
//! │   (Wires adapters, runs the demo)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (SpriteClient, MediaClient)        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (SpriteRenderer, MediaRenderer, Trace)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    retrofit-adapters (Infrastructure)   │
//! │ (LegacySpriteAdapter, ModernRenderer)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ResourceName, Position, TraceLine)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use retrofit_core::application::SpriteClient;
//!
//! // Any `SpriteRenderer` works: adapter-backed or direct.
//! let client = SpriteClient::new(Box::new(renderer));
//! client.run()?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        MediaClient, MediaCommand, SpriteClient, SpriteCommand,
        ports::{MediaRenderer, SpriteRenderer, TraceSink},
    };
    pub use crate::domain::{
        Position, Requirement, ResourceName, TraceKind, TraceLine, ValidationPolicy,
    };
    pub use crate::error::{RetrofitError, RetrofitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
