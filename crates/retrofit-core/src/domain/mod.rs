//! Core domain layer for Retrofit.
//!
//! Pure values and rules with no I/O. Rendering side effects are reached
//! only through the ports in `crate::application::ports`.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Trace lines are values; sinks live behind a port
//! - **Immutable values**: Everything here is Clone + PartialEq
pub mod trace;
pub mod validation;
pub mod value_objects;

pub use trace::{TraceKind, TraceLine};
pub use validation::{Requirement, ValidationPolicy, require_non_blank, require_non_empty};
pub use value_objects::{Position, ResourceName};
