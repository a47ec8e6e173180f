//! Trace sink adapters.

mod memory;

pub use memory::MemoryTrace;
