//! Sink implementations

pub mod console;
pub mod memory;
pub mod sink;

pub use console::{ConsoleSink, RenderFormat};
pub use memory::MemorySink;
pub use sink::Sink;
