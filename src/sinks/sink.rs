//! Sink trait for emitted event records
//!
//! The sink is the seam to the output transport: the logger core serializes
//! an event and hands it over here. Transports themselves (files, network)
//! live outside this crate.

use crate::core::{error::Result, event::Event};

pub trait Sink: Send + Sync {
    fn emit(&self, event: &Event) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
