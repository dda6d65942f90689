//! # Scoped Logger
//!
//! Leveled, namespaced structured logging with size-bounded serialization
//! and ambient context propagation across asynchronous call chains.
//!
//! ## Features
//!
//! - **Namespace Patterns**: Enable/disable loggers with comma-separated
//!   include/exclude glob expressions (`"api,db:*,-db:verbose"`)
//! - **Bounded Payloads**: Debug payloads are truncated to a byte limit,
//!   never the message or timestamp
//! - **Safe Serialization**: Unserializable values degrade to a marker
//!   instead of failing the emission
//! - **Ambient Resolution**: `ambient::current()` finds the logger bound to
//!   the active task scope without parameter threading

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        ambient, Event, LevelFilter, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerOptions, NamespaceMatcher, Payload, Result, Serializer, Severity,
        DEFAULT_SIZE_LIMIT, TRUNCATION_MARKER, UNSERIALIZABLE_MARKER,
    };
    pub use crate::sinks::{ConsoleSink, MemorySink, RenderFormat, Sink};
}

pub use crate::core::{
    ambient, Event, LevelFilter, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerOptions,
    NamespaceMatcher, Payload, Result, Serializer, Severity, DEFAULT_SIZE_LIMIT,
    TRUNCATION_MARKER, UNSERIALIZABLE_MARKER,
};
pub use crate::sinks::{ConsoleSink, MemorySink, RenderFormat, Sink};
