//! Core logger types

pub mod ambient;
pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod logger;
pub mod pattern;
pub mod serializer;
pub mod severity;

pub use config::{LoggerConfig, LoggerOptions, DEFAULT_SIZE_LIMIT};
pub use error::{LoggerError, Result};
pub use event::{Event, Payload, TRUNCATION_MARKER};
pub use filter::LevelFilter;
pub use logger::{Logger, LoggerBuilder};
pub use pattern::NamespaceMatcher;
pub use serializer::{Serializer, UNSERIALIZABLE_MARKER};
pub use severity::Severity;
