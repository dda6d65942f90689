//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Invalid severity name in configuration
    #[error("Invalid severity: '{0}'")]
    InvalidSeverity(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// JSON serialization error (sink rendering only; the serializer itself
    /// degrades unserializable values instead of failing)
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error from a sink
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Sink error (generic)
    #[error("Sink error: {0}")]
    SinkError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a sink error
    pub fn sink<S: Into<String>>(msg: S) -> Self {
        LoggerError::SinkError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
