//! Event record structure
//!
//! An `Event` is the transient record produced for one emission. It is built
//! by the serializer, handed to a sink, and never persisted.

use super::error::Result;
use super::severity::Severity;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Sentinel appended to a payload that was shortened to respect the size bound.
pub const TRUNCATION_MARKER: &str = "...[truncated]";

/// Keys owned by the record envelope; payload fields never shadow them.
const RESERVED_KEYS: [&str; 3] = ["timestamp", "level", "message"];

/// Contextual portion of an event: either the merged field map, or its
/// encoded form cut down to the configured byte bound.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Fields(Map<String, Value>),
    Truncated(String),
}

impl Payload {
    pub fn is_truncated(&self) -> bool {
        matches!(self, Payload::Truncated(_))
    }
}

#[derive(Debug, Clone)]
pub struct Event {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub message: String,
    pub payload: Payload,
}

impl Event {
    /// Sanitize the message to keep one event per output line and prevent
    /// forged entries via embedded newlines.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(severity: Severity, message: &str, payload: Payload) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            message: Self::sanitize_message(message),
            payload,
        }
    }

    /// JSON-safe record shape: `{ timestamp, level, message, ...fields }`,
    /// with a truncated payload carried under a single `payload` key so the
    /// byte bound holds on the encoded form.
    pub fn to_json(&self) -> Value {
        let mut record = Map::new();
        match &self.payload {
            Payload::Fields(fields) => {
                for (key, value) in fields {
                    if !RESERVED_KEYS.contains(&key.as_str()) {
                        record.insert(key.clone(), value.clone());
                    }
                }
            }
            Payload::Truncated(payload) => {
                record.insert("payload".to_string(), Value::String(payload.clone()));
            }
        }
        record.insert(
            "timestamp".to_string(),
            Value::String(self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        record.insert(
            "level".to_string(),
            Value::String(self.severity.marker().to_string()),
        );
        record.insert("message".to_string(), Value::String(self.message.clone()));
        Value::Object(record)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json())?)
    }

    /// Parse an encoded record back into an event. Non-envelope keys become
    /// the field payload.
    pub fn from_json(encoded: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(encoded)?;
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(super::error::LoggerError::other(format!(
                    "expected a JSON object, got {}",
                    other
                )))
            }
        };

        let timestamp = map
            .get("timestamp")
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(Utc::now);
        let severity = map
            .get("level")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<Severity>().ok())
            .unwrap_or_default();
        let message = map
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let fields: Map<String, Value> = map
            .into_iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .collect();

        Ok(Self {
            timestamp,
            severity,
            message,
            payload: Payload::Fields(fields),
        })
    }
}
