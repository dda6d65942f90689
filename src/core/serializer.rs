//! Size-bounded event serialization
//!
//! Converts (message, extra fields, severity) plus the logger's bound context
//! into an [`Event`]. Serialization never fails: values that cannot be
//! converted to JSON degrade to a stable marker, and debug payloads over the
//! byte bound are truncated rather than rejected.

use super::event::{Event, Payload, TRUNCATION_MARKER};
use super::severity::Severity;
use serde::Serialize;
use serde_json::{Map, Value};

/// Stable replacement for values that cannot be represented as JSON
/// (self-referential serializers, depth-limit blowups, etc.).
pub const UNSERIALIZABLE_MARKER: &str = "[unserializable]";

/// Key used when extra fields are a bare value rather than a mapping.
const DATA_KEY: &str = "data";

/// Convert any serializable value to JSON, degrading to the marker instead
/// of failing. Any `Serialize` error (cycle breakers, non-string map keys,
/// custom failures) becomes the marker.
pub fn to_safe_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|_| Value::String(UNSERIALIZABLE_MARKER.to_string()))
}

/// Convert extra fields into a mapping: objects merge as-is, anything else
/// is carried under a `data` key.
pub fn to_safe_fields<T: Serialize + ?Sized>(value: &T) -> Map<String, Value> {
    match to_safe_value(value) {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            let mut map = Map::new();
            map.insert(DATA_KEY.to_string(), other);
            map
        }
    }
}

/// Event serializer bound to one logger's context and size limit.
#[derive(Debug, Clone)]
pub struct Serializer {
    context: Map<String, Value>,
    size_limit: usize,
}

impl Serializer {
    pub fn new(context: Map<String, Value>, size_limit: usize) -> Self {
        Self {
            context,
            size_limit,
        }
    }

    pub fn size_limit(&self) -> usize {
        self.size_limit
    }

    /// Build the event record for one emission.
    ///
    /// Extra fields win over context fields with the same key. Only the
    /// most-verbose severity is size-bounded; message and timestamp are
    /// never truncated.
    pub fn serialize(
        &self,
        message: &str,
        extra_fields: Option<&Map<String, Value>>,
        severity: Severity,
    ) -> Event {
        let mut fields = self.context.clone();
        if let Some(extra) = extra_fields {
            for (key, value) in extra {
                fields.insert(key.clone(), value.clone());
            }
        }

        let payload = if severity.is_most_verbose() {
            self.bound_payload(fields)
        } else {
            Payload::Fields(fields)
        };

        Event::new(severity, message, payload)
    }

    /// Enforce the byte bound on the encoded payload form.
    fn bound_payload(&self, fields: Map<String, Value>) -> Payload {
        if fields.is_empty() {
            return Payload::Fields(fields);
        }
        // A Value::Object with string keys always encodes cleanly.
        let encoded = match serde_json::to_string(&Value::Object(fields.clone())) {
            Ok(encoded) => encoded,
            Err(_) => return Payload::Truncated(UNSERIALIZABLE_MARKER.to_string()),
        };
        if encoded.len() <= self.size_limit {
            return Payload::Fields(fields);
        }
        let cut = truncate_to_char_boundary(&encoded, self.size_limit);
        Payload::Truncated(format!("{}{}", cut, TRUNCATION_MARKER))
    }
}

/// Cut a string to at most `limit` bytes without splitting a UTF-8 sequence.
fn truncate_to_char_boundary(s: &str, limit: usize) -> &str {
    if s.len() <= limit {
        return s;
    }
    let mut end = limit;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_merge_extra_over_context() {
        let serializer = Serializer::new(
            fields(&[("env", json!("dev")), ("service", json!("api"))]),
            1024,
        );
        let extra = fields(&[("env", json!("prod"))]);
        let event = serializer.serialize("boot", Some(&extra), Severity::Info);

        match event.payload {
            Payload::Fields(fields) => {
                assert_eq!(fields.get("env"), Some(&json!("prod")));
                assert_eq!(fields.get("service"), Some(&json!("api")));
            }
            Payload::Truncated(_) => panic!("expected full fields"),
        }
    }

    #[test]
    fn test_debug_payload_truncated_to_byte_bound() {
        let serializer = Serializer::new(Map::new(), 64);
        let extra = fields(&[("blob", json!("x".repeat(500)))]);
        let event = serializer.serialize("dump", Some(&extra), Severity::Debug);

        match &event.payload {
            Payload::Truncated(payload) => {
                assert!(payload.len() <= 64 + TRUNCATION_MARKER.len());
                assert!(payload.ends_with(TRUNCATION_MARKER));
            }
            Payload::Fields(_) => panic!("expected truncation"),
        }
        assert_eq!(event.message, "dump");
    }

    #[test]
    fn test_non_debug_payload_never_truncated() {
        let serializer = Serializer::new(Map::new(), 16);
        let extra = fields(&[("blob", json!("y".repeat(500)))]);
        for severity in [Severity::Verbose, Severity::Info, Severity::Warn, Severity::Error] {
            let event = serializer.serialize("big", Some(&extra), severity);
            assert!(!event.payload.is_truncated(), "{} was truncated", severity);
        }
    }

    #[test]
    fn test_debug_payload_within_bound_kept_whole() {
        let serializer = Serializer::new(Map::new(), 1024);
        let extra = fields(&[("n", json!(1))]);
        let event = serializer.serialize("small", Some(&extra), Severity::Debug);
        assert!(!event.payload.is_truncated());
    }

    #[test]
    fn test_truncation_respects_utf8_boundaries() {
        let serializer = Serializer::new(Map::new(), 24);
        let extra = fields(&[("name", json!("日本語のログ名日本語のログ名"))]);
        let event = serializer.serialize("utf8", Some(&extra), Severity::Debug);

        match &event.payload {
            Payload::Truncated(payload) => {
                // Valid UTF-8 by construction, and still within the bound.
                assert!(payload.len() <= 24 + TRUNCATION_MARKER.len());
            }
            Payload::Fields(_) => panic!("expected truncation"),
        }
    }

    #[test]
    fn test_empty_payload_skips_encoding() {
        let serializer = Serializer::new(Map::new(), 1);
        let event = serializer.serialize("bare", None, Severity::Debug);
        assert_eq!(event.payload, Payload::Fields(Map::new()));
    }

    #[test]
    fn test_safe_fields_wraps_bare_values() {
        let map = to_safe_fields(&"just a string");
        assert_eq!(map.get("data"), Some(&json!("just a string")));

        let map = to_safe_fields(&json!({"k": 1}));
        assert_eq!(map.get("k"), Some(&json!(1)));

        let map = to_safe_fields(&Value::Null);
        assert!(map.is_empty());
    }

    #[test]
    fn test_failing_serialize_degrades_to_marker() {
        // Stands in for cyclic or otherwise unserializable input: the
        // Serialize error is replaced with the stable marker, never raised.
        struct Cyclic;
        impl Serialize for Cyclic {
            fn serialize<S: serde::Serializer>(
                &self,
                _serializer: S,
            ) -> Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("circular reference"))
            }
        }

        let value = to_safe_value(&Cyclic);
        assert_eq!(value, json!(UNSERIALIZABLE_MARKER));

        let map = to_safe_fields(&Cyclic);
        assert_eq!(map.get("data"), Some(&json!(UNSERIALIZABLE_MARKER)));
    }
}
