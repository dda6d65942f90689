//! Logger configuration
//!
//! `LoggerOptions` is the structured construction input (all fields
//! optional); `LoggerConfig` is the resolved, immutable per-instance record.

use super::error::{LoggerError, Result};
use super::severity::Severity;
use serde_json::{Map, Value};

/// Default byte bound for verbose payload serialization.
pub const DEFAULT_SIZE_LIMIT: usize = 7000;

/// Recognized construction options. Unset fields resolve to defaults.
#[derive(Debug, Clone, Default)]
pub struct LoggerOptions {
    /// Namespace identifying the logger's origin, e.g. `"api:auth"`.
    pub namespace: Option<String>,
    /// Opaque metadata attached to every emitted event.
    pub context: Option<Map<String, Value>>,
    /// Minimum severity to emit. Unset resolves to `Info`.
    pub log_level: Option<Severity>,
    /// Namespace enable/disable pattern expression.
    pub log_patterns: Option<String>,
    /// Byte size bound for debug payloads. Unset resolves to 7000.
    pub log_limit: Option<usize>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    #[must_use]
    pub fn context(mut self, context: Map<String, Value>) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub fn log_level(mut self, level: Severity) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set the threshold from a severity name, as delivered by already
    /// resolved external configuration.
    pub fn log_level_name(mut self, name: &str) -> Result<Self> {
        let level = name
            .parse::<Severity>()
            .map_err(|_| LoggerError::InvalidSeverity(name.to_string()))?;
        self.log_level = Some(level);
        Ok(self)
    }

    #[must_use]
    pub fn log_patterns(mut self, expression: impl Into<String>) -> Self {
        self.log_patterns = Some(expression.into());
        self
    }

    #[must_use]
    pub fn log_limit(mut self, bytes: usize) -> Self {
        self.log_limit = Some(bytes);
        self
    }
}

/// Resolved, immutable per-logger configuration.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub namespace: String,
    pub context: Map<String, Value>,
    /// Explicit threshold override. `None` means ambient/default resolution.
    pub threshold: Option<Severity>,
    pub pattern_expression: String,
    pub size_limit: usize,
}

impl LoggerConfig {
    pub fn from_options(options: LoggerOptions) -> Self {
        Self {
            namespace: options.namespace.unwrap_or_default(),
            context: options.context.unwrap_or_default(),
            threshold: options.log_level,
            pattern_expression: options.log_patterns.unwrap_or_default(),
            size_limit: options.log_limit.unwrap_or(DEFAULT_SIZE_LIMIT),
        }
    }

    /// Arbitration for the deprecated positional construction form.
    ///
    /// When both positional values and options are partially supplied, the
    /// options form wins: positional `namespace`/`context` only fill fields
    /// the options left unset. The two forms are never merged field-wise
    /// beyond that rule.
    pub fn from_legacy_parts(
        namespace: &str,
        context: Map<String, Value>,
        options: LoggerOptions,
    ) -> Self {
        let mut resolved = options;
        if resolved.namespace.is_none() {
            resolved.namespace = Some(namespace.to_string());
        }
        if resolved.context.is_none() {
            resolved.context = Some(context);
        }
        Self::from_options(resolved)
    }

    /// Derive a child configuration: identity (namespace) is inherited and
    /// extended, context and pattern expression carry over, the threshold
    /// override does not.
    pub fn child(&self, suffix: &str) -> Self {
        let namespace = if self.namespace.is_empty() {
            suffix.to_string()
        } else {
            format!("{}:{}", self.namespace, suffix)
        };
        Self {
            namespace,
            context: self.context.clone(),
            threshold: None,
            pattern_expression: self.pattern_expression.clone(),
            size_limit: self.size_limit,
        }
    }

    /// Derive a configuration with additional context fields. New fields win
    /// over existing ones with the same key.
    pub fn with_fields(&self, fields: Map<String, Value>) -> Self {
        let mut context = self.context.clone();
        for (key, value) in fields {
            context.insert(key, value);
        }
        Self {
            context,
            ..self.clone()
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::from_options(LoggerOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.namespace, "");
        assert!(config.context.is_empty());
        assert_eq!(config.threshold, None);
        assert_eq!(config.pattern_expression, "");
        assert_eq!(config.size_limit, DEFAULT_SIZE_LIMIT);
    }

    #[test]
    fn test_options_resolution() {
        let config = LoggerConfig::from_options(
            LoggerOptions::new()
                .namespace("db")
                .log_level(Severity::Warn)
                .log_patterns("db,-db:verbose")
                .log_limit(512),
        );
        assert_eq!(config.namespace, "db");
        assert_eq!(config.threshold, Some(Severity::Warn));
        assert_eq!(config.pattern_expression, "db,-db:verbose");
        assert_eq!(config.size_limit, 512);
    }

    #[test]
    fn test_log_level_name() {
        let options = LoggerOptions::new().log_level_name("warn").unwrap();
        assert_eq!(options.log_level, Some(Severity::Warn));
        assert!(LoggerOptions::new().log_level_name("loud").is_err());
    }

    #[test]
    fn test_legacy_options_win() {
        let config = LoggerConfig::from_legacy_parts(
            "positional",
            ctx(&[("a", json!(1))]),
            LoggerOptions::new()
                .namespace("from-options")
                .context(ctx(&[("b", json!(2))])),
        );
        assert_eq!(config.namespace, "from-options");
        assert!(config.context.contains_key("b"));
        assert!(!config.context.contains_key("a"));
    }

    #[test]
    fn test_legacy_fills_unset_fields() {
        let config = LoggerConfig::from_legacy_parts(
            "positional",
            ctx(&[("a", json!(1))]),
            LoggerOptions::new().log_level(Severity::Error),
        );
        assert_eq!(config.namespace, "positional");
        assert!(config.context.contains_key("a"));
        assert_eq!(config.threshold, Some(Severity::Error));
    }

    #[test]
    fn test_child_config() {
        let parent = LoggerConfig::from_options(
            LoggerOptions::new()
                .namespace("api")
                .log_level(Severity::Debug)
                .log_patterns("api*")
                .context(ctx(&[("service", json!("gateway"))])),
        );
        let child = parent.child("auth");
        assert_eq!(child.namespace, "api:auth");
        assert_eq!(child.threshold, None);
        assert_eq!(child.pattern_expression, "api*");
        assert!(child.context.contains_key("service"));
    }

    #[test]
    fn test_child_of_empty_namespace() {
        let child = LoggerConfig::default().child("worker");
        assert_eq!(child.namespace, "worker");
    }

    #[test]
    fn test_with_fields_overrides() {
        let base = LoggerConfig::from_options(
            LoggerOptions::new().context(ctx(&[("env", json!("dev")), ("zone", json!("a"))])),
        );
        let derived = base.with_fields(ctx(&[("env", json!("prod"))]));
        assert_eq!(derived.context.get("env"), Some(&json!("prod")));
        assert_eq!(derived.context.get("zone"), Some(&json!("a")));
        // the original is untouched
        assert_eq!(base.context.get("env"), Some(&json!("dev")));
    }
}
