//! Main logger implementation

use super::{
    config::{LoggerConfig, LoggerOptions},
    filter::LevelFilter,
    pattern::NamespaceMatcher,
    serializer::{to_safe_fields, Serializer},
    severity::Severity,
};
use crate::sinks::{ConsoleSink, Sink};
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Namespaced, leveled structured logger.
///
/// A logger is immutable after construction: the namespace matcher is
/// compiled once, and the serializer is bound to the configured context and
/// size limit. Derivations (`child`, `with_fields`) build new instances. The
/// one exception is the deprecated session field, kept mutable for backward
/// compatibility.
pub struct Logger {
    config: LoggerConfig,
    matcher: NamespaceMatcher,
    filter: LevelFilter,
    serializer: Serializer,
    sink: Arc<dyn Sink>,
    // Legacy escape hatch, merged into the emitted context.
    session: RwLock<Option<String>>,
}

impl Logger {
    /// Create a logger with default configuration and the console sink.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(LoggerOptions::default())
    }

    /// Structured construction form.
    #[must_use]
    pub fn with_options(options: LoggerOptions) -> Self {
        Self::from_config(LoggerConfig::from_options(options), Arc::new(ConsoleSink::new()))
    }

    /// Deprecated positional construction form.
    ///
    /// When `options` also carries a namespace or context, the options form
    /// wins and the positional values are ignored for those fields.
    #[deprecated(
        since = "0.1.0",
        note = "Use Logger::with_options or Logger::builder instead"
    )]
    #[must_use]
    pub fn from_legacy_parts(
        namespace: &str,
        context: Map<String, Value>,
        options: LoggerOptions,
    ) -> Self {
        Self::from_config(
            LoggerConfig::from_legacy_parts(namespace, context, options),
            Arc::new(ConsoleSink::new()),
        )
    }

    fn from_config(config: LoggerConfig, sink: Arc<dyn Sink>) -> Self {
        let matcher = NamespaceMatcher::compile(&config.pattern_expression);
        let filter = LevelFilter::resolve(config.threshold);
        let serializer = Serializer::new(config.context.clone(), config.size_limit);
        Self {
            config,
            matcher,
            filter,
            serializer,
            sink,
            session: RwLock::new(None),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    pub fn threshold(&self) -> Severity {
        self.filter.threshold()
    }

    /// Whether an event at `severity` would currently be emitted.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.filter.allows(severity) && self.matcher.enabled(&self.config.namespace)
    }

    /// Derive a child logger scoped to a sub-component.
    ///
    /// The child inherits context and pattern expression (its matcher is
    /// recompiled) and extends the namespace with `":suffix"`. It does not
    /// inherit the threshold override or the session field.
    #[must_use]
    pub fn child(&self, suffix: &str) -> Self {
        Self::from_config(self.config.child(suffix), Arc::clone(&self.sink))
    }

    /// Derive a logger with additional context fields. This is the
    /// replacement for mutating a logger in place: the result is a new
    /// immutable instance; `self` is untouched.
    #[must_use]
    pub fn with_fields(&self, fields: Map<String, Value>) -> Self {
        Self::from_config(self.config.with_fields(fields), Arc::clone(&self.sink))
    }

    /// Merge a session identifier into the emitted context after
    /// construction.
    #[deprecated(
        since = "0.1.0",
        note = "Use with_fields to derive a new logger instead of mutating in place"
    )]
    pub fn set_session(&self, session_id: impl Into<String>) {
        *self.session.write() = Some(session_id.into());
    }

    /// Single funnel for all emissions: decide suppression, serialize, hand
    /// the record to the sink. Sink failures never reach the caller.
    fn output(&self, severity: Severity, message: &str, extra_fields: Option<&Map<String, Value>>) {
        if !self.is_enabled(severity) {
            return;
        }

        let session = self.session.read().clone();
        let event = match session {
            Some(id) => {
                // The session belongs to the context, so explicit extra
                // fields still win over it.
                let mut merged = Map::new();
                merged.insert("session".to_string(), Value::String(id));
                if let Some(extra) = extra_fields {
                    for (key, value) in extra {
                        merged.insert(key.clone(), value.clone());
                    }
                }
                self.serializer.serialize(message, Some(&merged), severity)
            }
            None => self.serializer.serialize(message, extra_fields, severity),
        };

        let _ = self.sink.emit(&event);
    }

    /// Emit at an explicit severity.
    pub fn emit(&self, severity: Severity, message: impl Into<String>) {
        self.output(severity, &message.into(), None);
    }

    /// Emit at an explicit severity with extra fields.
    pub fn emit_with<T: Serialize>(
        &self,
        severity: Severity,
        message: impl Into<String>,
        fields: &T,
    ) {
        if !self.is_enabled(severity) {
            return;
        }
        let fields = to_safe_fields(fields);
        self.output(severity, &message.into(), Some(&fields));
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.emit(Severity::Debug, message);
    }

    #[inline]
    pub fn verbose(&self, message: impl Into<String>) {
        self.emit(Severity::Verbose, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.emit(Severity::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.emit(Severity::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.emit(Severity::Error, message);
    }

    #[inline]
    pub fn debug_with<T: Serialize>(&self, message: impl Into<String>, fields: &T) {
        self.emit_with(Severity::Debug, message, fields);
    }

    #[inline]
    pub fn verbose_with<T: Serialize>(&self, message: impl Into<String>, fields: &T) {
        self.emit_with(Severity::Verbose, message, fields);
    }

    #[inline]
    pub fn info_with<T: Serialize>(&self, message: impl Into<String>, fields: &T) {
        self.emit_with(Severity::Info, message, fields);
    }

    #[inline]
    pub fn warn_with<T: Serialize>(&self, message: impl Into<String>, fields: &T) {
        self.emit_with(Severity::Warn, message, fields);
    }

    #[inline]
    pub fn error_with<T: Serialize>(&self, message: impl Into<String>, fields: &T) {
        self.emit_with(Severity::Error, message, fields);
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use scoped_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .namespace("api")
    ///     .log_level(Severity::Debug)
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use scoped_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .namespace("db")
///     .log_level(Severity::Warn)
///     .log_patterns("db,-db:verbose")
///     .field("service", "billing")
///     .build();
/// ```
pub struct LoggerBuilder {
    options: LoggerOptions,
    sink: Option<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            options: LoggerOptions::default(),
            sink: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.options.namespace = Some(namespace.into());
        self
    }

    /// Attach a context field emitted with every event.
    #[must_use = "builder methods return a new value"]
    pub fn field<T: Serialize>(mut self, key: impl Into<String>, value: T) -> Self {
        let context = self.options.context.get_or_insert_with(Map::new);
        context.insert(key.into(), super::serializer::to_safe_value(&value));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: Map<String, Value>) -> Self {
        self.options.context = Some(context);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_level(mut self, level: Severity) -> Self {
        self.options.log_level = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_patterns(mut self, expression: impl Into<String>) -> Self {
        self.options.log_patterns = Some(expression.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_limit(mut self, bytes: usize) -> Self {
        self.options.log_limit = Some(bytes);
        self
    }

    /// Replace the default console sink.
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Replace the default console sink with a shared instance.
    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> Logger {
        let sink = self.sink.unwrap_or_else(|| Arc::new(ConsoleSink::new()));
        Logger::from_config(LoggerConfig::from_options(self.options), sink)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
