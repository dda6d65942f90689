//! Console sink implementation

use crate::core::{
    event::{Event, Payload},
    severity::Severity,
    Result,
};
use crate::sinks::Sink;
use chrono::SecondsFormat;
use colored::Colorize;

/// How events are rendered to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    /// Human-readable single line with colored level markers.
    #[default]
    Pretty,
    /// One JSON object per line (JSONL), aggregation friendly.
    Json,
}

pub struct ConsoleSink {
    use_colors: bool,
    format: RenderFormat,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            format: RenderFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            format: RenderFormat::default(),
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: RenderFormat) -> Self {
        self.format = format;
        self
    }

    fn format_pretty(&self, event: &Event) -> String {
        let level_str = if self.use_colors {
            format!("{:7}", event.severity.to_str())
                .color(event.severity.color_code())
                .to_string()
        } else {
            format!("{:7}", event.severity.to_str())
        };

        let timestamp = event.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);
        let base = format!("[{}] [{}] {}", timestamp, level_str, event.message);

        match &event.payload {
            Payload::Fields(fields) if !fields.is_empty() => {
                let rendered = fields
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, v))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{} {}", base, rendered)
            }
            Payload::Fields(_) => base,
            Payload::Truncated(payload) => format!("{} payload={}", base, payload),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn emit(&self, event: &Event) -> Result<()> {
        let output = match self.format {
            RenderFormat::Pretty => self.format_pretty(event),
            RenderFormat::Json => event.to_json_string()?,
        };

        // Route errors to stderr, everything else to stdout.
        match event.severity {
            Severity::Error => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
