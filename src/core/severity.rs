//! Severity definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered log severity.
///
/// The discriminant is the priority rank: higher rank means more severe.
/// `Verbose` sits between `Debug` and `Info` and covers chatty operational
/// output that is not quite debugging detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Severity {
    Debug = 0,
    Verbose = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl Severity {
    /// All severities in ascending rank order.
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Verbose,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Verbose => "VERBOSE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Lowercase marker used in the serialized record shape.
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Verbose => "verbose",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    /// True for the most-verbose level, whose payloads are size-bounded.
    pub fn is_most_verbose(&self) -> bool {
        matches!(self, Severity::Debug)
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Debug => Blue,
            Severity::Verbose => BrightBlack,
            Severity::Info => Green,
            Severity::Warn => Yellow,
            Severity::Error => Red,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "VERBOSE" | "LOG" => Ok(Severity::Verbose),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
