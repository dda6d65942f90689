//! Logging macros for ergonomic message formatting.
//!
//! These macros format like `println!` and funnel through the logger's
//! severity methods. The `ambient_*` variants resolve the logger from the
//! current ambient scope instead of taking one explicitly.
//!
//! # Examples
//!
//! ```
//! use scoped_logger::prelude::*;
//! use scoped_logger::info;
//!
//! let logger = Logger::new();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit severity with automatic formatting.
///
/// # Examples
///
/// ```
/// # use scoped_logger::prelude::*;
/// # let logger = Logger::new();
/// use scoped_logger::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.emit($severity, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log a verbose-level message.
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Verbose, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use scoped_logger::prelude::*;
/// # let logger = Logger::new();
/// use scoped_logger::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log through the ambient logger resolved for the current scope.
///
/// # Examples
///
/// ```
/// use scoped_logger::ambient_log;
/// use scoped_logger::Severity;
/// ambient_log!(Severity::Info, "request handled in {}ms", 12);
/// ```
#[macro_export]
macro_rules! ambient_log {
    ($severity:expr, $($arg:tt)+) => {
        $crate::core::ambient::current().emit($severity, format!($($arg)+))
    };
}
