//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each expands to a
//! `Result<()>` from [`Logger::write`](crate::Logger::write).
//!
//! # Examples
//!
//! ```
//! use styled_logger::prelude::*;
//! use styled_logger::{info, log};
//!
//! let mut logger = Logger::new();
//! logger.create_type("highlight", ["yellow", "bold"])?;
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//!
//! // Custom types
//! log!(logger, "highlight", "{} new messages", 3)?;
//! # Ok::<(), LoggerError>(())
//! ```

/// Write a formatted message under any log type.
///
/// # Examples
///
/// ```
/// # use styled_logger::prelude::*;
/// # let logger = Logger::new();
/// use styled_logger::log;
/// log!(logger, Preset::Info, "Simple message").unwrap();
/// log!(logger, "error", "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $log_type:expr, $($arg:tt)+) => {
        $logger.write($log_type, format!($($arg)+))
    };
}

/// Write an info message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Preset::Info, $($arg)+)
    };
}

/// Write a warning message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Preset::Warn, $($arg)+)
    };
}

/// Write an error message.
///
/// # Examples
///
/// ```
/// # use styled_logger::prelude::*;
/// # let logger = Logger::new();
/// use styled_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Preset::Error, $($arg)+)
    };
}

/// Write a debug message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Preset::Debug, $($arg)+)
    };
}

/// Write a success message.
#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Preset::Success, $($arg)+)
    };
}

/// Write a failure message.
#[macro_export]
macro_rules! failure {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Preset::Failure, $($arg)+)
    };
}

/// Write an unstyled message.
#[macro_export]
macro_rules! plain {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Preset::Plain, $($arg)+)
    };
}
