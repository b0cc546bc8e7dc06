//! # Styled Logger
//!
//! A console logger that maps named log types to styled terminal output.
//!
//! ## Features
//!
//! - **Preset Types**: `info`, `warn`, `error`, `debug`, `success`, `failure`, `plain`
//! - **Custom Types**: register new types from a style list, by name or unique token
//! - **Composable Styles**: colors, backgrounds and modifiers applied in order
//! - **Stream Routing**: diagnostics to stderr, regular output to stdout
//! - **`log` Bridge**: install as the global logger for the `log` facade
//!
//! ```
//! use styled_logger::Logger;
//!
//! let mut logger = Logger::new();
//! logger.success("build finished").unwrap();
//!
//! logger.create_type("highlight", ["yellow", "bold"]).unwrap();
//! logger.write("highlight", "3 warnings").unwrap();
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

#[cfg(test)]
mod test_support;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, TerminalMode};
    pub use crate::core::{
        Appender, ColorChoice, CustomTag, CustomTypeFactory, LogType, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, Modifier, Preset, Record, Result, Stream, Style, StyleList,
        StyledType, TypeConfig, TypeLogger, TypeRegistry, TypeToken,
    };
}

pub use crate::appenders::{ConsoleAppender, TerminalMode};
pub use crate::core::{
    Appender, ColorChoice, CustomTag, CustomTypeFactory, LogType, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, Modifier, Preset, Record, Result, Stream, Style, StyleList,
    StyledType, TypeConfig, TypeLogger, TypeRegistry, TypeToken,
};
