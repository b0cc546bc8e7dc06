//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod log_bridge;
pub mod log_type;
pub mod logger;
pub mod registry;
pub mod style;
pub mod type_logger;

pub use appender::{Appender, Record};
pub use config::{ColorChoice, LoggerConfig, TypeConfig};
pub use error::{LoggerError, Result};
pub use log_type::{CustomTag, LogType, Preset, Stream, TypeToken};
pub use logger::{Logger, LoggerBuilder};
pub use registry::TypeRegistry;
pub use style::{Modifier, Style, StyleList};
pub use type_logger::{CustomTypeFactory, StyledType, TypeLogger};
