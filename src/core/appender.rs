//! Appender trait for log output destinations

use super::{error::Result, log_type::LogType, log_type::Stream};

/// A rendered line on its way to an output destination
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub log_type: &'a LogType,
    pub stream: Stream,
    /// The message as passed by the caller
    pub message: &'a str,
    /// The styled line, without trailing newline
    pub line: &'a str,
}

pub trait Appender: Send {
    fn append(&mut self, record: &Record<'_>) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
