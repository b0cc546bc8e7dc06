//! Console appender implementation

use crate::core::{Appender, LoggerError, Record, Result, Stream};
use std::io::{self, Write};

/// Which standard streams the console appender may use
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub enum TerminalMode {
    /// Only use stdout
    Stdout,
    /// Only use stderr
    Stderr,
    /// Follow each log type's stream
    #[default]
    Mixed,
}

pub struct ConsoleAppender {
    mode: TerminalMode,
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }

    /// Use arbitrary writers in place of stdout and stderr
    ///
    /// # Example
    ///
    /// ```
    /// use styled_logger::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::with_writers(Vec::new(), std::io::sink());
    /// ```
    pub fn with_writers<O, E>(out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            mode: TerminalMode::default(),
            out: Box::new(out),
            err: Box::new(err),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    fn target(&self, stream: Stream) -> Stream {
        match self.mode {
            TerminalMode::Stdout => Stream::Stdout,
            TerminalMode::Stderr => Stream::Stderr,
            TerminalMode::Mixed => stream,
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &Record<'_>) -> Result<()> {
        match self.target(record.stream) {
            Stream::Stdout => writeln!(self.out, "{}", record.line)
                .map_err(|e| LoggerError::io_operation("writing to stdout", e)),
            Stream::Stderr => writeln!(self.err, "{}", record.line)
                .map_err(|e| LoggerError::io_operation("writing to stderr", e)),
        }
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both since we write to both
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
