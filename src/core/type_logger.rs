//! Per-type rendering capability and the default styled implementation

use super::config::ColorChoice;
use super::log_type::Stream;
use super::style::{self, Style, StyleList};

/// What a log type needs to turn a message into an output line.
pub trait TypeLogger: Send + Sync {
    fn styles(&self) -> &[Style];

    fn stream(&self) -> Stream {
        Stream::Stdout
    }

    /// Turn `message` into the output line. `color` is the owning logger's
    /// choice and must be honored by implementations that emit escapes.
    fn render(&self, message: &str, color: ColorChoice) -> String {
        style::paint(message, self.styles(), color)
    }
}

/// Builds the logger for a custom type from its style list.
pub type CustomTypeFactory = Box<dyn FnOnce(StyleList) -> Box<dyn TypeLogger>>;

/// A log type that applies a fixed style list
#[derive(Debug, Clone, PartialEq)]
pub struct StyledType {
    styles: StyleList,
    stream: Stream,
}

impl StyledType {
    pub fn new(styles: StyleList) -> Self {
        Self {
            styles,
            stream: Stream::Stdout,
        }
    }

    #[must_use]
    pub fn with_stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
    }
}

impl TypeLogger for StyledType {
    fn styles(&self) -> &[Style] {
        &self.styles
    }

    fn stream(&self) -> Stream {
        self.stream
    }
}

impl<L: TypeLogger + ?Sized> TypeLogger for Box<L> {
    fn styles(&self) -> &[Style] {
        (**self).styles()
    }

    fn stream(&self) -> Stream {
        (**self).stream()
    }

    fn render(&self, message: &str, color: ColorChoice) -> String {
        (**self).render(message, color)
    }
}
