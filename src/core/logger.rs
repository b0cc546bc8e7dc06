//! Main logger implementation

use super::{
    appender::{Appender, Record},
    config::{ColorChoice, LoggerConfig},
    error::{LoggerError, Result},
    log_type::{CustomTag, LogType, Preset},
    registry::TypeRegistry,
    style::{self, Style, StyleList},
    type_logger::{CustomTypeFactory, StyledType, TypeLogger},
};
use crate::appenders::{ConsoleAppender, TerminalMode};
use parking_lot::Mutex;
use std::borrow::Cow;
use std::collections::HashSet;

/// Facade that renders messages under a log type's styling.
///
/// The type registry is filled during setup (`&mut self`) and only read by
/// [`write`](Logger::write) and the per-preset shortcuts afterwards.
pub struct Logger {
    registry: TypeRegistry,
    appenders: Mutex<Vec<Box<dyn Appender>>>,
    color: ColorChoice,
    labels: bool,
    silenced: HashSet<LogType>,
}

impl Logger {
    /// Logger with the preset types writing to the process console
    #[must_use]
    pub fn new() -> Self {
        let appenders: Vec<Box<dyn Appender>> = vec![Box::new(ConsoleAppender::new())];
        Self {
            registry: TypeRegistry::new(),
            appenders: Mutex::new(appenders),
            color: ColorChoice::Auto,
            labels: false,
            silenced: HashSet::new(),
        }
    }

    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        self.appenders.get_mut().push(appender);
    }

    pub fn set_color(&mut self, color: ColorChoice) {
        self.color = color;
    }

    pub fn set_labels(&mut self, labels: bool) {
        self.labels = labels;
    }

    /// Drop every future write of `log_type`. The type must exist.
    pub fn silence(&mut self, log_type: impl Into<LogType>) -> Result<()> {
        let log_type = log_type.into();
        self.registry.get(&log_type)?;
        self.silenced.insert(log_type);
        Ok(())
    }

    pub fn unsilence(&mut self, log_type: impl Into<LogType>) {
        self.silenced.remove(&log_type.into());
    }

    pub fn has_type(&self, log_type: impl Into<LogType>) -> bool {
        self.registry.contains(&log_type.into())
    }

    pub fn types(&self) -> impl Iterator<Item = LogType> + '_ {
        self.registry.types()
    }

    /// Style list of a preset or registered custom type
    pub fn resolve(&self, log_type: impl Into<LogType>) -> Result<StyleList> {
        self.registry.resolve(&log_type.into())
    }

    /// Apply `styles` to `message` in order, honoring this logger's color choice
    pub fn format(&self, message: &str, styles: &[Style]) -> String {
        style::paint(message, styles, self.color)
    }

    /// Render `message` under `log_type` and hand it to every appender.
    ///
    /// Unknown types fail before anything is written. The first appender
    /// error is returned as is.
    pub fn write(&self, log_type: impl Into<LogType>, message: impl AsRef<str>) -> Result<()> {
        let log_type = log_type.into();
        let type_logger = self.registry.get(&log_type)?;
        if self.silenced.contains(&log_type) {
            return Ok(());
        }

        let message = message.as_ref();
        let text: Cow<'_, str> = if self.labels {
            Cow::Owned(format!("[{}] {}", log_type, message))
        } else {
            Cow::Borrowed(message)
        };
        let line = type_logger.render(&text, self.color);

        let record = Record {
            log_type: &log_type,
            stream: type_logger.stream(),
            message,
            line: &line,
        };
        let mut appenders = self.appenders.lock();
        for appender in appenders.iter_mut() {
            appender.append(&record)?;
        }
        Ok(())
    }

    /// Build a type logger from `styles` with `factory` and store it under `name`.
    ///
    /// Fails with [`LoggerError::DuplicateType`] when `name` is a preset name
    /// or was registered before; existing types are never overwritten.
    ///
    /// # Example
    ///
    /// ```
    /// use styled_logger::prelude::*;
    ///
    /// let mut logger = Logger::new();
    /// let styles = Style::parse_list(["cyan", "italic"]).unwrap();
    /// logger
    ///     .register_custom_type("trace", styles, |styles| {
    ///         StyledType::new(styles).with_stream(Stream::Stderr)
    ///     })
    ///     .unwrap();
    ///
    /// assert!(logger.has_type("trace"));
    /// ```
    pub fn register_custom_type<F, L>(
        &mut self,
        name: impl Into<CustomTag>,
        styles: StyleList,
        factory: F,
    ) -> Result<&dyn TypeLogger>
    where
        F: FnOnce(StyleList) -> L,
        L: TypeLogger + 'static,
    {
        self.registry.register(name.into(), styles, factory)
    }

    /// Register a custom type writing to stdout with the named styles
    ///
    /// # Example
    ///
    /// ```
    /// use styled_logger::Logger;
    ///
    /// let mut logger = Logger::new();
    /// logger.create_type("highlight", ["yellow", "bold"]).unwrap();
    /// logger.write("highlight", "look here").unwrap();
    /// ```
    pub fn create_type<I, S>(&mut self, name: impl Into<CustomTag>, styles: I) -> Result<&dyn TypeLogger>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let styles = Style::parse_list(styles)?;
        self.register_custom_type(name, styles, StyledType::new)
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.lock();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) -> Result<()> {
        self.write(Preset::Info, message)
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) -> Result<()> {
        self.write(Preset::Warn, message)
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) -> Result<()> {
        self.write(Preset::Error, message)
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) -> Result<()> {
        self.write(Preset::Debug, message)
    }

    #[inline]
    pub fn success(&self, message: impl AsRef<str>) -> Result<()> {
        self.write(Preset::Success, message)
    }

    #[inline]
    pub fn failure(&self, message: impl AsRef<str>) -> Result<()> {
        self.write(Preset::Failure, message)
    }

    #[inline]
    pub fn plain(&self, message: impl AsRef<str>) -> Result<()> {
        self.write(Preset::Plain, message)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        for appender in self.appenders.get_mut().iter_mut() {
            if let Err(e) = appender.flush() {
                eprintln!(
                    "[LOGGER ERROR] Appender '{}' flush failed during shutdown: {}",
                    appender.name(),
                    e
                );
            }
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use styled_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .color(ColorChoice::Never)
///     .labels(true)
///     .preset_styles(Preset::Info, Style::parse_list(["cyan"]).unwrap())
///     .custom_type("highlight", Style::parse_list(["yellow", "bold"]).unwrap())
///     .terminal_mode(TerminalMode::Stderr)
///     .build()
///     .unwrap();
///
/// assert!(logger.has_type("highlight"));
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    preset_overrides: Vec<(Preset, StyleList)>,
    custom_types: Vec<(CustomTag, StyleList, CustomTypeFactory)>,
    silenced: Vec<LogType>,
    appenders: Vec<Box<dyn Appender>>,
    terminal_mode: TerminalMode,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            preset_overrides: Vec::new(),
            custom_types: Vec::new(),
            silenced: Vec::new(),
            appenders: Vec::new(),
            terminal_mode: TerminalMode::default(),
        }
    }

    /// Start from a declarative configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, color: ColorChoice) -> Self {
        self.config.color = color;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn labels(mut self, labels: bool) -> Self {
        self.config.labels = labels;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn silence(mut self, log_type: impl Into<LogType>) -> Self {
        self.silenced.push(log_type.into());
        self
    }

    /// Replace a preset's styles; applied after any configured overrides
    #[must_use = "builder methods return a new value"]
    pub fn preset_styles(mut self, preset: Preset, styles: StyleList) -> Self {
        self.preset_overrides.push((preset, styles));
        self
    }

    /// Register a custom type rendered with `styles` on stdout
    #[must_use = "builder methods return a new value"]
    pub fn custom_type(self, name: impl Into<CustomTag>, styles: StyleList) -> Self {
        self.custom_type_with(name, styles, StyledType::new)
    }

    /// Register a custom type built by `factory`
    #[must_use = "builder methods return a new value"]
    pub fn custom_type_with<F, L>(
        mut self,
        name: impl Into<CustomTag>,
        styles: StyleList,
        factory: F,
    ) -> Self
    where
        F: FnOnce(StyleList) -> L + 'static,
        L: TypeLogger + 'static,
    {
        let factory: CustomTypeFactory =
            Box::new(move |styles| Box::new(factory(styles)) as Box<dyn TypeLogger>);
        self.custom_types.push((name.into(), styles, factory));
        self
    }

    /// Add an appender. Without any, a [`ConsoleAppender`] is used.
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Stream selection for the default console appender
    #[must_use = "builder methods return a new value"]
    pub fn terminal_mode(mut self, mode: TerminalMode) -> Self {
        self.terminal_mode = mode;
        self
    }

    /// Build the Logger, validating every style name, preset name and
    /// custom type registration.
    pub fn build(self) -> Result<Logger> {
        let LoggerBuilder {
            config,
            preset_overrides,
            custom_types,
            silenced,
            appenders,
            terminal_mode,
        } = self;

        let mut registry = TypeRegistry::new();
        for (name, styles) in &config.presets {
            let preset = name
                .parse::<Preset>()
                .map_err(|message| LoggerError::config("presets", message))?;
            registry.set_preset_styles(preset, Style::parse_list(styles)?);
        }
        for (preset, styles) in preset_overrides {
            registry.set_preset_styles(preset, styles);
        }

        for (name, type_config) in config.types {
            let styles = Style::parse_list(&type_config.styles)?;
            let stream = type_config.stream;
            registry.register(CustomTag::Name(name), styles, |styles| {
                StyledType::new(styles).with_stream(stream)
            })?;
        }
        for (tag, styles, factory) in custom_types {
            registry.register(tag, styles, factory)?;
        }

        let silenced = config
            .silenced
            .iter()
            .map(|name| LogType::from(name.as_str()))
            .chain(silenced)
            .map(|log_type| registry.get(&log_type).map(|_| log_type))
            .collect::<Result<HashSet<_>>>()?;

        let appenders: Vec<Box<dyn Appender>> = if appenders.is_empty() {
            vec![Box::new(ConsoleAppender::new().with_mode(terminal_mode))]
        } else {
            appenders
        };

        Ok(Logger {
            registry,
            appenders: Mutex::new(appenders),
            color: config.color,
            labels: config.labels,
            silenced,
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
