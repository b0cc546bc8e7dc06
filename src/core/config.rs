//! Declarative logger configuration
//!
//! A [`LoggerConfig`] can be built in code or deserialized from JSON:
//!
//! ```
//! use styled_logger::core::{ColorChoice, LoggerConfig};
//!
//! let config = LoggerConfig::from_json_str(r#"{
//!     "color": "never",
//!     "labels": true,
//!     "presets": { "info": ["cyan"] },
//!     "types": { "highlight": { "styles": ["yellow", "bold"] } }
//! }"#).unwrap();
//!
//! assert_eq!(config.color, ColorChoice::Never);
//! assert!(config.types.contains_key("highlight"));
//! ```

use super::error::{LoggerError, Result};
use super::log_type::Stream;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// When to emit terminal escape codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Let `colored` decide (tty detection, `NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`)
    #[default]
    Auto,
    /// Emit escape codes for this logger regardless of the environment
    Always,
    /// Write messages without styling
    Never,
}

/// Custom type declared in configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeConfig {
    pub styles: Vec<String>,
    pub stream: Stream,
}

impl TypeConfig {
    pub fn new<I, S>(styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            styles: styles.into_iter().map(Into::into).collect(),
            stream: Stream::Stdout,
        }
    }

    #[must_use]
    pub fn with_stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub color: ColorChoice,
    /// Prefix every line with `[<type>]`
    pub labels: bool,
    /// Types whose writes are dropped
    pub silenced: Vec<String>,
    /// Preset name to replacement style names
    pub presets: BTreeMap<String, Vec<String>>,
    /// Custom types registered when the logger is built
    pub types: BTreeMap<String, TypeConfig>,
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(format!("reading config file '{}'", path.display()), e)
        })?;
        Self::from_json_str(&text)
    }

    #[must_use]
    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_silenced(mut self, name: impl Into<String>) -> Self {
        self.silenced.push(name.into());
        self
    }

    #[must_use]
    pub fn with_preset<I, S>(mut self, preset: impl Into<String>, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.presets
            .insert(preset.into(), styles.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_type(mut self, name: impl Into<String>, config: TypeConfig) -> Self {
        self.types.insert(name.into(), config);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.color, ColorChoice::Auto);
        assert!(!config.labels);
        assert!(config.silenced.is_empty());
        assert!(config.presets.is_empty());
        assert!(config.types.is_empty());
    }

    #[test]
    fn test_builder_pattern() {
        let config = LoggerConfig::new()
            .with_color(ColorChoice::Always)
            .with_labels(true)
            .with_silenced("debug")
            .with_preset("warn", ["yellow", "bold"])
            .with_type("audit", TypeConfig::new(["cyan"]).with_stream(Stream::Stderr));

        assert_eq!(config.color, ColorChoice::Always);
        assert!(config.labels);
        assert_eq!(config.silenced, vec!["debug"]);
        assert_eq!(config.presets["warn"], vec!["yellow", "bold"]);
        assert_eq!(config.types["audit"].stream, Stream::Stderr);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = LoggerConfig::from_json_str(r#"{ "types": { "note": {} } }"#).unwrap();
        assert_eq!(config.color, ColorChoice::Auto);
        assert_eq!(config.types["note"], TypeConfig::default());
    }

    #[test]
    fn test_truecolor_styles_in_json() {
        let config = LoggerConfig::from_json_str(
            r##"{ "types": { "deploy": { "styles": ["#ff8800", "on_#202020"] } } }"##,
        )
        .unwrap();
        assert_eq!(config.types["deploy"].styles, vec!["#ff8800", "on_#202020"]);
    }

    #[test]
    fn test_invalid_json() {
        let err = LoggerConfig::from_json_str(r#"{ "color": "sometimes" }"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = LoggerConfig::from_file("/nonexistent/styled_logger.json").unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("styled_logger.json"));
    }
}
