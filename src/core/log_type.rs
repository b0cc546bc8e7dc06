//! Log type identifiers: built-in presets and user-registered custom types

use super::style::{Modifier, Style, StyleList};
use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Output stream a log type writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/// Built-in log types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Info,
    Warn,
    Error,
    Debug,
    Success,
    Failure,
    Plain,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Info,
        Preset::Warn,
        Preset::Error,
        Preset::Debug,
        Preset::Success,
        Preset::Failure,
        Preset::Plain,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Preset::Info => "info",
            Preset::Warn => "warn",
            Preset::Error => "error",
            Preset::Debug => "debug",
            Preset::Success => "success",
            Preset::Failure => "failure",
            Preset::Plain => "plain",
        }
    }

    pub fn default_styles(&self) -> StyleList {
        match self {
            Preset::Info => vec![Style::Foreground(Color::Blue)],
            Preset::Warn => vec![Style::Foreground(Color::Yellow)],
            Preset::Error => vec![Style::Foreground(Color::Red)],
            Preset::Debug => vec![Style::Foreground(Color::Magenta)],
            Preset::Success => vec![Style::Foreground(Color::Green)],
            Preset::Failure => vec![
                Style::Foreground(Color::Red),
                Style::Modifier(Modifier::Bold),
            ],
            Preset::Plain => vec![Style::Normal],
        }
    }

    /// Diagnostics go to stderr, regular output to stdout
    pub fn default_stream(&self) -> Stream {
        match self {
            Preset::Warn | Preset::Error | Preset::Debug | Preset::Failure => Stream::Stderr,
            Preset::Info | Preset::Success | Preset::Plain => Stream::Stdout,
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Preset::Info),
            "warn" => Ok(Preset::Warn),
            "error" => Ok(Preset::Error),
            "debug" => Ok(Preset::Debug),
            "success" => Ok(Preset::Success),
            "failure" => Ok(Preset::Failure),
            "plain" => Ok(Preset::Plain),
            _ => Err(format!("Invalid preset: '{}'", s)),
        }
    }
}

static NEXT_TOKEN_ID: AtomicU64 = AtomicU64::new(1);

/// Unique symbol naming a custom log type.
///
/// Two tokens are equal only if one is a clone of the other; the
/// description is for display and does not take part in equality.
#[derive(Debug, Clone)]
pub struct TypeToken {
    id: u64,
    description: Option<Arc<str>>,
}

impl TypeToken {
    pub fn new() -> Self {
        Self {
            id: NEXT_TOKEN_ID.fetch_add(1, Ordering::Relaxed),
            description: None,
        }
    }

    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            description: Some(Arc::from(description.into())),
            ..Self::new()
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Default for TypeToken {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{}", description),
            None => write!(f, "token#{}", self.id),
        }
    }
}

/// Key of a user-registered log type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CustomTag {
    Name(String),
    Token(TypeToken),
}

impl fmt::Display for CustomTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomTag::Name(name) => write!(f, "{}", name),
            CustomTag::Token(token) => write!(f, "{}", token),
        }
    }
}

impl From<&str> for CustomTag {
    fn from(name: &str) -> Self {
        CustomTag::Name(name.to_string())
    }
}

impl From<String> for CustomTag {
    fn from(name: String) -> Self {
        CustomTag::Name(name)
    }
}

impl From<TypeToken> for CustomTag {
    fn from(token: TypeToken) -> Self {
        CustomTag::Token(token)
    }
}

impl From<&TypeToken> for CustomTag {
    fn from(token: &TypeToken) -> Self {
        CustomTag::Token(token.clone())
    }
}

/// A preset or a custom log type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogType {
    Preset(Preset),
    Custom(CustomTag),
}

impl LogType {
    pub fn is_preset(&self) -> bool {
        matches!(self, LogType::Preset(_))
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogType::Preset(preset) => write!(f, "{}", preset),
            LogType::Custom(tag) => write!(f, "{}", tag),
        }
    }
}

impl From<Preset> for LogType {
    fn from(preset: Preset) -> Self {
        LogType::Preset(preset)
    }
}

/// Preset names resolve to the preset, anything else is a custom name.
impl From<&str> for LogType {
    fn from(name: &str) -> Self {
        match name.parse::<Preset>() {
            Ok(preset) => LogType::Preset(preset),
            Err(_) => LogType::Custom(CustomTag::Name(name.to_string())),
        }
    }
}

impl From<String> for LogType {
    fn from(name: String) -> Self {
        match name.parse::<Preset>() {
            Ok(preset) => LogType::Preset(preset),
            Err(_) => LogType::Custom(CustomTag::Name(name)),
        }
    }
}

impl From<CustomTag> for LogType {
    fn from(tag: CustomTag) -> Self {
        match tag {
            CustomTag::Name(name) => LogType::from(name),
            token => LogType::Custom(token),
        }
    }
}

impl From<TypeToken> for LogType {
    fn from(token: TypeToken) -> Self {
        LogType::Custom(CustomTag::Token(token))
    }
}

impl From<&TypeToken> for LogType {
    fn from(token: &TypeToken) -> Self {
        LogType::Custom(CustomTag::Token(token.clone()))
    }
}

impl From<&LogType> for LogType {
    fn from(log_type: &LogType) -> Self {
        log_type.clone()
    }
}
