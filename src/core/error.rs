//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Write or lookup for a log type that is neither a preset nor registered
    #[error("Unknown log type '{name}'")]
    UnknownType { name: String },

    /// Registration collided with a preset or an already registered type
    #[error("Log type '{name}' is already defined")]
    DuplicateType { name: String },

    /// Style name not recognized by the styling engine
    #[error("Invalid style '{name}'")]
    InvalidStyle { name: String },

    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    IoOperation {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A global `log` logger was already installed
    #[error("Failed to install logger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

impl LoggerError {
    /// Create an unknown type error
    pub fn unknown_type(name: impl Into<String>) -> Self {
        LoggerError::UnknownType { name: name.into() }
    }

    /// Create a duplicate type error
    pub fn duplicate_type(name: impl Into<String>) -> Self {
        LoggerError::DuplicateType { name: name.into() }
    }

    /// Create an invalid style error
    pub fn invalid_style(name: impl Into<String>) -> Self {
        LoggerError::InvalidStyle { name: name.into() }
    }

    /// Create an IO operation error with context
    pub fn io_operation(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
