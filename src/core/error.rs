//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// `log` was called with a level name that was never registered
    #[error("Log level: \"{level}\" is not defined.")]
    UndefinedLevel { level: String },

    /// `add_log_level` was called with a name that is already registered
    #[error("Log level: \"{level}\" already exists.")]
    DuplicateLevel { level: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Formatter error with format type
    #[error("Formatter error ({format_type}): {message}")]
    FormatterError {
        format_type: String,
        message: String,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    pub fn undefined_level(level: impl Into<String>) -> Self {
        LoggerError::UndefinedLevel {
            level: level.into(),
        }
    }

    pub fn duplicate_level(level: impl Into<String>) -> Self {
        LoggerError::DuplicateLevel {
            level: level.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
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

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatterError {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_undefined_level(&self) -> bool {
        matches!(self, LoggerError::UndefinedLevel { .. })
    }

    #[must_use]
    pub fn is_duplicate_level(&self) -> bool {
        matches!(self, LoggerError::DuplicateLevel { .. })
    }

    /// True for directory-creation and append failures
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            LoggerError::IoOperation { .. } | LoggerError::IoError(_)
        )
    }
}
