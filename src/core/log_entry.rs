//! Log entry structure
//!
//! A [`LogEntry`] is one dispatched log call after its level policy and
//! overrides have been resolved. It owns the two line layouts: the console
//! line (timestamp optional) and the file line (timestamp always present).

use super::error::Result;
use super::log_level::ConsoleStyle;
use super::timestamp::format_timestamp;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// Message payload accepted by the logger
///
/// The caller picks the variant, so the logger never inspects runtime types.
#[derive(Debug, Clone, PartialEq)]
pub enum LogMessage {
    Text(String),
    /// Rendered as pretty-printed JSON with two-space indentation
    Structured(serde_json::Value),
    /// Rendered through the error's `Display`
    Error(String),
}

impl LogMessage {
    /// Serialize any value into a structured message
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(LogMessage::Structured(serde_json::to_value(value)?))
    }

    pub fn from_error(error: &dyn std::error::Error) -> Self {
        LogMessage::Error(error.to_string())
    }

    /// Final text that lands in the log line
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            LogMessage::Text(text) | LogMessage::Error(text) => text.clone(),
            LogMessage::Structured(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

impl fmt::Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<String> for LogMessage {
    fn from(s: String) -> Self {
        LogMessage::Text(s)
    }
}

impl From<&str> for LogMessage {
    fn from(s: &str) -> Self {
        LogMessage::Text(s.to_string())
    }
}

impl From<&String> for LogMessage {
    fn from(s: &String) -> Self {
        LogMessage::Text(s.clone())
    }
}

impl From<serde_json::Value> for LogMessage {
    fn from(value: serde_json::Value) -> Self {
        LogMessage::Structured(value)
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub style: ConsoleStyle,
    pub include_timestamp_in_console: bool,
}

impl LogEntry {
    pub fn new(level: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            message: message.into(),
            timestamp: Local::now(),
            style: ConsoleStyle::default(),
            include_timestamp_in_console: false,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_style(mut self, style: ConsoleStyle, include_timestamp_in_console: bool) -> Self {
        self.style = style;
        self.include_timestamp_in_console = include_timestamp_in_console;
        self
    }

    /// `<timestamp?> <message>`; the separating space is kept even without a timestamp
    pub fn console_line(&self) -> String {
        let timestamp = if self.include_timestamp_in_console {
            format_timestamp(&self.timestamp)
        } else {
            String::new()
        };
        format!("{} {}", timestamp, self.message)
    }

    /// `<timestamp> <message>`, independent of the console timestamp flag
    pub fn file_line(&self) -> String {
        format!("{} {}", format_timestamp(&self.timestamp), self.message)
    }
}
