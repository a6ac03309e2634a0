//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod log_store;
pub mod logger;
pub mod timestamp;

pub use appender::Appender;
pub use config::{ConfigUpdate, LoggerConfig, DEFAULT_LOGS_DIR};
pub use error::{LoggerError, Result};
pub use log_context::{FieldValue, LogContext};
pub use log_entry::{LogEntry, LogMessage};
pub use log_level::{ConsoleStyle, LevelPolicy, LogOptions, TriggerCallback, BUILTIN_LEVELS};
pub use log_store::{LogQuery, LogRecord, LogStore};
pub use logger::{Logger, LoggerBuilder};
pub use timestamp::{format_timestamp, parse_timestamp, TIMESTAMP_FORMAT};
