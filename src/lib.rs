//! # Level Logger System
//!
//! An extensible, level-based Rust logger with calendar-rotated log files
//! and a queryable in-memory log store.
//!
//! ## Features
//!
//! - **Named Levels**: Register levels at runtime, each with its own console
//!   style, timestamp and file policy
//! - **Rotated Files**: Daily, monthly or yearly directory trees, created lazily
//! - **Log Store**: Append-only in-memory records with level, time and context queries
//! - **Thread Safe**: One logger instance shared across threads
//!
//! ## Example
//!
//! ```no_run
//! use level_logger_system::prelude::*;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<()> {
//! let logger = Logger::new();
//! logger.set_config(ConfigUpdate::new().with_logs_dir("logs").with_development(true))?;
//!
//! logger.add_log_level(
//!     "audit",
//!     LevelPolicy::new(ConsoleStyle::Green)
//!         .with_timestamp_in_console(true)
//!         .with_log_to_file(true)
//!         .with_log_file_name("audit.log"),
//! )?;
//!
//! logger.log("audit", "user 42 created")?;
//! logger.info("server started")?;
//! # Ok(())
//! # }
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, Rotation, RotatingFileWriter};
    pub use crate::core::{
        format_timestamp, Appender, ConfigUpdate, ConsoleStyle, FieldValue, LevelPolicy,
        LogContext, LogEntry, LogMessage, LogOptions, LogQuery, LogRecord, LogStore, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, Result, TriggerCallback,
    };
}

pub use appenders::{ConsoleAppender, Rotation, RotatingFileWriter};
pub use core::{
    format_timestamp, parse_timestamp, Appender, ConfigUpdate, ConsoleStyle, FieldValue,
    LevelPolicy, LogContext, LogEntry, LogMessage, LogOptions, LogQuery, LogRecord, LogStore,
    Logger, LoggerBuilder, LoggerConfig, LoggerError, Result, TriggerCallback, BUILTIN_LEVELS,
};
