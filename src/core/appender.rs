//! Appender trait for console-side log output

use super::{error::Result, log_entry::LogEntry};

/// Destination for the development-mode console output
///
/// The logger only hands entries to its appender while development mode is
/// on; the rotated file sink is driven separately from the logger config.
pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}
