//! Console appender implementation

use crate::core::{Appender, LogEntry, Result};
#[cfg(feature = "console")]
use colored::Colorize;

/// Prints `[<LEVEL>] - <console line>` to stdout, the level name styled
pub struct ConsoleAppender {
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Render the full console line for an entry
    ///
    /// # Example
    ///
    /// ```
    /// use level_logger_system::appenders::ConsoleAppender;
    /// use level_logger_system::LogEntry;
    ///
    /// let appender = ConsoleAppender::with_colors(false);
    /// let entry = LogEntry::new("info", "Test message");
    /// assert_eq!(appender.format_line(&entry), "[INFO] -  Test message");
    /// ```
    pub fn format_line(&self, entry: &LogEntry) -> String {
        format!("[{}] - {}", self.format_level(entry), entry.console_line())
    }

    #[cfg(feature = "console")]
    fn format_level(&self, entry: &LogEntry) -> String {
        let level = entry.level.to_uppercase();
        if self.use_colors {
            level.color(entry.style.color_code()).to_string()
        } else {
            level
        }
    }

    #[cfg(not(feature = "console"))]
    fn format_level(&self, entry: &LogEntry) -> String {
        entry.level.to_uppercase()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        println!("{}", self.format_line(entry));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        Ok(())
    }
}
