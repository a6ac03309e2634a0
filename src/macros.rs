//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` and forward the
//! result to the logger. Each one evaluates to the `Result` of the call, so
//! an unregistered level or a failed file write is still visible.
//!
//! # Examples
//!
//! ```no_run
//! use level_logger_system::prelude::*;
//! use level_logger_system::info;
//!
//! # fn main() -> Result<()> {
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//! # Ok(())
//! # }
//! ```

/// Log a formatted message at any registered level.
///
/// # Examples
///
/// ```no_run
/// # use level_logger_system::prelude::*;
/// # let logger = Logger::new();
/// use level_logger_system::log;
/// log!(logger, "verbose", "Simple message").unwrap();
/// log!(logger, "error", "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "info", $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```no_run
/// # use level_logger_system::prelude::*;
/// # let logger = Logger::new();
/// use level_logger_system::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "warn", $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "error", $($arg)+)
    };
}

/// Log a verbose-level message.
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "verbose", $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogQuery, LogStore, Logger};
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};

    fn logger() -> (Logger, Arc<LogStore>, TempDir) {
        let dir = tempdir().unwrap();
        let store = Arc::new(LogStore::new());
        let logger = Logger::builder()
            .logs_dir(dir.path())
            .store(Arc::clone(&store))
            .build();
        (logger, store, dir)
    }

    #[test]
    fn test_log_macro() {
        let (logger, store, _dir) = logger();
        log!(logger, "info", "Test message").unwrap();
        log!(logger, "info", "Formatted: {}", 42).unwrap();

        let messages: Vec<_> = store.query(&LogQuery::new()).into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["Test message", "Formatted: 42"]);
    }

    #[test]
    fn test_log_macro_unknown_level() {
        let (logger, _store, _dir) = logger();
        let result = log!(logger, "nope", "Value: {}", 1);
        assert!(result.unwrap_err().is_undefined_level());
    }

    #[test]
    fn test_level_macros() {
        let (logger, store, _dir) = logger();
        info!(logger, "Items: {}", 100).unwrap();
        warn!(logger, "Retry {} of {}", 1, 3).unwrap();
        error!(logger, "Code: {}", 500).unwrap();
        verbose!(logger, "Verbose message").unwrap();

        let levels: Vec<_> = store.query(&LogQuery::new()).into_iter().map(|r| r.level).collect();
        assert_eq!(levels, vec!["info", "warn", "error", "verbose"]);
        assert_eq!(store.query(&LogQuery::new().level("warn"))[0].message, "Retry 1 of 3");
    }
}
