//! Main logger implementation
//!
//! A [`Logger`] owns the configuration, the registry of named level
//! policies and the console appender. Create one at process start and pass
//! it (or an `Arc` of it) to whatever needs to log.

use super::{
    appender::Appender,
    config::{ConfigUpdate, LoggerConfig},
    error::{LoggerError, Result},
    log_entry::{LogEntry, LogMessage},
    log_level::{builtin_policies, LevelPolicy, LogOptions},
    log_store::LogStore,
};
use crate::appenders::{ensure_dir, ConsoleAppender, Rotation, RotatingFileWriter};
use parking_lot::{Mutex, RwLock};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

pub struct Logger {
    config: RwLock<LoggerConfig>,
    levels: RwLock<HashMap<String, LevelPolicy>>,
    console: Mutex<Box<dyn Appender>>,
    /// Optional in-memory mirror of every accepted log call
    store: Option<Arc<LogStore>>,
}

impl Logger {
    /// Unconfigured logger: daily rotation, development off, `./logs`
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(LoggerConfig::default(), Box::new(ConsoleAppender::new()), None)
    }

    fn with_parts(
        config: LoggerConfig,
        console: Box<dyn Appender>,
        store: Option<Arc<LogStore>>,
    ) -> Self {
        let levels = builtin_policies()
            .into_iter()
            .map(|(name, policy)| (name.to_string(), policy))
            .collect();

        Self {
            config: RwLock::new(config),
            levels: RwLock::new(levels),
            console: Mutex::new(console),
            store,
        }
    }

    /// Merge a partial configuration and make sure the logs directory exists
    ///
    /// An omitted `development` flag resets development mode to `false`.
    /// The update is kept even when creating the directory fails.
    pub fn set_config(&self, update: ConfigUpdate) -> Result<()> {
        let logs_dir = {
            let mut config = self.config.write();
            config.apply(update);
            config.logs_dir.clone()
        };
        ensure_dir(&logs_dir)
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> LoggerConfig {
        self.config.read().clone()
    }

    /// Register a new level
    ///
    /// Fails with [`LoggerError::DuplicateLevel`] if the name is taken,
    /// built-ins included; the registry is left untouched in that case.
    /// No file is created until the first write at that level.
    pub fn add_log_level(&self, name: impl Into<String>, policy: LevelPolicy) -> Result<()> {
        match self.levels.write().entry(name.into()) {
            Entry::Occupied(existing) => Err(LoggerError::duplicate_level(existing.key().clone())),
            Entry::Vacant(slot) => {
                slot.insert(policy);
                Ok(())
            }
        }
    }

    pub fn has_level(&self, name: &str) -> bool {
        self.levels.read().contains_key(name)
    }

    /// Registered level names, sorted
    pub fn level_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.levels.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn level_policy(&self, name: &str) -> Option<LevelPolicy> {
        self.levels.read().get(name).cloned()
    }

    pub fn log(&self, level: &str, message: impl Into<LogMessage>) -> Result<()> {
        self.log_with_options(level, message, &LogOptions::default())
    }

    /// Dispatch one message to the console, the rotated file and the trigger
    ///
    /// Console output happens only in development mode. The file line always
    /// carries a timestamp. The level's `on_trigger` callback runs with the
    /// console-style line whatever the sinks returned; the first sink error
    /// is then returned. No lock is held while the callback runs.
    pub fn log_with_options(
        &self,
        level: &str,
        message: impl Into<LogMessage>,
        options: &LogOptions,
    ) -> Result<()> {
        let policy = self
            .levels
            .read()
            .get(level)
            .cloned()
            .ok_or_else(|| LoggerError::undefined_level(level))?;
        let effective = policy.resolve(options);
        let config = self.config();

        let entry = LogEntry::new(level, message.into().render())
            .with_style(effective.style, effective.include_timestamp_in_console);

        let console_result = if config.development {
            self.console.lock().append(&entry)
        } else {
            Ok(())
        };

        let file_result = if effective.log_to_file {
            RotatingFileWriter::new(config.logs_dir, config.rotation)
                .write_at(&format!("{}.log", level), &entry.file_line(), &entry.timestamp)
                .map(|_| ())
        } else {
            Ok(())
        };

        if let Some(ref store) = self.store {
            store.add_log(level, entry.message.clone());
        }

        if let Some(ref callback) = policy.on_trigger {
            callback(&entry.console_line());
        }

        console_result.and(file_result)
    }

    #[inline]
    pub fn info(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.log("info", message)
    }

    #[inline]
    pub fn warn(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.log("warn", message)
    }

    #[inline]
    pub fn error(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.log("error", message)
    }

    #[inline]
    pub fn verbose(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.log("verbose", message)
    }

    pub fn info_with_options(&self, message: impl Into<LogMessage>, options: &LogOptions) -> Result<()> {
        self.log_with_options("info", message, options)
    }

    pub fn warn_with_options(&self, message: impl Into<LogMessage>, options: &LogOptions) -> Result<()> {
        self.log_with_options("warn", message, options)
    }

    pub fn error_with_options(&self, message: impl Into<LogMessage>, options: &LogOptions) -> Result<()> {
        self.log_with_options("error", message, options)
    }

    /// The attached log store, if any
    pub fn store(&self) -> Option<&Arc<LogStore>> {
        self.store.as_ref()
    }

    pub fn flush(&self) -> Result<()> {
        self.console.lock().flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.console.get_mut().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// `build` performs no I/O; the logs directory is created on first write
/// or by [`Logger::set_config`].
///
/// # Example
/// ```
/// use level_logger_system::prelude::*;
/// use std::sync::Arc;
///
/// let store = Arc::new(LogStore::new());
/// let logger = Logger::builder()
///     .logs_dir("/tmp/app-logs")
///     .rotation(Rotation::Monthly)
///     .development(true)
///     .store(Arc::clone(&store))
///     .build();
///
/// assert_eq!(logger.config().rotation, Rotation::Monthly);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    console: Option<Box<dyn Appender>>,
    store: Option<Arc<LogStore>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            console: None,
            store: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn logs_dir(mut self, logs_dir: impl Into<PathBuf>) -> Self {
        self.config.logs_dir = logs_dir.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn development(mut self, development: bool) -> Self {
        self.config.development = development;
        self
    }

    /// Start from a complete configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the default [`ConsoleAppender`]
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.console = Some(Box::new(appender));
        self
    }

    /// Mirror every accepted log call into `store`
    #[must_use = "builder methods return a new value"]
    pub fn store(mut self, store: Arc<LogStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let console = self
            .console
            .unwrap_or_else(|| Box::new(ConsoleAppender::new()));
        Logger::with_parts(self.config, console, self.store)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
