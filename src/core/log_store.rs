//! In-memory, append-only log buffer with filtered queries
//!
//! The store is independent of [`Logger`](super::Logger); a logger may be
//! given an `Arc<LogStore>` to mirror its calls into it.

use super::log_context::LogContext;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<LogContext>,
}

impl LogRecord {
    pub fn new(level: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            message: message.into(),
            timestamp: Utc::now(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Query predicates; every supplied field must hold for a record to match
///
/// # Example
///
/// ```
/// use level_logger_system::core::{LogContext, LogQuery, LogStore};
///
/// let store = LogStore::new();
/// store.add_log_with_context("info", "login", LogContext::new().with_field("user", "A"));
/// store.add_log("error", "crash");
///
/// let hits = store.query(&LogQuery::new().level("info").context(LogContext::new().with_field("user", "A")));
/// assert_eq!(hits.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogQuery {
    pub level: Option<String>,
    /// Inclusive lower bound on the record timestamp
    pub since: Option<DateTime<Utc>>,
    pub context: Option<LogContext>,
}

impl LogQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: LogContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn matches(&self, record: &LogRecord) -> bool {
        if let Some(ref level) = self.level {
            if record.level != *level {
                return false;
            }
        }

        if let Some(since) = self.since {
            if record.timestamp < since {
                return false;
            }
        }

        if let Some(ref filter) = self.context {
            let matched = match record.context {
                Some(ref context) => context.matches(filter),
                None => filter.is_empty(),
            };
            if !matched {
                return false;
            }
        }

        true
    }
}

#[derive(Debug, Default)]
pub struct LogStore {
    records: RwLock<Vec<LogRecord>>,
}

impl LogStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Append a record stamped with the current time
    pub fn add_log(&self, level: impl Into<String>, message: impl Into<String>) {
        self.add_record(LogRecord::new(level, message));
    }

    pub fn add_log_with_context(
        &self,
        level: impl Into<String>,
        message: impl Into<String>,
        context: LogContext,
    ) {
        self.add_record(LogRecord::new(level, message).with_context(context));
    }

    /// Append a prebuilt record as-is, keeping its timestamp
    pub fn add_record(&self, record: LogRecord) {
        self.records.write().push(record);
    }

    /// Matching records in insertion order
    pub fn query(&self, filter: &LogQuery) -> Vec<LogRecord> {
        self.records
            .read()
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
