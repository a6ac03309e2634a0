//! Logger-wide configuration

use crate::appenders::Rotation;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default logs directory, resolved against the working directory at write time
pub const DEFAULT_LOGS_DIR: &str = "logs";

/// Current logger configuration
///
/// Serializable so a host application can embed it in its own settings.
///
/// ```
/// use level_logger_system::core::LoggerConfig;
/// use level_logger_system::appenders::Rotation;
///
/// let config: LoggerConfig =
///     serde_json::from_str(r#"{"logs_dir":"/var/log/app","rotation":"monthly"}"#).unwrap();
/// assert_eq!(config.rotation, Rotation::Monthly);
/// assert!(!config.development);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub logs_dir: PathBuf,
    pub rotation: Rotation,
    /// Gates console output; files and triggers are unaffected
    pub development: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            logs_dir: PathBuf::from(DEFAULT_LOGS_DIR),
            rotation: Rotation::default(),
            development: false,
        }
    }
}

impl LoggerConfig {
    /// Merge a partial update into this config
    ///
    /// `logs_dir` and `rotation` keep their value when omitted, but an
    /// omitted `development` resets to `false`.
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(logs_dir) = update.logs_dir {
            self.logs_dir = logs_dir;
        }
        if let Some(rotation) = update.rotation {
            self.rotation = rotation;
        }
        self.development = update.development.unwrap_or(false);
    }
}

/// Partial configuration accepted by [`Logger::set_config`](super::Logger::set_config)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigUpdate {
    pub logs_dir: Option<PathBuf>,
    pub rotation: Option<Rotation>,
    pub development: Option<bool>,
}

impl ConfigUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_logs_dir(mut self, logs_dir: impl Into<PathBuf>) -> Self {
        self.logs_dir = Some(logs_dir.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = Some(rotation);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_development(mut self, development: bool) -> Self {
        self.development = Some(development);
        self
    }
}
