//! Calendar-rotated file writer
//!
//! Log files live in a directory tree rooted at the logs directory, one
//! level of nesting per calendar component up to the rotation boundary:
//!
//! | rotation  | file                                   |
//! |-----------|----------------------------------------|
//! | daily     | `<base>/<year>/<month>/<day>/<file>`   |
//! | monthly   | `<base>/<year>/<month>/<file>`         |
//! | yearly    | `<base>/<year>/<file>`                 |
//!
//! The year has four digits; month and day are plain decimal integers
//! (`2024/3/7`), not zero padded.
//! Directories are created lazily on the first write that needs them.

use crate::core::error::{LoggerError, Result};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

/// How often the active file for a level changes
///
/// # Examples
///
/// ```
/// use level_logger_system::appenders::Rotation;
///
/// let rotation: Rotation = "monthly".parse().unwrap();
/// assert_eq!(rotation, Rotation::Monthly);
/// assert_eq!(Rotation::default(), Rotation::Daily);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    #[default]
    Daily,
    Monthly,
    Yearly,
}

impl Rotation {
    pub fn to_str(&self) -> &'static str {
        match self {
            Rotation::Daily => "daily",
            Rotation::Monthly => "monthly",
            Rotation::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Rotation {
    type Err = LoggerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Rotation::Daily),
            "monthly" => Ok(Rotation::Monthly),
            "yearly" => Ok(Rotation::Yearly),
            _ => Err(LoggerError::config(
                "Rotation",
                format!("unknown rotation '{}', expected daily, monthly or yearly", s),
            )),
        }
    }
}

/// Directory holding the active files for `date`
#[must_use]
pub fn rotated_dir<D: Datelike>(base: &Path, rotation: Rotation, date: &D) -> PathBuf {
    let mut dir = base.join(format!("{:04}", date.year()));
    match rotation {
        Rotation::Yearly => {}
        Rotation::Monthly => dir.push(date.month().to_string()),
        Rotation::Daily => {
            dir.push(date.month().to_string());
            dir.push(date.day().to_string());
        }
    }
    dir
}

/// Full path of `file_name` inside the rotated directory for `date`
#[must_use]
pub fn rotated_path<D: Datelike>(base: &Path, rotation: Rotation, file_name: &str, date: &D) -> PathBuf {
    rotated_dir(base, rotation, date).join(file_name)
}

/// Reject names that would resolve outside the rotated directory
fn check_file_name(file_name: &str) -> Result<()> {
    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(LoggerError::config(
            "RotatingFileWriter",
            format!("'{}' is not a plain file name", file_name),
        )),
    }
}

/// Create `dir` and any missing parents; a no-op when it already exists
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| {
        LoggerError::io_operation(
            "creating log directory",
            format!("Failed to create directory '{}'", dir.display()),
            e,
        )
    })
}

/// Append `message` plus a line terminator, creating the file if absent
///
/// The line goes out in a single `write_all` so short lines from concurrent
/// writers rely on the platform's `O_APPEND` atomicity.
pub fn append_line(path: &Path, message: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            LoggerError::io_operation(
                "opening log file",
                format!("Failed to open '{}'", path.display()),
                e,
            )
        })?;

    let mut line = String::with_capacity(message.len() + 1);
    line.push_str(message);
    line.push('\n');

    file.write_all(line.as_bytes()).map_err(|e| {
        LoggerError::io_operation(
            "appending log line",
            format!("Failed to append to '{}'", path.display()),
            e,
        )
    })
}

/// Append `message` to `<level>.log` in today's rotated directory
pub fn write_rotated(base: &Path, rotation: Rotation, level: &str, message: &str) -> Result<PathBuf> {
    RotatingFileWriter::new(base, rotation).write(&format!("{}.log", level), message)
}

/// Writer bound to one logs directory and rotation granularity
///
/// Each write opens, appends and closes the target file, so no handle
/// outlives a rotation boundary.
///
/// # Examples
///
/// ```no_run
/// use level_logger_system::appenders::{RotatingFileWriter, Rotation};
///
/// let writer = RotatingFileWriter::new("logs", Rotation::Monthly);
/// let path = writer.write("audit.log", "12:00:00 - 2024/11/25 user created").unwrap();
/// assert!(path.ends_with("audit.log"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotatingFileWriter {
    base_dir: PathBuf,
    rotation: Rotation,
}

impl RotatingFileWriter {
    pub fn new(base_dir: impl Into<PathBuf>, rotation: Rotation) -> Self {
        Self {
            base_dir: base_dir.into(),
            rotation,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Write using the local calendar date
    pub fn write(&self, file_name: &str, message: &str) -> Result<PathBuf> {
        self.write_at(file_name, message, &Local::now())
    }

    /// Write into the directory for an explicit date
    ///
    /// `file_name` must be a single path component; anything else fails
    /// with [`LoggerError::InvalidConfiguration`] before touching the disk.
    pub fn write_at<D: Datelike>(&self, file_name: &str, message: &str, date: &D) -> Result<PathBuf> {
        check_file_name(file_name)?;
        let dir = rotated_dir(&self.base_dir, self.rotation, date);
        ensure_dir(&dir)?;

        let path = dir.join(file_name);
        append_line(&path, message)?;
        Ok(path)
    }
}
