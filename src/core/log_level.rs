//! Log level definitions
//!
//! Levels are not a closed enum: each one is a named [`LevelPolicy`] held by
//! the logger's registry. The four built-ins are ordinary pre-seeded entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Callback invoked with the console-style line on every log call at a level
pub type TriggerCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Names of the levels every logger starts with
pub const BUILTIN_LEVELS: [&str; 4] = ["info", "warn", "error", "verbose"];

/// Style applied to the level name on the console
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsoleStyle {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    #[default]
    White,
    Gray,
    RedBright,
    GreenBright,
    YellowBright,
    BlueBright,
    MagentaBright,
    CyanBright,
    WhiteBright,
}

impl ConsoleStyle {
    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            ConsoleStyle::Black => Black,
            ConsoleStyle::Red => Red,
            ConsoleStyle::Green => Green,
            ConsoleStyle::Yellow => Yellow,
            ConsoleStyle::Blue => Blue,
            ConsoleStyle::Magenta => Magenta,
            ConsoleStyle::Cyan => Cyan,
            ConsoleStyle::White => White,
            ConsoleStyle::Gray => BrightBlack,
            ConsoleStyle::RedBright => BrightRed,
            ConsoleStyle::GreenBright => BrightGreen,
            ConsoleStyle::YellowBright => BrightYellow,
            ConsoleStyle::BlueBright => BrightBlue,
            ConsoleStyle::MagentaBright => BrightMagenta,
            ConsoleStyle::CyanBright => BrightCyan,
            ConsoleStyle::WhiteBright => BrightWhite,
        }
    }
}

/// How a named level is rendered and routed
///
/// # Example
///
/// ```
/// use level_logger_system::core::{ConsoleStyle, LevelPolicy};
///
/// let policy = LevelPolicy::new(ConsoleStyle::Green)
///     .with_timestamp_in_console(true)
///     .with_log_to_file(true)
///     .with_log_file_name("custom.log");
/// assert_eq!(policy.log_file_name.as_deref(), Some("custom.log"));
/// ```
#[derive(Clone, Default)]
pub struct LevelPolicy {
    pub style: ConsoleStyle,
    pub include_timestamp_in_console: bool,
    /// Whether calls at this level reach the file sink unless overridden
    pub log_to_file: bool,
    /// Descriptive file name kept with the policy; the file sink always
    /// writes `<level>.log` inside the rotated directory
    pub log_file_name: Option<String>,
    pub on_trigger: Option<TriggerCallback>,
}

impl LevelPolicy {
    #[must_use]
    pub fn new(style: ConsoleStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_timestamp_in_console(mut self, include: bool) -> Self {
        self.include_timestamp_in_console = include;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_log_to_file(mut self, enabled: bool) -> Self {
        self.log_to_file = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_log_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.log_file_name = Some(file_name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn on_trigger(mut self, callback: TriggerCallback) -> Self {
        self.on_trigger = Some(callback);
        self
    }

    /// Policy seeded for one of [`BUILTIN_LEVELS`]
    pub(crate) fn builtin(name: &str, style: ConsoleStyle) -> Self {
        Self::new(style)
            .with_log_to_file(true)
            .with_log_file_name(format!("{}.log", name))
    }

    /// Apply a per-call override field by field
    pub(crate) fn resolve(&self, overrides: &LogOptions) -> EffectiveOptions {
        EffectiveOptions {
            style: overrides.style.unwrap_or(self.style),
            include_timestamp_in_console: overrides
                .include_timestamp_in_console
                .unwrap_or(self.include_timestamp_in_console),
            log_to_file: overrides.log_to_file.unwrap_or(self.log_to_file),
        }
    }
}

impl fmt::Debug for LevelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelPolicy")
            .field("style", &self.style)
            .field("include_timestamp_in_console", &self.include_timestamp_in_console)
            .field("log_to_file", &self.log_to_file)
            .field("log_file_name", &self.log_file_name)
            .field("on_trigger", &self.on_trigger.is_some())
            .finish()
    }
}

pub(crate) fn builtin_policies() -> Vec<(&'static str, LevelPolicy)> {
    vec![
        ("info", LevelPolicy::builtin("info", ConsoleStyle::Blue)),
        ("warn", LevelPolicy::builtin("warn", ConsoleStyle::YellowBright)),
        ("error", LevelPolicy::builtin("error", ConsoleStyle::RedBright)),
        ("verbose", LevelPolicy::builtin("verbose", ConsoleStyle::Gray)),
    ]
}

/// Per-call overrides; every field left as `None` falls back to the level policy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    pub style: Option<ConsoleStyle>,
    pub include_timestamp_in_console: Option<bool>,
    pub log_to_file: Option<bool>,
}

impl LogOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn style(mut self, style: ConsoleStyle) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn include_timestamp_in_console(mut self, include: bool) -> Self {
        self.include_timestamp_in_console = Some(include);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_to_file(mut self, enabled: bool) -> Self {
        self.log_to_file = Some(enabled);
        self
    }
}

/// Policy after overrides are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EffectiveOptions {
    pub style: ConsoleStyle,
    pub include_timestamp_in_console: bool,
    pub log_to_file: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_serde_uses_names() {
        let json = serde_json::to_string(&ConsoleStyle::RedBright).unwrap();
        assert_eq!(json, "\"redBright\"");
    }

    #[test]
    fn test_builtin_policies() {
        let builtins = builtin_policies();
        let names: Vec<_> = builtins.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, BUILTIN_LEVELS);

        for (name, policy) in builtins {
            assert!(policy.log_to_file);
            assert!(!policy.include_timestamp_in_console);
            assert_eq!(policy.log_file_name, Some(format!("{}.log", name)));
        }
    }

    #[test]
    fn test_resolve_without_overrides() {
        let policy = LevelPolicy::new(ConsoleStyle::Green).with_log_to_file(true);
        let effective = policy.resolve(&LogOptions::new());

        assert_eq!(effective.style, ConsoleStyle::Green);
        assert!(effective.log_to_file);
        assert!(!effective.include_timestamp_in_console);
    }

    #[test]
    fn test_resolve_overrides_field_by_field() {
        let policy = LevelPolicy::new(ConsoleStyle::Green)
            .with_log_to_file(true)
            .with_log_file_name("custom.log");
        let overrides = LogOptions::new()
            .log_to_file(false)
            .include_timestamp_in_console(true);
        let effective = policy.resolve(&overrides);

        assert_eq!(effective.style, ConsoleStyle::Green);
        assert!(!effective.log_to_file);
        assert!(effective.include_timestamp_in_console);
    }

    #[test]
    fn test_debug_hides_callback() {
        let policy = LevelPolicy::new(ConsoleStyle::Cyan).on_trigger(Arc::new(|_| {}));
        let rendered = format!("{:?}", policy);
        assert!(rendered.contains("on_trigger: true"));
    }
}
