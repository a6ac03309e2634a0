//! Property-based tests for level_logger_system using proptest

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc};
use level_logger_system::appenders::{rotated_path, Rotation};
use level_logger_system::prelude::*;
use level_logger_system::parse_timestamp;
use proptest::prelude::*;
use std::path::Path;

fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    // 0001-01-01 .. 9999-12-31, four-digit years only
    (-62_135_596_800i64..253_402_300_799i64)
        .prop_map(|secs| Utc.timestamp_opt(secs, 0).single().expect("in range"))
}

fn any_rotation() -> impl Strategy<Value = Rotation> {
    prop_oneof![
        Just(Rotation::Daily),
        Just(Rotation::Monthly),
        Just(Rotation::Yearly),
    ]
}

// ============================================================================
// Timestamp Tests
// ============================================================================

proptest! {
    /// Output is always `HH:MM:SS - YYYY/MM/DD` with fixed widths
    #[test]
    fn test_timestamp_shape(at in instant()) {
        let formatted = format_timestamp(&at);
        let bytes = formatted.as_bytes();

        prop_assert_eq!(bytes.len(), 21);
        for (i, b) in bytes.iter().enumerate() {
            match i {
                2 | 5 => prop_assert_eq!(*b, b':'),
                8 | 10 => prop_assert_eq!(*b, b' '),
                9 => prop_assert_eq!(*b, b'-'),
                15 | 18 => prop_assert_eq!(*b, b'/'),
                _ => prop_assert!(b.is_ascii_digit(), "non-digit in {:?}", formatted),
            }
        }
    }

    /// Parsing the output gives back the calendar fields that produced it
    #[test]
    fn test_timestamp_roundtrip(at in instant()) {
        let parsed = parse_timestamp(&format_timestamp(&at)).unwrap();

        prop_assert_eq!(parsed.year(), at.year());
        prop_assert_eq!(parsed.month(), at.month());
        prop_assert_eq!(parsed.day(), at.day());
        prop_assert_eq!(parsed.hour(), at.hour());
        prop_assert_eq!(parsed.minute(), at.minute());
        prop_assert_eq!(parsed.second(), at.second());
    }
}

// ============================================================================
// Rotation Path Tests
// ============================================================================

proptest! {
    /// Path components stop at the rotation boundary and are unpadded
    #[test]
    fn test_rotated_path_components(
        rotation in any_rotation(),
        year in 1000i32..9999,
        month in 1u32..=12,
        day in 1u32..=28,
        level in "[a-z]{1,12}",
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let file_name = format!("{}.log", level);
        let path = rotated_path(Path::new("/base"), rotation, &file_name, &date);

        let mut expected = vec!["/".to_string(), "base".to_string(), year.to_string()];
        if rotation != Rotation::Yearly {
            expected.push(month.to_string());
        }
        if rotation == Rotation::Daily {
            expected.push(day.to_string());
        }
        expected.push(file_name);

        let actual: Vec<String> = path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        prop_assert_eq!(actual, expected);
    }
}

// ============================================================================
// Log Store Tests
// ============================================================================

proptest! {
    /// `since` keeps exactly the records at or after the bound, in order
    #[test]
    fn test_since_is_inclusive(
        offsets in proptest::collection::vec(-5i64..5, 0..30),
        bound in -5i64..5,
    ) {
        let origin = Utc::now();
        let store = LogStore::new();
        for (i, offset) in offsets.iter().enumerate() {
            store.add_record(
                LogRecord::new("info", i.to_string())
                    .with_timestamp(origin + Duration::seconds(*offset)),
            );
        }

        let since = origin + Duration::seconds(bound);
        let got: Vec<String> = store
            .query(&LogQuery::new().since(since))
            .into_iter()
            .map(|r| r.message)
            .collect();
        let expected: Vec<String> = offsets
            .iter()
            .enumerate()
            .filter(|(_, offset)| **offset >= bound)
            .map(|(i, _)| i.to_string())
            .collect();

        prop_assert_eq!(got, expected);
    }

    /// Level filter is exact and preserves insertion order
    #[test]
    fn test_level_filter(levels in proptest::collection::vec(prop_oneof![Just("info"), Just("warn"), Just("error")], 0..30)) {
        let store = LogStore::new();
        for (i, level) in levels.iter().enumerate() {
            store.add_log(*level, i.to_string());
        }

        prop_assert_eq!(store.query(&LogQuery::new()).len(), levels.len());

        let warn: Vec<String> = store
            .query(&LogQuery::new().level("warn"))
            .into_iter()
            .map(|r| r.message)
            .collect();
        let expected: Vec<String> = levels
            .iter()
            .enumerate()
            .filter(|(_, level)| **level == "warn")
            .map(|(i, _)| i.to_string())
            .collect();
        prop_assert_eq!(warn, expected);
    }

    /// A record matches when the filter is a subset of its context
    #[test]
    fn test_context_subset_match(
        user in "[A-C]",
        extra in proptest::option::of("[a-z]{1,4}"),
        wanted in "[A-C]",
    ) {
        let mut context = LogContext::new().with_field("user", user.as_str());
        if let Some(ref extra) = extra {
            context.add_field("session", extra.as_str());
        }

        let store = LogStore::new();
        store.add_log_with_context("info", "with context", context);
        store.add_log("info", "without context");

        let hits = store.query(&LogQuery::new().context(LogContext::new().with_field("user", wanted.as_str())));
        if user == wanted {
            prop_assert_eq!(hits.len(), 1);
            prop_assert_eq!(hits[0].message.as_str(), "with context");
        } else {
            prop_assert!(hits.is_empty());
        }
    }
}

// ============================================================================
// Level Registry Tests
// ============================================================================

proptest! {
    /// A rejected registration leaves names and policy untouched
    #[test]
    fn test_duplicate_registration_is_noop(name in "[a-z]{1,10}", first_to_file in any::<bool>()) {
        let logger = Logger::new();
        let registered = logger.add_log_level(
            name.clone(),
            LevelPolicy::new(ConsoleStyle::Green).with_log_to_file(first_to_file),
        );
        let names_before = logger.level_names();
        let policy_before = format!("{:?}", logger.level_policy(&name));

        if registered.is_ok() {
            let second = logger.add_log_level(name.clone(), LevelPolicy::new(ConsoleStyle::Red));
            prop_assert!(second.unwrap_err().is_duplicate_level());
        } else {
            prop_assert!(level_logger_system::BUILTIN_LEVELS.contains(&name.as_str()));
        }

        prop_assert_eq!(logger.level_names(), names_before);
        prop_assert_eq!(format!("{:?}", logger.level_policy(&name)), policy_before);
    }

    /// Unregistered names always fail with UndefinedLevel
    #[test]
    fn test_unregistered_level_fails(name in "[a-z]{1,10}-x") {
        let logger = Logger::builder().logs_dir("/nonexistent/never/created").build();
        prop_assert!(logger.log(&name, "message").unwrap_err().is_undefined_level());
    }
}
