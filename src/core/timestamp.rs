//! Timestamp formatting utilities
//!
//! Every log line shares one fixed-width, zero-padded timestamp layout:
//! `HH:MM:SS - YYYY/MM/DD`. The console prints it only when the level asks
//! for it; the file sink always prefixes it.

use super::error::{LoggerError, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone};
use std::fmt;

/// strftime layout behind [`format_timestamp`]
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S - %Y/%m/%d";

/// Format an instant using its own calendar fields (hours 0-23)
///
/// The logger passes `Local::now()`, so output reflects the local wall clock.
///
/// # Examples
///
/// ```
/// use level_logger_system::core::format_timestamp;
/// use chrono::{TimeZone, Utc};
///
/// let instant = Utc.with_ymd_and_hms(2024, 2, 9, 7, 9, 30).unwrap();
/// assert_eq!(format_timestamp(&instant), "07:09:30 - 2024/02/09");
/// ```
#[must_use]
pub fn format_timestamp<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a string produced by [`format_timestamp`] back into its calendar fields
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|e| {
        LoggerError::formatter("timestamp", format!("cannot parse '{}': {}", value, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Local, Timelike, Utc};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_full_timestamp() {
        assert_eq!(format_timestamp(&at(2024, 11, 25, 15, 4, 5)), "15:04:05 - 2024/11/25");
    }

    #[test]
    fn test_single_digit_fields_are_padded() {
        assert_eq!(format_timestamp(&at(2024, 1, 2, 3, 4, 5)), "03:04:05 - 2024/01/02");
        assert_eq!(format_timestamp(&at(2024, 2, 9, 0, 9, 30)), "00:09:30 - 2024/02/09");
    }

    #[test]
    fn test_end_of_year() {
        assert_eq!(format_timestamp(&at(2023, 12, 31, 23, 59, 59)), "23:59:59 - 2023/12/31");
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(format_timestamp(&at(2024, 2, 29, 12, 0, 0)), "12:00:00 - 2024/02/29");
    }

    #[test]
    fn test_small_year_is_four_digits() {
        assert_eq!(format_timestamp(&at(987, 6, 5, 4, 3, 2)), "04:03:02 - 0987/06/05");
    }

    #[test]
    fn test_local_time_uses_local_fields() {
        let now = Local::now();
        let formatted = format_timestamp(&now);
        let parsed = parse_timestamp(&formatted).expect("parse local timestamp");

        assert_eq!(parsed.hour(), now.hour());
        assert_eq!(parsed.day(), now.day());
        assert_eq!(formatted.len(), "HH:MM:SS - YYYY/MM/DD".len());
    }

    #[test]
    fn test_parse_roundtrip() {
        let parsed = parse_timestamp("12:34:56 - 2024/11/25").expect("parse");
        assert_eq!(parsed, at(2024, 11, 25, 12, 34, 56).naive_utc());
    }

    #[test]
    fn test_parse_rejects_other_layouts() {
        let err = parse_timestamp("2024-11-25T12:34:56Z").unwrap_err();
        assert!(matches!(err, LoggerError::FormatterError { .. }));
    }
}
