//! Display helpers shared by every view.

use chrono::{DateTime, Utc};
use ugdash_types::Timestamp;

/// Placeholder for any absent field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Returns the value, or `N/A` when it is missing or blank.
pub fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

/// How much of a timestamp to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Oct 19, 2026`
    Date,
    /// `October 19, 2026 at 09:30 AM`
    DateTime,
    /// `Oct 19, 2026, 09:30 AM`
    ShortDateTime,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Date => "%b %-d, %Y",
            DateStyle::DateTime => "%B %-d, %Y at %I:%M %p",
            DateStyle::ShortDateTime => "%b %-d, %Y, %I:%M %p",
        }
    }
}

/// Converts a backend timestamp to UTC. Unset or out-of-range values are `None`.
pub fn to_datetime(timestamp: &Timestamp) -> Option<DateTime<Utc>> {
    if !timestamp.is_set() {
        return None;
    }
    DateTime::from_timestamp(timestamp.seconds, timestamp.nanoseconds)
}

/// Formats a timestamp in UTC, or `N/A` when it is missing.
pub fn format_timestamp(timestamp: Option<&Timestamp>, style: DateStyle) -> String {
    timestamp
        .and_then(to_datetime)
        .map_or_else(
            || NOT_AVAILABLE.to_string(),
            |dt| dt.format(style.pattern()).to_string(),
        )
}

/// `call_student` → `Call Student`.
pub fn title_case_tag(tag: &str) -> String {
    tag.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2026-10-19T09:30:00Z
    const SAMPLE: i64 = 1_792_402_200;

    #[test]
    fn test_or_na() {
        assert_eq!(or_na(Some("+55 11 99999")), "+55 11 99999");
        assert_eq!(or_na(Some("  ")), "N/A");
        assert_eq!(or_na(None), "N/A");
    }

    #[test]
    fn test_format_styles() {
        let ts = Timestamp::from_seconds(SAMPLE);
        assert_eq!(format_timestamp(Some(&ts), DateStyle::Date), "Oct 19, 2026");
        assert_eq!(
            format_timestamp(Some(&ts), DateStyle::DateTime),
            "October 19, 2026 at 09:30 AM"
        );
        assert_eq!(
            format_timestamp(Some(&ts), DateStyle::ShortDateTime),
            "Oct 19, 2026, 09:30 AM"
        );
    }

    #[test]
    fn test_missing_or_zero_timestamp_is_na() {
        assert_eq!(format_timestamp(None, DateStyle::Date), "N/A");
        assert_eq!(
            format_timestamp(Some(&Timestamp::from_seconds(0)), DateStyle::Date),
            "N/A"
        );
    }

    #[test]
    fn test_title_case_tag() {
        assert_eq!(title_case_tag("call_student"), "Call Student");
        assert_eq!(title_case_tag("FOLLOW_UP_check"), "Follow Up Check");
        assert_eq!(title_case_tag("single"), "Single");
    }
}
