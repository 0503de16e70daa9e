//! Presentation helpers for history entries.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Default maximum length used by [`truncate_url`] callers.
pub const DEFAULT_MAX_LENGTH: usize = 50;

const ELLIPSIS: &str = "...";

/// Renders how long ago `created_at` was, relative to `now`.
///
/// | Elapsed | Output |
/// |---|---|
/// | < 1 minute | `Just now` |
/// | < 1 hour | `N minute(s) ago` |
/// | < 24 hours | `N hour(s) ago` |
/// | < 7 days | `N day(s) ago` |
/// | otherwise | absolute local date, e.g. `Jan 5, 2024, 03:07 PM` |
///
/// N is always rounded down. Timestamps in the future count as "Just now".
pub fn format_relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);

    if elapsed.num_hours() < 24 {
        if elapsed.num_hours() < 1 {
            let minutes = elapsed.num_minutes();
            return if minutes < 1 {
                "Just now".to_string()
            } else {
                plural(minutes, "minute")
            };
        }
        return plural(elapsed.num_hours(), "hour");
    }

    if elapsed.num_days() < 7 {
        return plural(elapsed.num_days(), "day");
    }

    format_absolute(&created_at.with_timezone(&Local))
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Formats a timestamp as `Mon D, YYYY, HH:MM AM`.
pub fn format_absolute<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Shortens `text` to at most `max_length` characters.
///
/// Text that already fits is returned unchanged. Otherwise the first
/// `max_length - 3` characters are kept and `...` is appended.
pub fn truncate_url(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let keep = max_length.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        format_relative_time(now() - d, now())
    }

    #[test]
    fn test_just_now() {
        assert_eq!(ago(Duration::zero()), "Just now");
        assert_eq!(ago(Duration::seconds(59)), "Just now");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(ago(Duration::seconds(90)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(2)), "2 minutes ago");
        assert_eq!(ago(Duration::seconds(59 * 60 + 59)), "59 minutes ago");
    }

    #[test]
    fn test_hours() {
        assert_eq!(ago(Duration::hours(1)), "1 hour ago");
        assert_eq!(ago(Duration::minutes(150)), "2 hours ago");
        assert_eq!(ago(Duration::hours(23)), "23 hours ago");
    }

    #[test]
    fn test_exactly_24_hours_is_a_day() {
        assert_eq!(ago(Duration::hours(24)), "1 day ago");
    }

    #[test]
    fn test_days() {
        assert_eq!(ago(Duration::days(3)), "3 days ago");
        assert_eq!(
            ago(Duration::days(6) + Duration::hours(23)),
            "6 days ago"
        );
    }

    #[test]
    fn test_exactly_7_days_is_absolute() {
        let created = now() - Duration::days(7);
        assert_eq!(
            format_relative_time(created, now()),
            format_absolute(&created.with_timezone(&Local))
        );
    }

    #[test]
    fn test_old_entries_use_absolute_date() {
        let created = now() - Duration::days(8);
        let rendered = format_relative_time(created, now());

        assert!(!rendered.ends_with("ago"));
        assert!(rendered.contains("2024"));
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        assert_eq!(ago(Duration::seconds(-30)), "Just now");
    }

    #[test]
    fn test_format_absolute() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 15, 7, 0).unwrap();
        assert_eq!(format_absolute(&at), "Jan 5, 2024, 03:07 PM");

        let morning = Utc.with_ymd_and_hms(2023, 11, 28, 9, 30, 0).unwrap();
        assert_eq!(format_absolute(&morning), "Nov 28, 2023, 09:30 AM");
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_url("https://example.com", 50), "https://example.com");

        let exact = "a".repeat(50);
        assert_eq!(truncate_url(&exact, 50), exact);
    }

    #[test]
    fn test_truncate_long_text() {
        let long = format!("https://example.com/{}", "x".repeat(100));
        let out = truncate_url(&long, DEFAULT_MAX_LENGTH);

        assert_eq!(out.chars().count(), 50);
        assert!(out.ends_with("..."));
        assert_eq!(&out[..47], &long[..47]);
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "ü".repeat(20);
        let out = truncate_url(&text, 10);

        assert_eq!(out, format!("{}...", "ü".repeat(7)));
    }

    #[test]
    fn test_truncate_tiny_limit() {
        assert_eq!(truncate_url("abcdef", 2), "...");
    }
}
