//! Relative time labels for the prediction feed.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Parse a backend timestamp. The backend emits naive local ISO 8601
/// (`2024-05-01T10:30:00`, sometimes with fractional seconds); RFC 3339 with
/// an offset is accepted too.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Local.from_local_datetime(&naive).single();
        }
    }
    None
}

/// Human label for how long ago `then` was, relative to `now`.
///
/// Under a minute reads "Just now", under an hour minutes, under a day hours,
/// anything older falls back to the absolute date.
pub fn relative_from(now: DateTime<Local>, then: DateTime<Local>) -> String {
    let elapsed = now.signed_duration_since(then);
    let secs = elapsed.num_seconds().max(0);

    if secs < 60 {
        "Just now".to_string()
    } else if secs < 3600 {
        format!("{} min ago", secs / 60)
    } else if secs < 86_400 {
        let hours = secs / 3600;
        if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{hours} hours ago")
        }
    } else {
        then.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Relative label for a raw backend timestamp, against the current clock.
/// Unparseable input is shown as-is rather than dropped from the feed.
pub fn relative_label(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(then) => relative_from(Local::now(), then),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn base() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn under_a_minute_is_just_now() {
        let now = base();
        assert_eq!(relative_from(now, now), "Just now");
        assert_eq!(relative_from(now, now - Duration::seconds(59)), "Just now");
    }

    #[test]
    fn minutes_tier() {
        let now = base();
        assert_eq!(relative_from(now, now - Duration::seconds(60)), "1 min ago");
        assert_eq!(relative_from(now, now - Duration::minutes(45)), "45 min ago");
    }

    #[test]
    fn hours_tier_with_singular() {
        let now = base();
        assert_eq!(relative_from(now, now - Duration::hours(1)), "1 hour ago");
        assert_eq!(relative_from(now, now - Duration::hours(23)), "23 hours ago");
    }

    #[test]
    fn a_day_or_more_is_absolute() {
        let now = base();
        assert_eq!(
            relative_from(now, now - Duration::days(1)),
            "2024-04-30 12:00"
        );
    }

    #[test]
    fn future_timestamps_read_just_now() {
        // Clock skew between client and backend must not produce negatives.
        let now = base();
        assert_eq!(relative_from(now, now + Duration::minutes(5)), "Just now");
    }

    #[test]
    fn parses_backend_naive_iso() {
        let dt = parse_timestamp("2024-05-01T10:30:00").unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "10:30");
        assert!(parse_timestamp("2024-05-01T10:30:00.123456").is_some());
        assert!(parse_timestamp("not a time").is_none());
    }

    #[test]
    fn unparseable_label_passes_through() {
        assert_eq!(relative_label("pending"), "pending");
    }
}
