//! Utilities for date and time formatting
//!
//! Transcript entries carry UTC timestamps and are shown in browser local time.
use chrono::{DateTime, Local, TimeZone, Utc};

/// Format a timestamp as HH:MM in its own timezone
/// Example: 2024-03-15T14:02:26Z -> "14:02"
pub fn format_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%H:%M").to_string()
}

/// Format a UTC timestamp as HH:MM local time
pub fn format_local_time(dt: &DateTime<Utc>) -> String {
    format_time(&dt.with_timezone(&Local))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_time() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_time(&dt), "14:02");
    }

    #[test]
    fn test_format_time_keeps_offset() {
        let moscow = FixedOffset::east_opt(3 * 3600).unwrap();
        let dt = Utc
            .with_ymd_and_hms(2024, 12, 31, 23, 59, 0)
            .unwrap()
            .with_timezone(&moscow);
        assert_eq!(format_time(&dt), "02:59");
    }
}
