//! Consistent date/time formatting for table cells.

use chrono::{DateTime, NaiveDate, Utc};

/// Format an ISO timestamp string as "DD.MM.YYYY HH:MM".
/// Values that do not parse are shown as-is.
pub fn format_timestamp(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(ts) => ts.format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Format an ISO date or timestamp string as "DD.MM.YYYY".
pub fn format_date(value: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return ts.format("%d.%m.%Y").to_string();
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Format a typed UTC timestamp the same way as [`format_timestamp`].
pub fn format_datetime_utc(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_format_as_day_first() {
        assert_eq!(
            format_timestamp("2025-03-15T14:02:26.123Z"),
            "15.03.2025 14:02"
        );
        assert_eq!(format_timestamp("2025-12-31T23:59:59Z"), "31.12.2025 23:59");
    }

    #[test]
    fn dates_accept_both_forms() {
        assert_eq!(format_date("2025-03-15"), "15.03.2025");
        assert_eq!(format_date("2025-03-15T14:02:26Z"), "15.03.2025");
    }

    #[test]
    fn unparseable_values_pass_through() {
        assert_eq!(format_timestamp("n/a"), "n/a");
        assert_eq!(format_date("n/a"), "n/a");
    }

    #[test]
    fn typed_timestamps_match_string_formatting() {
        let ts = Utc.with_ymd_and_hms(2025, 6, 1, 14, 25, 0).unwrap();
        assert_eq!(format_datetime_utc(&ts), "01.06.2025 14:25");
    }
}
