/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, NaiveDate, Utc};

/// Format a UTC timestamp as "YYYY-MM-DD"
/// Example: 2025-01-31T23:59:59Z -> "2025-01-31"
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Format a UTC timestamp as "YYYY-MM-DD HH:MM"
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Nullable timestamp for table cells
pub fn format_optional_datetime(value: Option<DateTime<Utc>>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "-".to_string())
}

/// Value of `<input type="date">`: "YYYY-MM-DD" or empty
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn date_input_value(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let value = Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap();
        assert_eq!(format_date(value), "2025-01-31");
        assert_eq!(format_datetime(value), "2025-01-31 23:59");
    }

    #[test]
    fn test_optional_datetime() {
        assert_eq!(format_optional_datetime(None), "-");
    }

    #[test]
    fn test_date_input_roundtrip() {
        let date = parse_date_input("2025-01-01");
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(date_input_value(date), "2025-01-01");
        assert_eq!(parse_date_input(""), None);
        assert_eq!(date_input_value(None), "");
    }
}
