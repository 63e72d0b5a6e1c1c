//! Time helpers - budget windows and report months in UTC
//!
//! All date→timestamp conversion happens here; the repository and
//! evaluator layers only see `i64` Unix millis.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::utils::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {date}")))
}

/// Start of a date (00:00:00 UTC) → Unix millis
pub fn day_start_millis(date: NaiveDate) -> i64 {
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
        .timestamp_millis()
}

/// End of a date → next day's 00:00:00 UTC Unix millis.
///
/// Callers use `< end` (exclusive) semantics, which makes the date
/// itself fully inclusive.
pub fn day_end_millis(date: NaiveDate) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    day_start_millis(next_day)
}

/// Inclusive calendar window → half-open `[start, end)` millis pair
pub fn window_millis(start_date: NaiveDate, end_date: NaiveDate) -> (i64, i64) {
    (day_start_millis(start_date), day_end_millis(end_date))
}

/// Calendar month → half-open `[start, end)` millis pair
pub fn month_millis(month: u32, year: i32) -> AppResult<(i64, i64)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::validation(format!("Invalid month {month}/{year}")))?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| AppError::validation(format!("Invalid month {month}/{year}")))?;
    Ok((day_start_millis(start), day_start_millis(end)))
}

/// Whether a timestamp falls inside a half-open `[start, end)` window
pub fn in_window(ts_millis: i64, start: i64, end: i64) -> bool {
    ts_millis >= start && ts_millis < end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_window_includes_whole_end_day() {
        let (start, end) = window_millis(date("2024-01-01"), date("2024-01-31"));
        // 2024-01-31 23:59:59 UTC
        let late_on_last_day = Utc
            .with_ymd_and_hms(2024, 1, 31, 23, 59, 59)
            .unwrap()
            .timestamp_millis();
        assert!(in_window(late_on_last_day, start, end));
        // 2024-02-01 00:00:00 UTC is out
        let next_month = Utc
            .with_ymd_and_hms(2024, 2, 1, 0, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert!(!in_window(next_month, start, end));
    }

    #[test]
    fn test_month_millis_december_rollover() {
        let (start, end) = month_millis(12, 2024).unwrap();
        let new_year = Utc
            .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(end, new_year);
        assert!(start < end);
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(month_millis(13, 2024).is_err());
        assert!(month_millis(0, 2024).is_err());
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-01-31").is_ok());
        assert!(parse_date("31/01/2024").is_err());
    }
}
