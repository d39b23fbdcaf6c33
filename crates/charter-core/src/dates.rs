//! ISO 8601 date parsing and locale-independent calendar labels.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Weekday};

use crate::error::{CoreError, CoreResult};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Three-letter month labels, January first.
pub const CALENDAR_MONTH_ORDER: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Parses an ISO 8601 calendar date.
///
/// Accepts a plain `YYYY-MM-DD` date, a local date-time (time discarded) or an RFC 3339
/// timestamp, which is first shifted into the local zone so every date lands on the same
/// reference calendar.
pub fn parse_iso_date(raw: &str) -> CoreResult<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(invalid_date(raw, "date is empty"));
    }

    let date_err = match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => return Ok(date),
        Err(err) => err,
    };

    for format in DATE_TIME_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(stamp.date());
        }
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(stamp.with_timezone(&Local).date_naive());
    }

    Err(invalid_date(raw, &date_err.to_string()))
}

fn invalid_date(raw: &str, reason: &str) -> CoreError {
    CoreError::InvalidDate {
        value: raw.to_string(),
        reason: reason.to_string(),
    }
}

/// Short English month name for `date`, e.g. `"Jan"`.
pub fn month_label(date: NaiveDate) -> &'static str {
    CALENDAR_MONTH_ORDER[date.month0() as usize]
}

/// Short English weekday name, e.g. `"Mon"`.
pub fn weekday_label(day: Weekday) -> &'static str {
    WEEKDAY_LABELS[day.num_days_from_monday() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_plain_dates() {
        assert_eq!(parse_iso_date("2025-01-02").unwrap(), ymd(2025, 1, 2));
        assert_eq!(parse_iso_date(" 2024-12-30 ").unwrap(), ymd(2024, 12, 30));
    }

    #[test]
    fn local_date_times_keep_their_calendar_day() {
        assert_eq!(parse_iso_date("2025-01-05T23:30:00").unwrap(), ymd(2025, 1, 5));
        assert_eq!(parse_iso_date("2025-01-05T00:00").unwrap(), ymd(2025, 1, 5));
    }

    #[test]
    fn rejects_impossible_and_malformed_dates() {
        for raw in ["2025-02-30", "2025-13-01", "not a date", "", "01/02/2025"] {
            let err = parse_iso_date(raw).unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidDate { ref value, .. } if value == raw),
                "{raw} should fail with InvalidDate, got {err:?}"
            );
        }
    }

    #[test]
    fn labels_are_locale_independent() {
        assert_eq!(month_label(ymd(2025, 1, 31)), "Jan");
        assert_eq!(month_label(ymd(2024, 12, 1)), "Dec");
        assert_eq!(weekday_label(Weekday::Mon), "Mon");
        assert_eq!(weekday_label(Weekday::Sun), "Sun");
    }
}
