use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::constants::SECONDS_PER_DAY;

/// Returns the current evaluation instant (UTC wall clock, naive).
///
/// Callers that need determinism pass an explicit instant instead; this is
/// only the default for the `_now` convenience wrappers.
pub fn evaluation_instant_now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Adds whole calendar years to a date.
///
/// Feb 29 with a non-leap target year spills over to Mar 1, matching how the
/// register has always normalized anniversary dates.
pub fn add_calendar_years(date: NaiveDate, years: i32) -> NaiveDate {
    let target_year = date.year() + years;
    date.with_year(target_year).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(target_year, 3, 1).expect("Mar 1 exists in every year")
    })
}

/// Signed whole-day count from `from` until midnight at the start of `target`.
///
/// Uses ceiling division so a deadline later today reads 0 and a deadline
/// missed earlier today reads 0 as well; the count only goes negative once a
/// full day has been missed.
pub fn days_until(from: NaiveDateTime, target: NaiveDate) -> i64 {
    let secs = (target.and_time(NaiveTime::MIN) - from).num_seconds();
    ceil_div_days(secs)
}

fn ceil_div_days(secs: i64) -> i64 {
    let days = secs.div_euclid(SECONDS_PER_DAY);
    if secs.rem_euclid(SECONDS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}

/// Parses a calendar date from the formats the backend emits: plain
/// `YYYY-MM-DD` or an RFC 3339 timestamp (`2024-06-01T00:00:00.000Z`).
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.date_naive());
    }
    None
}
