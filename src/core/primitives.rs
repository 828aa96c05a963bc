use chrono::{DateTime, Datelike, NaiveDate, NaiveTime};

/// Converts a calendar date to seconds since the Unix epoch at UTC midnight.
#[must_use]
pub fn date_to_unix_seconds(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
}

/// Converts a logical time back to the calendar date that contains it.
///
/// Returns `None` for non-finite or out-of-range input.
#[must_use]
pub fn unix_seconds_to_date(seconds: f64) -> Option<NaiveDate> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp(seconds.floor() as i64, 0).map(|time| time.date_naive())
}

/// Absolute month counter (`year * 12 + month0`) used for month tick cadence.
#[must_use]
pub fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// First day of the month addressed by an absolute month counter.
#[must_use]
pub fn month_start(month_index: i64) -> Option<NaiveDate> {
    let year = i32::try_from(month_index.div_euclid(12)).ok()?;
    let month0 = u32::try_from(month_index.rem_euclid(12)).ok()?;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
}
