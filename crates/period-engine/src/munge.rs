//! Field substitution and day-boundary normalization for timestamps.
//!
//! Every reporting boundary in this crate is built from two primitives: a
//! timestamp pinned to the first second of its day, and one pinned to the
//! last second. The `make_*` functions additionally let the caller override
//! any of year/month/day on a base timestamp first.
//!
//! There is no implicit "now": the base timestamp is always an argument.
//! Callers that want the current moment resolve it once with
//! [`crate::anchor::local_anchor`] and pass it down.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{PeriodError, Result};

const SECONDS_PER_DAY: i64 = 86_400;

/// Optional calendar-field overrides applied on top of a base timestamp.
///
/// Any field left as `None` keeps the base timestamp's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFields {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl DateFields {
    /// No overrides: the base timestamp's date is used as-is.
    pub fn none() -> Self {
        Self::default()
    }

    /// Override all three fields.
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }
}

/// 00:00:00 of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 23:59:59 of `date`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + chrono::Duration::seconds(SECONDS_PER_DAY - 1)
}

/// Substitute the given calendar fields into `base` and drop sub-second precision.
///
/// The three fields are applied together, so a combination that is only
/// valid as a whole (e.g. moving Jan 31 to Feb 28) succeeds even though
/// changing the month alone would not.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidDate`] if the resulting year/month/day does
/// not exist in the calendar (e.g. February 30).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use period_engine::munge::{munge_date, DateFields};
///
/// let base = NaiveDate::from_ymd_opt(2023, 3, 15)
///     .unwrap()
///     .and_hms_milli_opt(10, 20, 30, 450)
///     .unwrap();
/// let munged = munge_date(DateFields::none().day(1), base).unwrap();
/// assert_eq!(munged.to_string(), "2023-03-01 10:20:30");
/// ```
pub fn munge_date(fields: DateFields, base: NaiveDateTime) -> Result<NaiveDateTime> {
    let year = fields.year.unwrap_or(base.year());
    let month = fields.month.unwrap_or(base.month());
    let day = fields.day.unwrap_or(base.day());

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        PeriodError::InvalidDate(format!(
            "{year:04}-{month:02}-{day:02} does not exist"
        ))
    })?;

    date.and_hms_opt(base.hour(), base.minute(), base.second())
        .ok_or_else(|| PeriodError::InvalidDate(format!("invalid time of day in '{base}'")))
}

/// [`munge_date`], then pin the time to 00:00:00.
///
/// # Errors
///
/// Same as [`munge_date`].
pub fn make_start_date(fields: DateFields, base: NaiveDateTime) -> Result<NaiveDateTime> {
    munge_date(fields, base).map(|dt| start_of_day(dt.date()))
}

/// [`munge_date`], then pin the time to 23:59:59.
///
/// # Errors
///
/// Same as [`munge_date`].
pub fn make_end_date(fields: DateFields, base: NaiveDateTime) -> Result<NaiveDateTime> {
    munge_date(fields, base).map(|dt| end_of_day(dt.date()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> NaiveDateTime {
        // Wednesday, March 15, 2023, 14:30:45.123
        NaiveDate::from_ymd_opt(2023, 3, 15)
            .unwrap()
            .and_hms_milli_opt(14, 30, 45, 123)
            .unwrap()
    }

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    // ── munge_date tests ────────────────────────────────────────────────

    #[test]
    fn test_munge_no_overrides_drops_subseconds() {
        let result = munge_date(DateFields::none(), base()).unwrap();
        assert_eq!(result, dt(2023, 3, 15, 14, 30, 45));
        assert_eq!(result.nanosecond(), 0);
    }

    #[test]
    fn test_munge_overrides_each_field() {
        assert_eq!(
            munge_date(DateFields::none().year(2020), base()).unwrap(),
            dt(2020, 3, 15, 14, 30, 45)
        );
        assert_eq!(
            munge_date(DateFields::none().month(7), base()).unwrap(),
            dt(2023, 7, 15, 14, 30, 45)
        );
        assert_eq!(
            munge_date(DateFields::none().day(2), base()).unwrap(),
            dt(2023, 3, 2, 14, 30, 45)
        );
    }

    #[test]
    fn test_munge_applies_fields_together() {
        // Jan 31 → Feb 28: month alone would produce Feb 31
        let jan31 = dt(2023, 1, 31, 8, 0, 0);
        let result = munge_date(DateFields::none().month(2).day(28), jan31).unwrap();
        assert_eq!(result, dt(2023, 2, 28, 8, 0, 0));
    }

    #[test]
    fn test_munge_invalid_date_returns_error() {
        let result = munge_date(DateFields::ymd(2023, 2, 30), base());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid date"), "got: {err}");
        assert!(err.contains("2023-02-30"), "got: {err}");
    }

    #[test]
    fn test_munge_leap_day_only_in_leap_years() {
        assert!(munge_date(DateFields::ymd(2024, 2, 29), base()).is_ok());
        assert!(munge_date(DateFields::ymd(2023, 2, 29), base()).is_err());
    }

    // ── make_start_date / make_end_date tests ───────────────────────────

    #[test]
    fn test_make_start_date_midnight() {
        let result = make_start_date(DateFields::none(), base()).unwrap();
        assert_eq!(result, dt(2023, 3, 15, 0, 0, 0));
    }

    #[test]
    fn test_make_end_date_last_second() {
        let result = make_end_date(DateFields::none(), base()).unwrap();
        assert_eq!(result, dt(2023, 3, 15, 23, 59, 59));
    }

    #[test]
    fn test_make_start_date_with_overrides() {
        let result = make_start_date(DateFields::ymd(2022, 12, 25), base()).unwrap();
        assert_eq!(result, dt(2022, 12, 25, 0, 0, 0));
    }

    #[test]
    fn test_make_end_date_invalid_override() {
        assert!(make_end_date(DateFields::none().month(4).day(31), base()).is_err());
    }

    #[test]
    fn test_end_of_day_is_one_second_before_next_midnight() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let next = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            start_of_day(next) - end_of_day(date),
            chrono::Duration::seconds(1)
        );
    }
}
