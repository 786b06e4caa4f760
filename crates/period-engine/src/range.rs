//! Reporting-period boundaries: the day, week, or month containing a date.
//!
//! Every range is a closed [`DateRange`] whose `start` is 00:00:00 of its
//! first day and whose `end` is 23:59:59 of its last day. Only the
//! year/month/day of the reference timestamp participate; its time of day
//! is discarded.
//!
//! # Functions
//!
//! - [`day_range`] — The calendar day containing a timestamp
//! - [`week_range`] — The Sunday-to-Saturday week containing a timestamp
//! - [`week_range_with_options`] — Same, with a configurable week start
//! - [`month_range`] — The calendar month containing a timestamp
//! - [`month_ranges`] — N consecutive months ending with the month of a timestamp

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{PeriodError, Result};
use crate::munge::{end_of_day, start_of_day};

// ── Configurable week start ─────────────────────────────────────────────────

/// Which day begins a week for [`week_range_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStartDay {
    /// US reporting convention (Sunday through Saturday).
    #[default]
    Sunday,
    /// ISO 8601 (Monday through Sunday).
    Monday,
}

/// Options for [`week_range_with_options`].
#[derive(Debug, Clone, Default)]
pub struct RangeOptions {
    /// Which day starts the week.
    pub week_start: WeekStartDay,
}

/// How many days `weekday` is from the week-start day.
fn days_from_week_start(weekday: Weekday, week_start: WeekStartDay) -> i64 {
    match week_start {
        WeekStartDay::Monday => weekday.num_days_from_monday() as i64,
        WeekStartDay::Sunday => weekday.num_days_from_sunday() as i64,
    }
}

// ── DateRange ───────────────────────────────────────────────────────────────

/// A closed reporting period, `start` at 00:00:00 and `end` at 23:59:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Range covering the calendar days `first..=last`.
    ///
    /// The caller guarantees `first <= last`.
    fn from_days(first: NaiveDate, last: NaiveDate) -> Self {
        debug_assert!(first <= last);
        Self {
            start: start_of_day(first),
            end: end_of_day(last),
        }
    }

    /// Whether `ts` falls inside the range (both ends inclusive).
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start <= ts && ts <= self.end
    }

    /// Number of calendar days covered.
    pub fn num_days(&self) -> i64 {
        (self.end.date() - self.start.date()).num_days() + 1
    }
}

// ── day_range ───────────────────────────────────────────────────────────────

/// The calendar day containing `date`.
pub fn day_range(date: NaiveDateTime) -> DateRange {
    DateRange::from_days(date.date(), date.date())
}

// ── week_range ──────────────────────────────────────────────────────────────

/// The Sunday-to-Saturday week containing `date`.
///
/// A Sunday starts its own week; any other day belongs to the week that
/// began on the preceding Sunday.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use period_engine::range::week_range;
///
/// // Wednesday, March 8, 2023
/// let wed = NaiveDate::from_ymd_opt(2023, 3, 8).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let week = week_range(wed).unwrap();
/// assert_eq!(week.start.to_string(), "2023-03-05 00:00:00");
/// assert_eq!(week.end.to_string(), "2023-03-11 23:59:59");
/// ```
///
/// # Errors
///
/// Same as [`week_range_with_options`].
pub fn week_range(date: NaiveDateTime) -> Result<DateRange> {
    week_range_with_options(date, &RangeOptions::default())
}

/// The seven-day week containing `date`, starting on `options.week_start`.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidDate`] when the week reaches past
/// [`NaiveDate::MIN`] or [`NaiveDate::MAX`].
pub fn week_range_with_options(
    date: NaiveDateTime,
    options: &RangeOptions,
) -> Result<DateRange> {
    let day = date.date();
    let offset = days_from_week_start(day.weekday(), options.week_start);
    let first = day
        .checked_sub_signed(chrono::Duration::days(offset))
        .ok_or_else(|| out_of_range(day, "start of week"))?;
    let last = first
        .checked_add_signed(chrono::Duration::days(6))
        .ok_or_else(|| out_of_range(day, "end of week"))?;
    trace!(%date, week_start = ?options.week_start, %first, %last, "week range");
    Ok(DateRange::from_days(first, last))
}

// ── month_range ─────────────────────────────────────────────────────────────

/// The calendar month containing `date`.
///
/// The last day is found by adding one calendar month to the first of the
/// month and stepping back a day, so 28/29/30/31-day months and year
/// boundaries need no special cases.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidDate`] only when the month after `date`'s
/// month is outside chrono's representable range.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use period_engine::range::month_range;
///
/// let d = NaiveDate::from_ymd_opt(2023, 2, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let month = month_range(d).unwrap();
/// assert_eq!(month.start.to_string(), "2023-02-01 00:00:00");
/// assert_eq!(month.end.to_string(), "2023-02-28 23:59:59");
/// ```
pub fn month_range(date: NaiveDateTime) -> Result<DateRange> {
    let first = first_of_month(date.date())?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| out_of_range(first, "end of month"))?;
    Ok(DateRange::from_days(first, last))
}

// ── month_ranges ────────────────────────────────────────────────────────────

/// `num_months` consecutive month ranges, oldest first, ending with the month
/// containing `date`.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidRangeCount`] if `num_months` is zero, or
/// [`PeriodError::InvalidDate`] if the earliest month would fall before the
/// representable calendar.
#[tracing::instrument(level = "debug")]
pub fn month_ranges(date: NaiveDateTime, num_months: u32) -> Result<Vec<DateRange>> {
    if num_months == 0 {
        return Err(PeriodError::InvalidRangeCount(num_months));
    }

    let last_first = first_of_month(date.date())?;
    let earliest = last_first
        .checked_sub_months(Months::new(num_months - 1))
        .ok_or_else(|| out_of_range(last_first, "start of earliest month"))?;

    let mut ranges = Vec::with_capacity(num_months as usize);
    for i in 0..num_months {
        let month_start = earliest
            .checked_add_months(Months::new(i))
            .ok_or_else(|| out_of_range(earliest, "month start"))?;
        ranges.push(month_range(start_of_day(month_start))?);
    }

    debug!(
        first = %ranges[0].start,
        last = %ranges[ranges.len() - 1].end,
        "computed month ranges"
    );
    Ok(ranges)
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn first_of_month(date: NaiveDate) -> Result<NaiveDate> {
    date.with_day(1)
        .ok_or_else(|| out_of_range(date, "first of month"))
}

fn out_of_range(date: NaiveDate, what: &str) -> PeriodError {
    PeriodError::InvalidDate(format!("{what} for {date} is out of range"))
}

// ── Tests ───────────────────────────────────────────────────────────────────
