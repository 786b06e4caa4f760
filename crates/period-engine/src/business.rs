//! Business-day counting.

use chrono::{Datelike, NaiveDateTime};
use tracing::trace;

const WORKDAYS_PER_WEEK: u64 = 5;

/// Count the business days between two timestamps, in either order.
///
/// The earlier timestamp is stepped forward one day at a time while it is
/// still strictly before the later one; each step landing on Monday through
/// Friday counts. The range is therefore half-open, `[earlier, later)`, and
/// the result is the same whichever argument comes first.
///
/// Time of day matters: stepping from Monday 09:00 toward Monday 18:00
/// visits Monday 09:00 once and counts it.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use period_engine::business::business_days_between;
///
/// let mon = NaiveDate::from_ymd_opt(2023, 3, 6).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let next_mon = NaiveDate::from_ymd_opt(2023, 3, 13).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(business_days_between(mon, next_mon), 5);
/// assert_eq!(business_days_between(next_mon, mon), 5);
/// ```
pub fn business_days_between(date1: NaiveDateTime, date2: NaiveDateTime) -> u64 {
    let (earlier, later) = if date1 < date2 {
        (date1, date2)
    } else {
        (date2, date1)
    };

    let steps = day_steps(earlier, later);
    let full_weeks = steps / 7;
    let first_weekday = u64::from(earlier.weekday().num_days_from_monday());

    let remainder = (0..steps % 7)
        .filter(|i| (first_weekday + i) % 7 < WORKDAYS_PER_WEEK)
        .count() as u64;

    let count = full_weeks * WORKDAYS_PER_WEEK + remainder;
    trace!(%earlier, %later, steps, count, "business days");
    count
}

/// Number of instants `earlier + k days` (k >= 0) strictly before `later`.
fn day_steps(earlier: NaiveDateTime, later: NaiveDateTime) -> u64 {
    let gap = later - earlier;
    if gap <= chrono::Duration::zero() {
        return 0;
    }
    let whole = gap.num_days();
    let partial = gap > chrono::Duration::days(whole);
    (whole + i64::from(partial)) as u64
}
