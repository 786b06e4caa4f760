//! "Time since" strings for report timestamps (`3 days ago`, `just now`).

use chrono::NaiveDateTime;

/// Returned by [`time_since`] when no whole unit has elapsed.
pub const JUST_NOW: &str = "just now";

/// Describe how long ago `then` was, relative to `now`, in its largest unit.
///
/// Falls back to `"just now"` when less than a second has passed or `then`
/// lies in the future.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use period_engine::humanize::time_since;
///
/// let then = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let now = NaiveDate::from_ymd_opt(2023, 3, 4).unwrap().and_hms_opt(15, 0, 0).unwrap();
/// assert_eq!(time_since(then, now), "3 days ago");
/// ```
pub fn time_since(then: NaiveDateTime, now: NaiveDateTime) -> String {
    time_since_or(then, now, JUST_NOW)
}

/// [`time_since`] with a caller-chosen fallback string.
pub fn time_since_or(then: NaiveDateTime, now: NaiveDateTime, default: &str) -> String {
    let diff = now - then;
    if diff < chrono::Duration::zero() {
        return default.to_string();
    }

    // Whole days, then the seconds left over within the last day.
    let days = diff.num_days();
    let seconds = (diff - chrono::Duration::days(days)).num_seconds();

    let periods = [
        (days / 365, "year", "years"),
        (days / 30, "month", "months"),
        (days / 7, "week", "weeks"),
        (days, "day", "days"),
        (seconds / 3600, "hour", "hours"),
        (seconds / 60, "minute", "minutes"),
        (seconds, "second", "seconds"),
    ];

    periods
        .iter()
        .find(|(n, _, _)| *n > 0)
        .map(|&(n, singular, plural)| {
            format!("{} {} ago", n, if n == 1 { singular } else { plural })
        })
        .unwrap_or_else(|| default.to_string())
}
