//! Resolving the reference moment that period computations are anchored to.
//!
//! Nothing in this crate reads the system clock. Front ends obtain "now"
//! once (typically `chrono::Utc::now()`), convert it to wall-clock time in
//! the reporting timezone with [`local_anchor`], and pass the result to the
//! range functions. Explicit reference dates supplied as text go through
//! [`parse_reference`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::error::{PeriodError, Result};

/// Wall-clock time of the instant `now` in the IANA zone `timezone`.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidTimezone`] if `timezone` is not a valid
/// IANA timezone name.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use period_engine::anchor::local_anchor;
///
/// let now = Utc.with_ymd_and_hms(2026, 1, 15, 3, 0, 0).unwrap();
/// let local = local_anchor(now, "America/New_York").unwrap();
/// // 03:00 UTC is still the previous evening in New York (EST, UTC-5)
/// assert_eq!(local.to_string(), "2026-01-14 22:00:00");
/// ```
pub fn local_anchor(now: DateTime<Utc>, timezone: &str) -> Result<NaiveDateTime> {
    let tz = parse_timezone(timezone)?;
    Ok(now.with_timezone(&tz).naive_local())
}

/// Parse a reference timestamp given as text.
///
/// Accepted forms, tried in order:
///
/// - RFC 3339 (`2023-03-08T14:00:00-05:00`): the wall-clock part is kept,
///   the offset is dropped
/// - `YYYY-MM-DDTHH:MM:SS` and `YYYY-MM-DD HH:MM:SS`
/// - `YYYY-MM-DD` (midnight)
///
/// # Errors
///
/// Returns [`PeriodError::InvalidDatetime`] if none of the forms match.
pub fn parse_reference(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|e| PeriodError::InvalidDatetime(format!("'{}': {}", s, e)))
}

/// Parse an IANA timezone string into `Tz`.
fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| PeriodError::InvalidTimezone(format!("'{}'", s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        // Wednesday, March 8, 2023, 02:30:00 UTC
        Utc.with_ymd_and_hms(2023, 3, 8, 2, 30, 0).unwrap()
    }

    // ── local_anchor tests ──────────────────────────────────────────────

    #[test]
    fn test_local_anchor_utc_is_identity() {
        let result = local_anchor(now(), "UTC").unwrap();
        assert_eq!(result, now().naive_utc());
    }

    #[test]
    fn test_local_anchor_west_of_utc_changes_day() {
        // 02:30 UTC on Mar 8 is 18:30 PST on Mar 7
        let result = local_anchor(now(), "America/Los_Angeles").unwrap();
        assert_eq!(result.to_string(), "2023-03-07 18:30:00");
    }

    #[test]
    fn test_local_anchor_east_of_utc() {
        let result = local_anchor(now(), "Asia/Tokyo").unwrap();
        assert_eq!(result.to_string(), "2023-03-08 11:30:00");
    }

    #[test]
    fn test_local_anchor_invalid_timezone_returns_error() {
        let result = local_anchor(now(), "Invalid/Zone");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid timezone"), "got: {err}");
    }

    // ── parse_reference tests ───────────────────────────────────────────

    #[test]
    fn test_parse_reference_date_only_is_midnight() {
        let result = parse_reference("2023-03-08").unwrap();
        assert_eq!(result.to_string(), "2023-03-08 00:00:00");
    }

    #[test]
    fn test_parse_reference_naive_datetime_forms() {
        let t = parse_reference("2023-03-08T14:05:06").unwrap();
        let space = parse_reference("2023-03-08 14:05:06").unwrap();
        assert_eq!(t, space);
        assert_eq!(t.to_string(), "2023-03-08 14:05:06");
    }

    #[test]
    fn test_parse_reference_rfc3339_keeps_wall_clock() {
        let result = parse_reference("2023-03-08T22:00:00-05:00").unwrap();
        assert_eq!(result.to_string(), "2023-03-08 22:00:00");
    }

    #[test]
    fn test_parse_reference_trims_whitespace() {
        assert!(parse_reference("  2023-03-08 \n").is_ok());
    }

    #[test]
    fn test_parse_reference_invalid_returns_error() {
        let err = parse_reference("next tuesday").unwrap_err().to_string();
        assert!(err.contains("Invalid datetime"), "got: {err}");
        assert!(parse_reference("2023-02-30").is_err());
    }
}
