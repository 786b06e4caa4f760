//! Error types for period-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Invalid range count: {0} (must be at least 1)")]
    InvalidRangeCount(u32),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, PeriodError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_count_message() {
        let e = PeriodError::InvalidRangeCount(0);
        assert_eq!(e.to_string(), "Invalid range count: 0 (must be at least 1)");
    }

    #[test]
    fn test_invalid_timezone_message() {
        let e = PeriodError::InvalidTimezone("'Mars/Olympus'".to_string());
        assert_eq!(e.to_string(), "Invalid timezone: 'Mars/Olympus'");
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<PeriodError>();
    }
}
