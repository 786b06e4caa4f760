//! # period-engine
//!
//! Deterministic reporting-period computation.
//!
//! Reporting views need the same handful of calendar answers over and over:
//! which week or month a timestamp belongs to, the last N months as
//! start/end pairs, how many business days separate two timestamps, and a
//! friendly "3 days ago" label. This crate computes them as pure functions
//! of their inputs. It never reads the system clock; the caller supplies
//! the reference moment.
//!
//! ## Modules
//!
//! - [`range`] — Day/week/month boundaries and consecutive month ranges
//! - [`business`] — Business-day counting between two timestamps
//! - [`munge`] — Year/month/day substitution and start/end-of-day normalization
//! - [`anchor`] — Resolving "now" in a timezone and parsing reference timestamps
//! - [`humanize`] — "Time since" strings
//! - [`slug`] — ASCII slugs for report titles
//! - [`error`] — Error types

pub mod anchor;
pub mod business;
pub mod error;
pub mod humanize;
pub mod munge;
pub mod range;
pub mod slug;

pub use anchor::{local_anchor, parse_reference};
pub use business::business_days_between;
pub use error::{PeriodError, Result};
pub use humanize::{time_since, time_since_or};
pub use munge::{
    end_of_day, make_end_date, make_start_date, munge_date, start_of_day, DateFields,
};
pub use range::{
    day_range, month_range, month_ranges, week_range, week_range_with_options, DateRange,
    RangeOptions, WeekStartDay,
};
pub use slug::{slugify, slugify_with};
