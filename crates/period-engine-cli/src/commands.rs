use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use period_engine::{
    business_days_between, day_range, month_range, month_ranges, parse_reference, slugify_with,
    time_since_or, week_range_with_options, RangeOptions,
};

use crate::cli::{Command, DateArgs};
use crate::config::Settings;

#[derive(Debug, Serialize)]
struct BusinessDaysOutput {
    from: NaiveDateTime,
    to: NaiveDateTime,
    business_days: u64,
}

#[derive(Debug, Serialize)]
struct SinceOutput {
    then: NaiveDateTime,
    now: NaiveDateTime,
    text: String,
}

#[derive(Debug, Serialize)]
struct SlugOutput {
    slug: String,
}

/// Run one subcommand and return its JSON output.
///
/// `utc_now` is turned into a local anchor only when the command needs one.
pub fn execute(command: &Command, settings: &Settings, utc_now: DateTime<Utc>) -> Result<Value> {
    let value = match command {
        Command::Day(args) => {
            info!(command = "day", "running command");
            serde_json::to_value(day_range(reference(args, settings, utc_now)?))?
        }
        Command::Week(args) => {
            info!(command = "week", "running command");
            let options = RangeOptions {
                week_start: settings.week_start,
            };
            let date = reference(args, settings, utc_now)?;
            serde_json::to_value(week_range_with_options(date, &options)?)?
        }
        Command::Month(args) => {
            info!(command = "month", "running command");
            serde_json::to_value(month_range(reference(args, settings, utc_now)?)?)?
        }
        Command::Months(args) => {
            info!(command = "months", count = args.count, "running command");
            let date = reference(&args.date, settings, utc_now)?;
            serde_json::to_value(month_ranges(date, args.count)?)?
        }
        Command::BusinessDays(args) => {
            info!(command = "business-days", "running command");
            let from = parse_arg(&args.from, "FROM")?;
            let to = parse_arg(&args.to, "TO")?;
            serde_json::to_value(BusinessDaysOutput {
                from,
                to,
                business_days: business_days_between(from, to),
            })?
        }
        Command::Since(args) => {
            info!(command = "since", "running command");
            let then = parse_arg(&args.then, "THEN")?;
            let anchor = settings.anchor(utc_now)?;
            serde_json::to_value(SinceOutput {
                then,
                now: anchor,
                text: time_since_or(then, anchor, &args.default),
            })?
        }
        Command::Slug(args) => {
            info!(command = "slug", "running command");
            serde_json::to_value(SlugOutput {
                slug: slugify_with(&args.text.join(" "), &args.delim),
            })?
        }
    };
    Ok(value)
}

fn reference(
    args: &DateArgs,
    settings: &Settings,
    utc_now: DateTime<Utc>,
) -> Result<NaiveDateTime> {
    match &args.date {
        Some(s) => parse_arg(s, "DATE"),
        None => settings.anchor(utc_now),
    }
}

fn parse_arg(s: &str, name: &str) -> Result<NaiveDateTime> {
    parse_reference(s).with_context(|| format!("invalid {name}"))
}
