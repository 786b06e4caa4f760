use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use period_engine::WeekStartDay;

/// Reporting-period calculator.
#[derive(Parser)]
#[command(
    name = "periods",
    version,
    about = "Reporting-period boundaries, business-day counts and time-since strings"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./periods.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// IANA timezone used to resolve "now" (overrides config).
    #[arg(long, global = true)]
    pub timezone: Option<String>,

    /// Reference moment to use instead of the current time.
    #[arg(long, global = true, value_name = "DATETIME")]
    pub now: Option<String>,

    /// Append log output to this file instead of stderr (overrides config).
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// First day of the week for `week` (overrides config).
    #[arg(long, global = true, value_enum)]
    pub week_start: Option<WeekStartArg>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// The calendar day containing DATE.
    Day(DateArgs),
    /// The week containing DATE.
    Week(DateArgs),
    /// The calendar month containing DATE.
    Month(DateArgs),
    /// Consecutive months ending with the month containing DATE.
    Months(MonthsArgs),
    /// Business days between two timestamps.
    BusinessDays(BusinessDaysArgs),
    /// How long ago a timestamp was.
    Since(SinceArgs),
    /// ASCII slug for a title.
    Slug(SlugArgs),
}

/// A reference date, defaulting to now.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Reference date (YYYY-MM-DD, YYYY-MM-DDTHH:MM:SS or RFC 3339).
    pub date: Option<String>,
}

/// Arguments for the `months` subcommand.
#[derive(clap::Args)]
pub struct MonthsArgs {
    #[command(flatten)]
    pub date: DateArgs,

    /// Number of months, including the month of DATE.
    #[arg(short = 'n', long, default_value_t = 3)]
    pub count: u32,
}

/// Arguments for the `business-days` subcommand.
#[derive(clap::Args)]
pub struct BusinessDaysArgs {
    /// One end of the range.
    pub from: String,
    /// The other end of the range.
    pub to: String,
}

/// Arguments for the `since` subcommand.
#[derive(clap::Args)]
pub struct SinceArgs {
    /// The past timestamp.
    pub then: String,

    /// Text to print when less than a second has passed.
    #[arg(long, default_value = period_engine::humanize::JUST_NOW)]
    pub default: String,
}

/// Arguments for the `slug` subcommand.
#[derive(clap::Args)]
pub struct SlugArgs {
    /// Words of the title.
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Delimiter placed between words.
    #[arg(long, default_value = "-")]
    pub delim: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WeekStartArg {
    Sunday,
    Monday,
}

impl From<WeekStartArg> for WeekStartDay {
    fn from(arg: WeekStartArg) -> Self {
        match arg {
            WeekStartArg::Sunday => WeekStartDay::Sunday,
            WeekStartArg::Monday => WeekStartDay::Monday,
        }
    }
}
