use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use period_engine::WeekStartDay;

use crate::cli::Cli;

/// Config file read when `--config` is not given, if it exists.
const DEFAULT_CONFIG_FILE: &str = "periods.toml";

const DEFAULT_TIMEZONE: &str = "UTC";

/// Contents of `periods.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeriodsConfig {
    /// IANA timezone used to resolve "now".
    #[serde(default)]
    pub timezone: Option<String>,

    /// First day of the week for `week`.
    #[serde(default)]
    pub week_start: Option<WeekStartDay>,

    /// Append logs to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl PeriodsConfig {
    /// Load the config at `path`, or `./periods.toml` if present, or defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&toml_str)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    fn parse(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}

/// Effective settings after applying CLI overrides to the config file.
#[derive(Debug)]
pub struct Settings {
    pub timezone: String,
    pub week_start: WeekStartDay,
    pub log_file: Option<PathBuf>,
    pub now: Option<String>,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: PeriodsConfig) -> Self {
        Self {
            timezone: cli
                .timezone
                .clone()
                .or(config.timezone)
                .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
            week_start: cli
                .week_start
                .map(WeekStartDay::from)
                .or(config.week_start)
                .unwrap_or_default(),
            log_file: cli.log_file.clone().or(config.log_file),
            now: cli.now.clone(),
        }
    }

    /// The reference moment: `--now` if given, else `utc_now` in the configured zone.
    ///
    /// Only commands that default to "now" call this, so a bad timezone does
    /// not fail commands that never read the clock.
    pub fn anchor(&self, utc_now: DateTime<Utc>) -> Result<NaiveDateTime> {
        let anchor = match &self.now {
            Some(s) => period_engine::parse_reference(s).context("invalid --now")?,
            None => period_engine::local_anchor(utc_now, &self.timezone)?,
        };
        debug!(%anchor, timezone = %self.timezone, "resolved anchor");
        Ok(anchor)
    }
}
