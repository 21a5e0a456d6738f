use chrono::{FixedOffset, NaiveTime, Offset, Utc};

use crate::error::CoreError;

/// Project start time used when a project does not set one.
pub const DEFAULT_START_TIME: &str = "06:00";

/// Project end time used when a project does not set one.
pub const DEFAULT_END_TIME: &str = "16:00";

/// Largest accepted report-date offset from UTC, in minutes (UTC+14).
pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Mapper configuration loaded from environment variables.
///
/// Defaults reproduce the historical behavior: 06:00-16:00 working day and
/// report dates taken from the UTC calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperConfig {
    /// Start time substituted for projects without one (`HH:MM`).
    pub default_start_time: String,
    /// End time substituted for projects without one (`HH:MM`).
    pub default_end_time: String,
    /// Minutes east of UTC used to derive a report's calendar date.
    pub report_date_offset_minutes: i32,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            default_start_time: DEFAULT_START_TIME.to_string(),
            default_end_time: DEFAULT_END_TIME.to_string(),
            report_date_offset_minutes: 0,
        }
    }
}

impl MapperConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                                 | Default |
    /// |-----------------------------------------|---------|
    /// | `FIELDVOICE_DEFAULT_START_TIME`         | `06:00` |
    /// | `FIELDVOICE_DEFAULT_END_TIME`           | `16:00` |
    /// | `FIELDVOICE_REPORT_DATE_OFFSET_MINUTES` | `0`     |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_start_time = match lookup("FIELDVOICE_DEFAULT_START_TIME") {
            Some(v) => parse_time_of_day("FIELDVOICE_DEFAULT_START_TIME", &v)?,
            None => DEFAULT_START_TIME.to_string(),
        };

        let default_end_time = match lookup("FIELDVOICE_DEFAULT_END_TIME") {
            Some(v) => parse_time_of_day("FIELDVOICE_DEFAULT_END_TIME", &v)?,
            None => DEFAULT_END_TIME.to_string(),
        };

        let report_date_offset_minutes = match lookup("FIELDVOICE_REPORT_DATE_OFFSET_MINUTES") {
            Some(v) => parse_offset("FIELDVOICE_REPORT_DATE_OFFSET_MINUTES", &v)?,
            None => 0,
        };

        Ok(Self {
            default_start_time,
            default_end_time,
            report_date_offset_minutes,
        })
    }

    /// The report-date offset as a chrono timezone.
    pub fn report_date_offset(&self) -> FixedOffset {
        // Range is checked on load; fall back to UTC for hand-built configs.
        FixedOffset::east_opt(self.report_date_offset_minutes * 60)
            .unwrap_or_else(|| Utc.fix())
    }
}

fn parse_time_of_day(key: &'static str, raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| CoreError::Config {
            key,
            message: format!("expected HH:MM, got {raw:?}"),
        })
}

fn parse_offset(key: &'static str, raw: &str) -> Result<i32, CoreError> {
    let minutes: i32 = raw.trim().parse().map_err(|_| CoreError::Config {
        key,
        message: format!("expected whole minutes, got {raw:?}"),
    })?;
    if minutes.abs() > MAX_OFFSET_MINUTES {
        return Err(CoreError::Config {
            key,
            message: format!("offset {minutes} is outside +/-{MAX_OFFSET_MINUTES} minutes"),
        });
    }
    Ok(minutes)
}
