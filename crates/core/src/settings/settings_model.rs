use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HISTORY_MONTHS, DEFAULT_OVERVIEW_MONTHS, DEFAULT_RECENT_WINDOW_POINTS,
    DEFAULT_TIMEZONE,
};
use crate::errors::{Error, Result};
use crate::utils::parse_timezone;

const MAX_HISTORY_MONTHS: u32 = 24;
const MAX_OVERVIEW_MONTHS: u32 = 60;

/// Tunables for the projection engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectionSettings {
    /// Preceding calendar months sampled for the historical average.
    pub history_months: u32,
    /// Trailing trajectory points used by the recent-window baseline.
    pub recent_window_points: usize,
    /// Months covered by the monthly overview.
    pub overview_months: u32,
    /// IANA zone used to map stored instants to calendar days.
    pub timezone: String,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            history_months: DEFAULT_HISTORY_MONTHS,
            recent_window_points: DEFAULT_RECENT_WINDOW_POINTS,
            overview_months: DEFAULT_OVERVIEW_MONTHS,
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl ProjectionSettings {
    /// Parses settings from JSON, filling missing keys with defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let settings: ProjectionSettings = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_months > MAX_HISTORY_MONTHS {
            return Err(Error::InvalidConfigValue(format!(
                "historyMonths must be at most {}, got {}",
                MAX_HISTORY_MONTHS, self.history_months
            )));
        }
        if self.recent_window_points < 2 {
            return Err(Error::InvalidConfigValue(format!(
                "recentWindowPoints must be at least 2, got {}",
                self.recent_window_points
            )));
        }
        if self.overview_months == 0 || self.overview_months > MAX_OVERVIEW_MONTHS {
            return Err(Error::InvalidConfigValue(format!(
                "overviewMonths must be between 1 and {}, got {}",
                MAX_OVERVIEW_MONTHS, self.overview_months
            )));
        }
        self.tz()?;
        Ok(())
    }

    pub fn tz(&self) -> Result<Tz> {
        parse_timezone(&self.timezone)
    }
}
