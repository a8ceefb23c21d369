//! JSON-backed simulation settings.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::analysis::DAY_SAMPLE_INTERVAL_MINUTES;
use crate::error::{Result, SimulationError};
use crate::path::local_day_window;
use crate::types::{CaveGeometry, SimulationParams, TimeRange};

pub const DEFAULT_LATITUDE: f64 = 31.9539;
pub const DEFAULT_LONGITUDE: f64 = 35.9106;
pub const DEFAULT_TIMEZONE: &str = "Asia/Amman";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub date: NaiveDate,
    pub timezone: String,
    pub cave: CaveGeometry,
    pub interval_minutes: i64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            date: Local::now().date_naive(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            cave: CaveGeometry::default(),
            interval_minutes: DAY_SAMPLE_INTERVAL_MINUTES,
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn time_zone(&self) -> Result<chrono_tz::Tz> {
        self.timezone
            .parse::<chrono_tz::Tz>()
            .map_err(|_| SimulationError::UnknownTimeZone(self.timezone.clone()))
    }

    /// Builds parameters spanning the whole configured day in its zone.
    pub fn to_params(&self) -> Result<SimulationParams<chrono_tz::Tz>> {
        let tz = self.time_zone()?;
        let (start, end) = local_day_window(&tz, self.date);
        Ok(SimulationParams {
            latitude: self.latitude,
            longitude: self.longitude,
            date: start.clone(),
            cave: self.cave,
            time_range: TimeRange {
                start,
                end,
                interval_minutes: self.interval_minutes,
            },
        })
    }
}
