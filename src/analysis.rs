use chrono::{DateTime, TimeDelta, TimeZone};
use log::debug;

use crate::almanac::{Almanac, ApproximateAlmanac};
use crate::error::{Result, SimulationError};
use crate::path;
use crate::periods::find_avoidance_periods;
use crate::types::{AnalysisResult, CaveGeometry, DaySummary, SimulationParams, TimeRange};

/// Day-level analysis always samples at this cadence, whatever the caller
/// put in [`SimulationParams::time_range`].
pub const DAY_SAMPLE_INTERVAL_MINUTES: i64 = 15;

pub fn analyze<Tz: TimeZone>(params: &SimulationParams<Tz>) -> AnalysisResult<Tz> {
    analyze_with(&ApproximateAlmanac, params)
}

/// Full-day analysis of `params.date` in its own time zone.
///
/// Never fails. Non-finite coordinates give NaN positions (so every sample
/// reads as "sun not visible") and missing reference times; use
/// [`try_analyze`] to reject such input up front.
pub fn analyze_with<A, Tz>(almanac: &A, params: &SimulationParams<Tz>) -> AnalysisResult<Tz>
where
    A: Almanac + ?Sized,
    Tz: TimeZone,
{
    let tz = params.date.timezone();
    let day = params.date.date_naive();
    let times = almanac
        .times(day, params.latitude, params.longitude)
        .with_timezone(&tz);

    let (day_start, day_end) = path::local_day_window(&tz, day);
    let path_points = path::sample_path(
        almanac,
        params.latitude,
        params.longitude,
        &params.cave,
        &day_start,
        &day_end,
        TimeDelta::minutes(DAY_SAMPLE_INTERVAL_MINUTES),
    );
    let avoidance_periods = find_avoidance_periods(&path_points);

    debug!(
        "analyzed {} at ({}, {}): {} samples, {} avoidance periods",
        day,
        params.latitude,
        params.longitude,
        path_points.len(),
        avoidance_periods.len()
    );

    AnalysisResult {
        sunrise_time: times.sunrise,
        sunset_time: times.sunset,
        solar_noon: times.solar_noon,
        path_points,
        avoidance_periods,
    }
}

/// [`analyze`] after [`SimulationParams::validate`].
pub fn try_analyze<Tz: TimeZone>(params: &SimulationParams<Tz>) -> Result<AnalysisResult<Tz>> {
    params.validate()?;
    Ok(analyze(params))
}

impl<Tz: TimeZone> SimulationParams<Tz> {
    pub fn for_day(latitude: f64, longitude: f64, date: DateTime<Tz>, cave: CaveGeometry) -> Self {
        let (start, end) = path::local_day_window(&date.timezone(), date.date_naive());
        Self {
            latitude,
            longitude,
            date,
            cave,
            time_range: TimeRange {
                start,
                end,
                interval_minutes: DAY_SAMPLE_INTERVAL_MINUTES,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SimulationError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(SimulationError::LongitudeOutOfRange(self.longitude));
        }
        path::interval_step(self.time_range.interval_minutes)?;
        self.cave.validate()
    }
}

impl<Tz: TimeZone> AnalysisResult<Tz> {
    pub fn summary(&self) -> DaySummary {
        let visible_samples = self.path_points.iter().filter(|p| p.is_visible).count();
        let avoidance_samples = self.path_points.iter().filter(|p| p.is_avoiding()).count();
        let daylight_hours = match (&self.sunrise_time, &self.sunset_time) {
            (Some(rise), Some(set)) => {
                let span = set.clone().signed_duration_since(rise.clone());
                Some(span.num_milliseconds() as f64 / 3_600_000.0)
            }
            _ => None,
        };
        DaySummary {
            daylight_hours,
            visible_samples,
            avoidance_samples,
            direct_samples: visible_samples - avoidance_samples,
            avoidance_rate: (visible_samples > 0)
                .then(|| avoidance_samples as f64 / visible_samples as f64),
            period_count: self.avoidance_periods.len(),
        }
    }
}
