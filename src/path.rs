use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use log::{debug, warn};

use crate::almanac::Almanac;
use crate::cave;
use crate::error::{Result, SimulationError};
use crate::position;
use crate::types::{CaveGeometry, SimulationParams, SolarPathPoint};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Validated step for a sampling interval given in minutes.
pub fn interval_step(interval_minutes: i64) -> Result<TimeDelta> {
    if interval_minutes <= 0 {
        return Err(SimulationError::NonPositiveInterval(interval_minutes));
    }
    TimeDelta::try_minutes(interval_minutes)
        .ok_or(SimulationError::IntervalTooLarge(interval_minutes))
}

/// `start + k * step` for every `k` that stays at or before `end`.
/// Empty when `start > end` or `step` is not positive.
pub fn sample_instants<Tz: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    step: TimeDelta,
) -> Vec<DateTime<Tz>> {
    let step_ms = step.num_milliseconds();
    if start > end || step_ms <= 0 {
        return Vec::new();
    }
    let span_ms = end
        .clone()
        .signed_duration_since(start.clone())
        .num_milliseconds();
    let count = span_ms / step_ms + 1;
    (0..count)
        .filter_map(|k| start.clone().checked_add_signed(TimeDelta::milliseconds(step_ms * k)))
        .collect()
}

pub fn generate_path<A, Tz>(almanac: &A, params: &SimulationParams<Tz>) -> Result<Vec<SolarPathPoint<Tz>>>
where
    A: Almanac + ?Sized,
    Tz: TimeZone,
{
    let step = interval_step(params.time_range.interval_minutes)?;
    Ok(sample_path(
        almanac,
        params.latitude,
        params.longitude,
        &params.cave,
        &params.time_range.start,
        &params.time_range.end,
        step,
    ))
}

pub(crate) fn sample_path<A, Tz>(
    almanac: &A,
    latitude: f64,
    longitude: f64,
    cave_geometry: &CaveGeometry,
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    step: TimeDelta,
) -> Vec<SolarPathPoint<Tz>>
where
    A: Almanac + ?Sized,
    Tz: TimeZone,
{
    let points: Vec<SolarPathPoint<Tz>> = sample_instants(start, end, step)
        .into_iter()
        .map(|time| {
            let position = position::solar_position(almanac, &time, latitude, longitude);
            SolarPathPoint {
                time,
                position,
                is_visible: position.elevation > 0.0,
                hits_cave: cave::hits_cave(&position, cave_geometry),
            }
        })
        .collect();
    debug!(
        "sampled {} points every {} min",
        points.len(),
        step.num_minutes()
    );
    points
}

/// First and last millisecond of `date` as seen in `tz`.
pub fn local_day_window<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> (DateTime<Tz>, DateTime<Tz>) {
    let midnight = date.and_time(NaiveTime::MIN);
    let last = midnight + TimeDelta::milliseconds(MILLIS_PER_DAY - 1);
    (
        resolve_local(tz, midnight, TimeDelta::hours(1)),
        resolve_local(tz, last, TimeDelta::hours(-1)),
    )
}

/// Earliest instant for a local wall-clock time. Inside a DST gap, walks in
/// whole `nudge` steps until the wall clock exists again.
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime, nudge: TimeDelta) -> DateTime<Tz> {
    if let Some(t) = tz.from_local_datetime(&local).earliest() {
        return t;
    }
    warn!("local time {} does not exist, shifting past the gap", local);
    (1..=24)
        .find_map(|k| tz.from_local_datetime(&(local + nudge * k)).earliest())
        .unwrap_or_else(|| tz.from_utc_datetime(&local))
}
