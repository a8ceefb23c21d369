use chrono::{DateTime, TimeZone};
use log::trace;

use crate::types::{AvoidancePeriod, SolarPathPoint, AVOIDANCE_DESCRIPTION};

/// Collapses chronologically ordered samples into maximal runs where the
/// sun is up but misses the cave.
///
/// A run that is interrupted ends at the time of its last avoiding sample.
/// A run still open after the final sample ends at that final sample.
pub fn find_avoidance_periods<Tz: TimeZone>(points: &[SolarPathPoint<Tz>]) -> Vec<AvoidancePeriod<Tz>> {
    let mut periods = Vec::new();
    let mut open_start: Option<DateTime<Tz>> = None;

    for (i, point) in points.iter().enumerate() {
        if point.is_avoiding() {
            if open_start.is_none() {
                open_start = Some(point.time.clone());
            }
        } else if let Some(start) = open_start.take() {
            // A run is only open once an earlier sample started it, so i >= 1.
            periods.push(close_period(start, points[i - 1].time.clone()));
        }
    }

    if let (Some(start), Some(last)) = (open_start, points.last()) {
        periods.push(close_period(start, last.time.clone()));
    }

    periods
}

fn close_period<Tz: TimeZone>(start: DateTime<Tz>, end: DateTime<Tz>) -> AvoidancePeriod<Tz> {
    let period = AvoidancePeriod {
        start,
        end,
        description: AVOIDANCE_DESCRIPTION,
    };
    trace!("avoidance period of {} min", period.duration_minutes());
    period
}
