//! Source of raw sun positions and daily reference times.
//!
//! The rest of the crate only talks to the [`Almanac`] trait, so a more
//! precise ephemeris can be dropped in without touching the cave logic.
//! [`ApproximateAlmanac`] is the built-in low-precision model from
//! [`angles`](crate::angles): good to a degree or so, no refraction.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

use crate::angles;
use crate::types::{RawPosition, SunTimes};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

pub trait Almanac {
    /// Sun position at `time`. Azimuth is measured from south, positive
    /// toward west, both angles in radians.
    fn position(&self, time: &DateTime<Utc>, latitude: f64, longitude: f64) -> RawPosition;

    /// Sunrise, sunset and solar noon for the calendar day `date`.
    fn times(&self, date: NaiveDate, latitude: f64, longitude: f64) -> SunTimes<Utc>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApproximateAlmanac;

impl Almanac for ApproximateAlmanac {
    fn position(&self, time: &DateTime<Utc>, latitude: f64, longitude: f64) -> RawPosition {
        let sun = angles::sun_angles(latitude, longitude, time);
        RawPosition {
            azimuth: angles::deg_to_rad(sun.azimuth - 180.0),
            altitude: angles::deg_to_rad(sun.altitude),
        }
    }

    fn times(&self, date: NaiveDate, latitude: f64, longitude: f64) -> SunTimes<Utc> {
        let n = date.ordinal() as i32;
        let eot = angles::equation_of_time(n);
        let decl = angles::solar_declination(n);
        let noon_hours = 12.0 - angles::utc_lst_correction(longitude, eot);

        let (sunrise, sunset) = if latitude.is_finite() {
            match angles::sunset_hour_angle(latitude, decl) {
                Some(h) => {
                    let half_day = h / angles::DEGREES_PER_HOUR;
                    (
                        utc_at_hours(date, noon_hours - half_day),
                        utc_at_hours(date, noon_hours + half_day),
                    )
                }
                None => (None, None),
            }
        } else {
            (None, None)
        };

        SunTimes {
            sunrise,
            sunset,
            solar_noon: if latitude.is_finite() {
                utc_at_hours(date, noon_hours)
            } else {
                None
            },
        }
    }
}

/// `hours` past UTC midnight of `date`. May land on a neighbouring day.
fn utc_at_hours(date: NaiveDate, hours: f64) -> Option<DateTime<Utc>> {
    if !hours.is_finite() {
        return None;
    }
    let offset = TimeDelta::try_milliseconds((hours * MILLIS_PER_HOUR).round() as i64)?;
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
        .checked_add_signed(offset)
}
