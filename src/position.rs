use chrono::{DateTime, TimeZone, Utc};

use crate::almanac::Almanac;
use crate::angles::{normalize_angle, rad_to_deg};
use crate::types::{CompassPoint, SolarPosition};

/// Maps an almanac azimuth (radians from south, positive west) onto a
/// compass bearing in `[0, 360)`.
pub fn canonical_azimuth(raw_azimuth: f64) -> f64 {
    normalize_angle(rad_to_deg(raw_azimuth) + 180.0)
}

pub fn solar_position<A, Tz>(
    almanac: &A,
    time: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> SolarPosition
where
    A: Almanac + ?Sized,
    Tz: TimeZone,
{
    let raw = almanac.position(&time.with_timezone(&Utc), latitude, longitude);
    SolarPosition::new(canonical_azimuth(raw.azimuth), rad_to_deg(raw.altitude))
}

/// 16-point compass rose bucket for `azimuth`, `None` if it is not finite.
pub fn compass_direction(azimuth: f64) -> Option<CompassPoint> {
    if !azimuth.is_finite() {
        return None;
    }
    let sector = ((normalize_angle(azimuth) + 11.25) / 22.5).floor() as usize % 16;
    Some(CompassPoint::ALL[sector])
}
