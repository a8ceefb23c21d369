use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};

use crate::types::SunAngles;

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Folds any angle into `[0, 360)`. NaN stays NaN.
pub fn normalize_angle(angle: f64) -> f64 {
    let folded = angle.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0
    if folded >= 360.0 {
        0.0
    } else {
        folded
    }
}

/// Ordinal day, 1 = January 1st. Invalid dates give 0.
pub fn day_of_year(year: i32, month: u32, day: u32) -> i32 {
    NaiveDate::from_ymd_opt(year, month, day).map_or(0, |d| d.ordinal() as i32)
}

fn intermediate_angle_b(n: i32) -> f64 {
    deg_to_rad((n - 1) as f64 * (360.0 / 365.0))
}

pub fn equation_of_time(n: i32) -> f64 {
    let b = intermediate_angle_b(n);
    229.18
        * (0.000075
            + 0.001868 * b.cos()
            - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.040849 * (2.0 * b).sin())
}

pub fn utc_lst_correction(longitude: f64, eot: f64) -> f64 {
    (4.0 * longitude + eot) / 60.0
}

pub fn hour_angle(local_solar_time: f64) -> f64 {
    DEGREES_PER_HOUR * (local_solar_time - 12.0)
}

pub fn solar_declination(n: i32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 * ((284 + n) as f64 / 365.0)).sin()
}

pub fn solar_zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let cos_zenith =
        lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(cos_zenith.clamp(-1.0, 1.0).acos())
}

pub fn solar_altitude(zenith_angle: f64) -> f64 {
    90.0 - zenith_angle
}

/// Compass azimuth in degrees: 0 = north, 90 = east, 180 = south.
pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_az = -dec_rad.cos() * ha_rad.sin();
    let cos_az = dec_rad.sin() * lat_rad.cos() - dec_rad.cos() * lat_rad.sin() * ha_rad.cos();
    let az_rad = sin_az.atan2(cos_az);
    normalize_angle(rad_to_deg(az_rad))
}

/// Half the day length as an hour angle in degrees, or `None` when the sun
/// never crosses the horizon (polar day or polar night) or the inputs are
/// not finite.
pub fn sunset_hour_angle(latitude: f64, declination: f64) -> Option<f64> {
    let cos_h = -deg_to_rad(latitude).tan() * deg_to_rad(declination).tan();
    if cos_h.is_nan() || cos_h.abs() >= 1.0 {
        return None;
    }
    Some(rad_to_deg(cos_h.acos()))
}

pub fn sun_angles<Tz: TimeZone>(latitude: f64, longitude: f64, dt: &DateTime<Tz>) -> SunAngles {
    let utc = dt.with_timezone(&Utc);
    let utc_hours = utc.hour() as f64
        + utc.minute() as f64 / 60.0
        + utc.second() as f64 / 3600.0
        + utc.nanosecond() as f64 / 3.6e12;
    let n = utc.ordinal() as i32;
    let eot = equation_of_time(n);
    let decl = solar_declination(n);
    let local_solar_time = (utc_hours + utc_lst_correction(longitude, eot)).rem_euclid(24.0);
    let ha = hour_angle(local_solar_time);
    let zenith = solar_zenith_angle(latitude, decl, ha);
    SunAngles {
        day_of_year: n,
        declination: decl,
        equation_of_time: eot,
        local_solar_time,
        hour_angle: ha,
        zenith,
        altitude: solar_altitude(zenith),
        azimuth: solar_azimuth(latitude, decl, ha),
    }
}
