use std::f64::consts::PI;

use chrono::{DateTime, TimeZone, Utc};

use cave_sunlight::almanac::Almanac;
use cave_sunlight::position::*;
use cave_sunlight::types::{CompassPoint, RawPosition, SolarPosition, SunTimes};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

struct FixedAlmanac(RawPosition);

impl Almanac for FixedAlmanac {
    fn position(&self, _: &DateTime<Utc>, _: f64, _: f64) -> RawPosition {
        self.0
    }

    fn times(&self, _: chrono::NaiveDate, _: f64, _: f64) -> SunTimes<Utc> {
        SunTimes {
            sunrise: None,
            sunset: None,
            solar_noon: None,
        }
    }
}

// ── Canonical azimuth ──

#[test]
fn test_canonical_azimuth_cardinal_points() {
    assert_approx!(canonical_azimuth(0.0), 180.0, 1e-9);
    assert_approx!(canonical_azimuth(PI / 2.0), 270.0, 1e-9);
    assert_approx!(canonical_azimuth(-PI / 2.0), 90.0, 1e-9);
    assert_approx!(canonical_azimuth(-PI), 0.0, 1e-9);
}

#[test]
fn test_canonical_azimuth_half_turn_folds_to_north() {
    assert_eq!(canonical_azimuth(PI), 0.0);
}

#[test]
fn test_canonical_azimuth_always_in_range() {
    for i in -2000..=2000 {
        let raw = i as f64 * 0.01;
        let az = canonical_azimuth(raw);
        assert!((0.0..360.0).contains(&az), "raw={} -> {}", raw, az);
    }
    for &raw in &[-1e-17, 1e-17, -PI - 1e-15, 7.0 * PI, -9.0 * PI] {
        let az = canonical_azimuth(raw);
        assert!((0.0..360.0).contains(&az), "raw={} -> {}", raw, az);
    }
}

#[test]
fn test_canonical_azimuth_nan() {
    assert!(canonical_azimuth(f64::NAN).is_nan());
}

// ── Solar position through an almanac ──

#[test]
fn test_solar_position_converts_units() {
    let almanac = FixedAlmanac(RawPosition {
        azimuth: -PI / 4.0,
        altitude: PI / 6.0,
    });
    let t = Utc.with_ymd_and_hms(2026, 6, 21, 8, 0, 0).unwrap();
    let pos = solar_position(&almanac, &t, 31.9, 35.9);
    assert_approx!(pos.azimuth, 135.0, 1e-9);
    assert_approx!(pos.elevation, 30.0, 1e-9);
    assert_eq!(pos.distance, SolarPosition::DISTANCE_AU);
}

#[test]
fn test_solar_position_with_builtin_almanac() {
    let t = chrono_tz::Asia::Amman
        .with_ymd_and_hms(2026, 6, 21, 12, 30, 0)
        .unwrap();
    let pos = solar_position(&cave_sunlight::ApproximateAlmanac, &t, 31.9539, 35.9106);
    assert!(pos.elevation > 75.0, "elevation={}", pos.elevation);
    assert!((150.0..210.0).contains(&pos.azimuth), "azimuth={}", pos.azimuth);
}

// ── Compass ──

#[test]
fn test_compass_direction_cardinals() {
    assert_eq!(compass_direction(0.0), Some(CompassPoint::N));
    assert_eq!(compass_direction(90.0), Some(CompassPoint::E));
    assert_eq!(compass_direction(180.0), Some(CompassPoint::S));
    assert_eq!(compass_direction(270.0), Some(CompassPoint::W));
}

#[test]
fn test_compass_direction_sector_edges() {
    assert_eq!(compass_direction(11.24), Some(CompassPoint::N));
    assert_eq!(compass_direction(11.25), Some(CompassPoint::NNE));
    assert_eq!(compass_direction(348.75), Some(CompassPoint::N));
    assert_eq!(compass_direction(348.74), Some(CompassPoint::NNW));
    assert_eq!(compass_direction(-45.0), Some(CompassPoint::NW));
}

#[test]
fn test_compass_direction_non_finite() {
    assert_eq!(compass_direction(f64::NAN), None);
    assert_eq!(compass_direction(f64::INFINITY), None);
}

#[test]
fn test_compass_abbreviations_unique() {
    let mut names: Vec<&str> = CompassPoint::ALL.iter().map(|c| c.abbreviation()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 16);
}
