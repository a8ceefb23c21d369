use chrono::{DateTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunAngles {
    pub day_of_year: i32,
    pub declination: f64,
    pub equation_of_time: f64,
    pub local_solar_time: f64,
    pub hour_angle: f64,
    pub zenith: f64,
    pub altitude: f64,
    pub azimuth: f64,
}

/// Sun position as reported by an [`Almanac`](crate::Almanac).
///
/// `azimuth` is in radians measured from south, positive toward west.
/// `altitude` is in radians above the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPosition {
    pub azimuth: f64,
    pub altitude: f64,
}

/// Day reference times. `None` where the event does not happen that day
/// (polar day or night) or the coordinates were not finite.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimes<Tz: TimeZone> {
    pub sunrise: Option<DateTime<Tz>>,
    pub sunset: Option<DateTime<Tz>>,
    pub solar_noon: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> SunTimes<Tz> {
    pub fn with_timezone<Tz2: TimeZone>(&self, tz: &Tz2) -> SunTimes<Tz2> {
        SunTimes {
            sunrise: self.sunrise.as_ref().map(|t| t.with_timezone(tz)),
            sunset: self.sunset.as_ref().map(|t| t.with_timezone(tz)),
            solar_noon: self.solar_noon.as_ref().map(|t| t.with_timezone(tz)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub azimuth: f64,
    pub elevation: f64,
    pub distance: f64,
}

impl SolarPosition {
    pub const DISTANCE_AU: f64 = 1.0;

    pub fn new(azimuth: f64, elevation: f64) -> Self {
        Self {
            azimuth,
            elevation,
            distance: Self::DISTANCE_AU,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveGeometry {
    pub orientation: f64,
    pub tilt: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Default for CaveGeometry {
    fn default() -> Self {
        Self {
            orientation: 180.0,
            tilt: 15.0,
            width: 10.0,
            height: 5.0,
            depth: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeRange<Tz: TimeZone> {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub interval_minutes: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams<Tz: TimeZone> {
    pub latitude: f64,
    pub longitude: f64,
    /// Day to analyze. Only the calendar date in `Tz` matters.
    pub date: DateTime<Tz>,
    pub cave: CaveGeometry,
    pub time_range: TimeRange<Tz>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolarPathPoint<Tz: TimeZone> {
    pub time: DateTime<Tz>,
    pub position: SolarPosition,
    pub is_visible: bool,
    pub hits_cave: bool,
}

impl<Tz: TimeZone> SolarPathPoint<Tz> {
    pub fn is_avoiding(&self) -> bool {
        self.is_visible && !self.hits_cave
    }
}

pub const AVOIDANCE_DESCRIPTION: &str = "Sunlight avoids cave";

#[derive(Debug, Clone, PartialEq)]
pub struct AvoidancePeriod<Tz: TimeZone> {
    pub start: DateTime<Tz>,
    /// Time of the last avoiding sample, not an exclusive bound.
    pub end: DateTime<Tz>,
    pub description: &'static str,
}

impl<Tz: TimeZone> AvoidancePeriod<Tz> {
    pub fn duration(&self) -> TimeDelta {
        self.end.clone().signed_duration_since(self.start.clone())
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult<Tz: TimeZone> {
    pub sunrise_time: Option<DateTime<Tz>>,
    pub sunset_time: Option<DateTime<Tz>>,
    pub solar_noon: Option<DateTime<Tz>>,
    pub path_points: Vec<SolarPathPoint<Tz>>,
    pub avoidance_periods: Vec<AvoidancePeriod<Tz>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySummary {
    pub daylight_hours: Option<f64>,
    pub visible_samples: usize,
    pub avoidance_samples: usize,
    pub direct_samples: usize,
    /// Share of visible samples that avoid the cave, in `[0, 1]`.
    pub avoidance_rate: Option<f64>,
    pub period_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CompassPoint {
    pub const ALL: [CompassPoint; 16] = [
        CompassPoint::N,
        CompassPoint::NNE,
        CompassPoint::NE,
        CompassPoint::ENE,
        CompassPoint::E,
        CompassPoint::ESE,
        CompassPoint::SE,
        CompassPoint::SSE,
        CompassPoint::S,
        CompassPoint::SSW,
        CompassPoint::SW,
        CompassPoint::WSW,
        CompassPoint::W,
        CompassPoint::WNW,
        CompassPoint::NW,
        CompassPoint::NNW,
    ];

    pub fn abbreviation(self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NNE => "NNE",
            CompassPoint::NE => "NE",
            CompassPoint::ENE => "ENE",
            CompassPoint::E => "E",
            CompassPoint::ESE => "ESE",
            CompassPoint::SE => "SE",
            CompassPoint::SSE => "SSE",
            CompassPoint::S => "S",
            CompassPoint::SSW => "SSW",
            CompassPoint::SW => "SW",
            CompassPoint::WSW => "WSW",
            CompassPoint::W => "W",
            CompassPoint::WNW => "WNW",
            CompassPoint::NW => "NW",
            CompassPoint::NNW => "NNW",
        }
    }
}
