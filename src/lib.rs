pub mod almanac;
pub mod analysis;
pub mod angles;
pub mod cave;
pub mod config;
pub mod error;
pub mod path;
pub mod periods;
pub mod position;
pub mod types;

pub use almanac::{Almanac, ApproximateAlmanac};

pub use analysis::{analyze, analyze_with, try_analyze, DAY_SAMPLE_INTERVAL_MINUTES};

pub use angles::{
    day_of_year, deg_to_rad, equation_of_time, hour_angle, normalize_angle, rad_to_deg,
    solar_altitude, solar_azimuth, solar_declination, solar_zenith_angle, sun_angles,
    sunset_hour_angle, DEGREES_PER_HOUR, EARTH_AXIAL_TILT,
};

pub use cave::{angular_separation, field_of_view, hits_cave};

pub use config::SimulationConfig;

pub use error::{Result, SimulationError};

pub use path::{generate_path, interval_step, local_day_window, sample_instants};

pub use periods::find_avoidance_periods;

pub use position::{canonical_azimuth, compass_direction, solar_position};

pub use types::{
    AnalysisResult, AvoidancePeriod, CaveGeometry, CompassPoint, DaySummary, RawPosition,
    SimulationParams, SolarPathPoint, SolarPosition, SunAngles, SunTimes, TimeRange,
    AVOIDANCE_DESCRIPTION,
};
