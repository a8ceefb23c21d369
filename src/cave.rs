//! Horizontal field-of-view model of a cave mouth.
//!
//! The mouth is treated as a triangle seen from the innermost point of the
//! cave: half the width over the depth gives the half-angle of the cone
//! through which direct sunlight can enter. Only azimuth is compared; the
//! sun's elevation gates the test but does not enter the cone.

use crate::angles::rad_to_deg;
use crate::error::{Result, SimulationError};
use crate::types::{CaveGeometry, SolarPosition};

/// Slack on the cone edge so a bearing exactly at `orientation ± fov / 2`
/// still counts after the wraparound arithmetic rounds.
pub const BOUNDARY_EPSILON_DEG: f64 = 1e-9;

/// Full opening angle of the cave's illuminable cone, in degrees.
pub fn field_of_view(cave: &CaveGeometry) -> f64 {
    2.0 * rad_to_deg((cave.width / 2.0).atan2(cave.depth))
}

/// Shortest arc between two bearings, in `[0, 180]`.
pub fn angular_separation(a: f64, b: f64) -> f64 {
    ((a - b + 180.0).rem_euclid(360.0) - 180.0).abs()
}

pub fn hits_cave(position: &SolarPosition, cave: &CaveGeometry) -> bool {
    if position.elevation.is_nan() || position.elevation <= 0.0 {
        return false;
    }
    angular_separation(position.azimuth, cave.orientation)
        <= field_of_view(cave) / 2.0 + BOUNDARY_EPSILON_DEG
}

impl CaveGeometry {
    pub fn validate(&self) -> Result<()> {
        let invalid = |field: &'static str, value: f64| -> Result<()> {
            Err(SimulationError::InvalidCaveDimension { field, value })
        };
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return invalid(field, value);
            }
        }
        if !(0.0..=90.0).contains(&self.tilt) {
            return invalid("tilt", self.tilt);
        }
        if !self.orientation.is_finite() {
            return invalid("orientation", self.orientation);
        }
        Ok(())
    }
}
