//! Error types for input validation and configuration loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("sampling interval must be positive, got {0} minutes")]
    NonPositiveInterval(i64),

    #[error("sampling interval of {0} minutes is too large")]
    IntervalTooLarge(i64),

    #[error("invalid cave {field}: {value}")]
    InvalidCaveDimension { field: &'static str, value: f64 },

    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
