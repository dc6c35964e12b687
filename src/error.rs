//! Error taxonomy for the analysis pipeline
//!
//! All validation failures are surfaced synchronously at the call that
//! triggered them; the pipeline has no partial-failure mode.

use thiserror::Error;

/// Errors produced by pipeline input validation
#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    /// Longitude outside [-180, 180] degrees
    #[error("longitude {0} out of range [-180, 180]")]
    InvalidLongitude(f64),

    /// Latitude outside [-90, 90] degrees
    #[error("latitude {0} out of range [-90, 90]")]
    InvalidLatitude(f64),

    /// Bounding box with a min corner beyond its max corner
    #[error("bounding box min corner ({min_lon}, {min_lat}) exceeds max corner ({max_lon}, {max_lat})")]
    InvalidBounds {
        min_lon: f64,
        min_lat: f64,
        max_lon: f64,
        max_lat: f64,
    },

    /// Hotspot spread must be a finite non-negative number of degrees
    #[error("hotspot spread must be finite and non-negative, got {0}")]
    InvalidSpread(f64),

    /// DBSCAN eps must be strictly positive (meters)
    #[error("eps must be positive, got {0}")]
    InvalidEps(f64),

    /// DBSCAN min_samples must be at least 1
    #[error("min_samples must be at least 1, got {0}")]
    InvalidMinSamples(usize),

    /// An empty point set was passed where at least one point is required
    #[error("point set is empty")]
    EmptyInput,
}
