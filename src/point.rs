//! Geographic point types shared across the pipeline

use std::collections::BTreeMap;

use crate::error::PipelineError;

/// Cluster label assigned to points no cluster reaches
pub const NOISE_LABEL: i32 = -1;

/// A WGS84 geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticPoint {
    /// Longitude in degrees, [-180, 180]
    pub lon: f64,
    /// Latitude in degrees, [-90, 90]
    pub lat: f64,
}

impl GeodeticPoint {
    /// Creates a point, rejecting out-of-range coordinates
    ///
    /// Coordinates are never clamped; a value outside the valid range
    /// (including NaN) is a validation error.
    pub fn new(lon: f64, lat: f64) -> Result<Self, PipelineError> {
        if !(-180.0..=180.0).contains(&lon) {
            return Err(PipelineError::InvalidLongitude(lon));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(PipelineError::InvalidLatitude(lat));
        }
        Ok(GeodeticPoint { lon, lat })
    }
}

/// A geographic bounding box in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Creates a bounding box, validating corner order and coordinate range
    pub fn new(
        min_lon: f64,
        min_lat: f64,
        max_lon: f64,
        max_lat: f64,
    ) -> Result<Self, PipelineError> {
        GeodeticPoint::new(min_lon, min_lat)?;
        GeodeticPoint::new(max_lon, max_lat)?;
        if min_lon > max_lon || min_lat > max_lat {
            return Err(PipelineError::InvalidBounds {
                min_lon,
                min_lat,
                max_lon,
                max_lat,
            });
        }
        Ok(BoundingBox {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        })
    }

    /// Checks whether a point lies inside the box (edges inclusive)
    pub fn contains(&self, p: &GeodeticPoint) -> bool {
        (self.min_lon..=self.max_lon).contains(&p.lon)
            && (self.min_lat..=self.max_lat).contains(&p.lat)
    }
}

/// One input point with a stable id and optional extension attributes
///
/// Records are created once per run (generated or supplied), consumed
/// read-only by projection and clustering, and handed off immutable in
/// the final `AnalysisResult` together with their labels.
///
/// Attributes use a `BTreeMap` so iteration order is deterministic and
/// two runs with the same seed produce byte-identical output.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    /// Unique id, stable across the pipeline
    pub id: usize,
    /// WGS84 location
    pub location: GeodeticPoint,
    /// Typed extension attributes (provenance, category, ...)
    pub attributes: BTreeMap<String, String>,
}

impl PointRecord {
    /// Creates a record with no extension attributes
    pub fn new(id: usize, location: GeodeticPoint) -> Self {
        PointRecord {
            id,
            location,
            attributes: BTreeMap::new(),
        }
    }
}
