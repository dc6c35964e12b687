//! End-to-end orchestration: project, cluster, summarize, assemble

use crate::assemble::{AnalysisResult, assemble};
use crate::cluster::{build_labels, db_scan};
use crate::error::PipelineError;
use crate::point::{GeodeticPoint, PointRecord};
use crate::projection::{PlanarPoint, Projector};
use crate::stats::summarize;

/// Clustering parameters for one analysis run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    /// Neighborhood radius in meters
    pub eps: f64,
    /// Minimum eps-neighborhood size for a core point
    pub min_samples: usize,
}

impl AnalysisConfig {
    /// Rejects non-positive eps and min_samples below 1
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.eps <= 0.0 || self.eps.is_nan() {
            return Err(PipelineError::InvalidEps(self.eps));
        }
        if self.min_samples < 1 {
            return Err(PipelineError::InvalidMinSamples(self.min_samples));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            eps: 250.0,
            min_samples: 5,
        }
    }
}

/// Runs the full analysis pipeline over a set of point records
///
/// Single-threaded batch computation: zone selection and projection,
/// DBSCAN clustering, statistics, assembly. A run is a pure function of
/// its input; either the complete [`AnalysisResult`] is produced or the
/// call fails before any output is returned.
///
/// # Errors
///
/// Fails on invalid configuration or an empty record set.
pub fn analyze(
    records: Vec<PointRecord>,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, PipelineError> {
    config.validate()?;
    if records.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let locations: Vec<GeodeticPoint> = records.iter().map(|r| r.location).collect();
    let (projector, zone_report) = Projector::for_points(&locations)?;
    let planar: Vec<PlanarPoint> = locations.iter().map(|g| projector.to_planar(g)).collect();

    let (clusters, noise) = db_scan(&planar, config.eps, config.min_samples)?;
    let labels = build_labels(&clusters, planar.len());
    let (summaries, statistics) = summarize(&planar, &clusters, &noise, &projector);

    Ok(assemble(records, labels, summaries, statistics, zone_report))
}
