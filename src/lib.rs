//! Spatial hotspot analysis pipeline
//!
//! Projects geographic points into a locally accurate UTM meter frame,
//! partitions them with DBSCAN density clustering, and derives cluster
//! statistics plus advisory parameter suggestions. Input is either a
//! real point set or a reproducible synthetic one built from named
//! hotspots.

pub mod assemble;
pub mod cluster;
pub mod error;
pub mod generate;
pub mod pipeline;
pub mod point;
pub mod projection;
pub mod stats;

#[cfg(test)]
mod pipeline_test;
#[cfg(test)]
mod projection_test;

pub use assemble::{AnalysisResult, assemble};
pub use cluster::{Cluster, build_labels, db_scan, region_query};
pub use error::PipelineError;
pub use generate::{Hotspot, generate, modesto_demo};
pub use pipeline::{AnalysisConfig, analyze};
pub use point::{BoundingBox, GeodeticPoint, NOISE_LABEL, PointRecord};
pub use projection::{PlanarPoint, Projector, Zone, ZoneReport, utm_zone};
pub use stats::{ClusterSummary, Statistics, summarize};
