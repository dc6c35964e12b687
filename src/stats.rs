//! Per-cluster and dataset-level metrics derived from clustering output

use crate::cluster::Cluster;
use crate::point::GeodeticPoint;
use crate::projection::{PlanarPoint, Projector};

/// Summary of one cluster
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSummary {
    /// Cluster id, matching the point labels
    pub id: usize,
    /// Member count
    pub size: usize,
    /// Mean of member planar coordinates, projected back to geodetic
    pub centroid: GeodeticPoint,
}

/// Dataset-level statistics and advisory parameter suggestions
///
/// The suggested eps/min_samples pair is a tuning starting point derived
/// from the dataset's extent and density; it is never applied
/// automatically.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Total number of input points
    pub total: usize,
    /// Points no cluster reached
    pub noise_count: usize,
    /// noise_count / total
    pub noise_ratio: f64,
    /// Planar bounding box width in meters
    pub extent_width_m: f64,
    /// Planar bounding box height in meters
    pub extent_height_m: f64,
    /// Points per square kilometer (0 for a degenerate zero-area extent)
    pub density_per_km2: f64,
    /// Advisory eps in meters: min(width, height) / 20
    pub suggested_eps: f64,
    /// Advisory min_samples: max(3, round(density / 10))
    pub suggested_min_samples: usize,
}

/// Summarizes clustering output
///
/// # Returns
///
/// A tuple `(summaries, statistics)` where `summaries` holds one entry
/// per cluster in cluster-id order.
pub fn summarize(
    planar: &[PlanarPoint],
    clusters: &[Cluster],
    noise: &[usize],
    projector: &Projector,
) -> (Vec<ClusterSummary>, Statistics) {
    let summaries = clusters
        .iter()
        .map(|cluster| ClusterSummary {
            id: cluster.id,
            size: cluster.points.len(),
            centroid: centroid(planar, &cluster.points, projector),
        })
        .collect();

    let total = planar.len();
    let (width, height) = extent(planar);
    let area_km2 = width * height / 1.0e6;
    let density_per_km2 = if area_km2 > 0.0 {
        total as f64 / area_km2
    } else {
        0.0
    };

    let statistics = Statistics {
        total,
        noise_count: noise.len(),
        noise_ratio: if total > 0 {
            noise.len() as f64 / total as f64
        } else {
            0.0
        },
        extent_width_m: width,
        extent_height_m: height,
        density_per_km2,
        suggested_eps: width.min(height) / 20.0,
        suggested_min_samples: ((density_per_km2 / 10.0).round() as usize).max(3),
    };

    (summaries, statistics)
}

/// Mean planar position of the given members, projected back to geodetic
///
/// # Panics
///
/// Panics if `members` is empty; the clusterer never emits an empty
/// cluster.
fn centroid(planar: &[PlanarPoint], members: &[usize], projector: &Projector) -> GeodeticPoint {
    if members.is_empty() {
        panic!("empty cluster");
    }

    let mut x = 0.0;
    let mut y = 0.0;
    for &i in members {
        x += planar[i].x;
        y += planar[i].y;
    }
    let n = members.len() as f64;

    projector.to_geodetic(&PlanarPoint {
        x: x / n,
        y: y / n,
        zone: projector.zone(),
    })
}

/// Planar bounding box (width, height) of all points, in meters
fn extent(planar: &[PlanarPoint]) -> (f64, f64) {
    if planar.is_empty() {
        return (0.0, 0.0);
    }

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in planar {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    (max_x - min_x, max_y - min_y)
}
