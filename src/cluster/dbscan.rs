use bitvec::prelude::*;

use super::grid::GridIndex;
use crate::error::PipelineError;
use crate::point::NOISE_LABEL;
use crate::projection::PlanarPoint;

// DBSCAN algorithm pseudocode (from <http://en.wikipedia.org/wiki/DBSCAN>):
//
// DBSCAN(D, eps, MinPts)
//    C = 0
//    for each unvisited point P in dataset D
//       mark P as visited
//       NeighborPts = regionQuery(P, eps)
//       if sizeof(NeighborPts) < MinPts
//          mark P as NOISE
//       else
//          C = next cluster
//          expandCluster(P, NeighborPts, C, eps, MinPts)
//
// expandCluster(P, NeighborPts, C, eps, MinPts)
//    add P to cluster C
//    for each point P' in NeighborPts
//       if P' is not visited
//          mark P' as visited
//          NeighborPts' = regionQuery(P', eps)
//          if sizeof(NeighborPts') >= MinPts
//             NeighborPts = NeighborPts joined with NeighborPts'
//       if P' is not yet member of any cluster
//          add P' to cluster C
//
// regionQuery(P, eps)
//    return all points within P's eps-neighborhood (including P)

/// A cluster found by DBSCAN
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Cluster id, 0-based in discovery order
    pub id: usize,
    /// Indices of member points, in discovery order
    pub points: Vec<usize>,
}

/// Clusters planar points using the DBSCAN algorithm
///
/// Seed points are processed in input order; a border point keeps the
/// cluster of whichever core point reached it first and is never
/// reassigned, so output is fully deterministic for a fixed input order.
///
/// # Arguments
///
/// * `points` - Planar points to cluster
/// * `eps` - Neighborhood radius in meters (distances compared inclusively)
/// * `min_samples` - Minimum eps-neighborhood size (self included) for a
///   point to be a core point
///
/// # Returns
///
/// A tuple `(clusters, noise)` where:
/// - `clusters` is a vector of found clusters, in discovery order
/// - `noise` is a vector of point indices no cluster reached
///
/// # Errors
///
/// Rejects `eps <= 0`, `min_samples < 1`, and an empty point set before
/// any computation. An all-noise result (eps smaller than every point
/// spacing) is valid output, not an error.
pub fn db_scan(
    points: &[PlanarPoint],
    eps: f64,
    min_samples: usize,
) -> Result<(Vec<Cluster>, Vec<usize>), PipelineError> {
    if eps <= 0.0 || eps.is_nan() {
        return Err(PipelineError::InvalidEps(eps));
    }
    if min_samples < 1 {
        return Err(PipelineError::InvalidMinSamples(min_samples));
    }
    if points.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let mut visited = vec![false; points.len()];
    let mut members = vec![false; points.len()];
    let mut clusters = Vec::new();
    let mut noise = Vec::new();
    let mut c = 0;
    let index = GridIndex::new(points, eps);

    let mut neighbor_unique = bitvec![0; points.len()];

    for i in 0..points.len() {
        if visited[i] {
            continue;
        }
        visited[i] = true;

        let neighbor_pts = index.in_range(&points[i], eps, Vec::new());
        if neighbor_pts.len() < min_samples {
            noise.push(i);
        } else {
            let mut cluster = Cluster {
                id: c,
                points: vec![i],
            };
            members[i] = true;
            c += 1;
            // expandCluster goes here inline
            neighbor_unique.fill(false);
            for &j in &neighbor_pts {
                neighbor_unique.set(j, true);
            }

            let mut neighbor_pts = neighbor_pts;
            let mut j = 0;
            // Use while loop to handle dynamic growth of neighbor_pts during iteration
            while j < neighbor_pts.len() {
                let k = neighbor_pts[j];
                if !visited[k] {
                    visited[k] = true;
                    let more_neighbors = index.in_range(&points[k], eps, Vec::new());
                    if more_neighbors.len() >= min_samples {
                        for &p in &more_neighbors {
                            if !neighbor_unique[p] {
                                neighbor_pts.push(p);
                                neighbor_unique.set(p, true);
                            }
                        }
                    }
                }

                if !members[k] {
                    cluster.points.push(k);
                    members[k] = true;
                }
                j += 1;
            }
            clusters.push(cluster);
        }
    }

    // A point first seen as noise may later be absorbed as a border point;
    // only points no cluster reached stay noise.
    noise.retain(|&i| !members[i]);

    Ok((clusters, noise))
}

/// Simple O(N) way to find points in neighbourhood
///
/// This is the reference implementation for `GridIndex::in_range`: same
/// inclusive eps boundary, same ascending index order.
pub fn region_query(points: &[PlanarPoint], p: &PlanarPoint, eps: f64) -> Vec<usize> {
    let mut result = Vec::new();

    for (i, point) in points.iter().enumerate() {
        if point.sq_dist(p) <= eps * eps {
            result.push(i);
        }
    }

    result
}

/// Creates a per-point label array from clusters
///
/// `labels[i]` = cluster id for point i, or [`NOISE_LABEL`] for noise,
/// one label per input point in input order.
pub fn build_labels(clusters: &[Cluster], num_points: usize) -> Vec<i32> {
    let mut labels = vec![NOISE_LABEL; num_points];

    for cluster in clusters {
        for &idx in &cluster.points {
            labels[idx] = cluster.id as i32;
        }
    }

    labels
}
