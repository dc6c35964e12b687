//! Uniform grid index for eps-neighborhood queries on planar points
//!
//! Points are bucketed into square cells of side `cell`; a range query
//! with radius <= `cell` only has to scan the 3x3 block of cells around
//! the query point. Results match the naive scan exactly, including the
//! inclusive eps boundary, and come back in ascending index order so
//! clustering output never depends on bucket iteration order.

use std::collections::HashMap;

use crate::projection::PlanarPoint;

/// Grid spatial index over a borrowed point slice
///
/// Nodes hold only indices into the point slice; the slice itself is
/// never copied.
pub struct GridIndex<'a> {
    points: &'a [PlanarPoint],
    cell: f64,
    buckets: HashMap<(i64, i64), Vec<usize>>,
}

impl<'a> GridIndex<'a> {
    /// Builds an index with the given cell size (meters)
    ///
    /// `cell` must be at least as large as any radius later passed to
    /// [`GridIndex::in_range`], and strictly positive.
    pub fn new(points: &'a [PlanarPoint], cell: f64) -> Self {
        let mut buckets: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
        for (i, p) in points.iter().enumerate() {
            buckets.entry(cell_key(p, cell)).or_default().push(i);
        }
        GridIndex {
            points,
            cell,
            buckets,
        }
    }

    /// Finds all point indices within `dist` of `pt` (inclusive), ascending
    ///
    /// To avoid allocation, the `out` vector can be pre-allocated with a
    /// larger capacity and re-used across multiple calls.
    pub fn in_range(&self, pt: &PlanarPoint, dist: f64, mut out: Vec<usize>) -> Vec<usize> {
        out.clear();
        if dist < 0.0 {
            return out;
        }

        let (cx, cy) = cell_key(pt, self.cell);
        let dist_sq = dist * dist;
        for gx in cx - 1..=cx + 1 {
            for gy in cy - 1..=cy + 1 {
                if let Some(ids) = self.buckets.get(&(gx, gy)) {
                    for &i in ids {
                        if self.points[i].sq_dist(pt) <= dist_sq {
                            out.push(i);
                        }
                    }
                }
            }
        }
        out.sort_unstable();
        out
    }
}

fn cell_key(p: &PlanarPoint, cell: f64) -> (i64, i64) {
    ((p.x / cell).floor() as i64, (p.y / cell).floor() as i64)
}
