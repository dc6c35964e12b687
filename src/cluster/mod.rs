//! Density-based clustering of planar points using a grid index
pub mod dbscan;
pub mod grid;

#[cfg(test)]
mod grid_test;

pub use dbscan::{Cluster, build_labels, db_scan, region_query};
pub use grid::GridIndex;
