//! Final merge of records, labels, and statistics into one result set

use crate::point::PointRecord;
use crate::projection::ZoneReport;
use crate::stats::{ClusterSummary, Statistics};

/// The complete output of one pipeline run
///
/// Immutable once assembled: `labels[i]` is the cluster label of
/// `records[i]` (cluster id or [`crate::point::NOISE_LABEL`]).
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Input records, unchanged
    pub records: Vec<PointRecord>,
    /// One label per record, in record order
    pub labels: Vec<i32>,
    /// Per-cluster summaries in cluster-id order
    pub clusters: Vec<ClusterSummary>,
    /// Dataset-level statistics
    pub statistics: Statistics,
    /// Projection zone and distortion metadata
    pub zone_report: ZoneReport,
}

/// Merges pipeline outputs into an [`AnalysisResult`]
///
/// Pure merge with no algorithmic content.
///
/// # Panics
///
/// Panics if `records.len() != labels.len()`; a mismatch means an
/// internal invariant was broken upstream and is not recoverable.
pub fn assemble(
    records: Vec<PointRecord>,
    labels: Vec<i32>,
    clusters: Vec<ClusterSummary>,
    statistics: Statistics,
    zone_report: ZoneReport,
) -> AnalysisResult {
    assert_eq!(
        records.len(),
        labels.len(),
        "label count must match record count"
    );

    AnalysisResult {
        records,
        labels,
        clusters,
        statistics,
        zone_report,
    }
}
