#[cfg(test)]
mod tests {
    use crate::cluster::{GridIndex, region_query};
    use crate::projection::{PlanarPoint, Zone};

    fn pt(x: f64, y: f64) -> PlanarPoint {
        PlanarPoint {
            x,
            y,
            zone: Zone {
                number: 10,
                south: false,
            },
        }
    }

    #[test]
    fn test_grid_matches_naive_query() {
        // Verify that GridIndex and region_query give the same results
        let points = vec![
            pt(676_000.0, 4_165_000.0),
            pt(676_030.0, 4_165_010.0),
            pt(676_200.0, 4_165_400.0),
            pt(677_500.0, 4_166_100.0),
            pt(690_000.0, 4_180_000.0),
        ];
        let eps = 500.0;
        let index = GridIndex::new(&points, eps);

        for p in &points {
            let from_grid = index.in_range(p, eps, Vec::new());
            let from_scan = region_query(&points, p, eps);
            assert_eq!(from_grid, from_scan);
        }
    }

    #[test]
    fn test_inclusive_boundary() {
        // A point exactly eps away is a neighbor
        let points = vec![pt(0.0, 0.0), pt(100.0, 0.0), pt(100.1, 0.0)];
        let index = GridIndex::new(&points, 100.0);

        let found = index.in_range(&points[0], 100.0, Vec::new());
        assert_eq!(found, vec![0, 1]);
    }

    #[test]
    fn test_results_sorted_ascending() {
        // Points straddling several cells, inserted out of spatial order
        let points = vec![
            pt(250.0, 0.0),
            pt(0.0, 0.0),
            pt(120.0, 90.0),
            pt(-130.0, -40.0),
            pt(60.0, -110.0),
        ];
        let index = GridIndex::new(&points, 150.0);

        let found = index.in_range(&pt(50.0, 0.0), 150.0, Vec::new());
        let mut sorted = found.clone();
        sorted.sort_unstable();
        assert_eq!(found, sorted);
        assert_eq!(found, region_query(&points, &pt(50.0, 0.0), 150.0));
    }

    #[test]
    fn test_negative_radius_empty() {
        let points = vec![pt(0.0, 0.0)];
        let index = GridIndex::new(&points, 10.0);
        assert!(index.in_range(&points[0], -1.0, Vec::new()).is_empty());
    }

    #[test]
    fn test_reused_buffer_cleared() {
        let points = vec![pt(0.0, 0.0), pt(5.0, 0.0)];
        let index = GridIndex::new(&points, 10.0);

        let buf = index.in_range(&points[0], 10.0, Vec::new());
        assert_eq!(buf.len(), 2);
        // Re-using the buffer must not leak previous results
        let buf = index.in_range(&pt(1000.0, 1000.0), 10.0, buf);
        assert!(buf.is_empty());
    }
}
