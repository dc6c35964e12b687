#[cfg(test)]
mod tests {
    use crate::error::PipelineError;
    use crate::point::GeodeticPoint;
    use crate::projection::{Projector, Zone, utm_zone};

    #[test]
    fn test_zone_selection() {
        // floor((-121 + 180) / 6) + 1 = 10
        assert_eq!(utm_zone(-121.0), 10);
        assert_eq!(utm_zone(-180.0), 1);
        assert_eq!(utm_zone(0.0), 31);
        assert_eq!(utm_zone(179.9), 60);
        // The lon = 180 edge folds into zone 60
        assert_eq!(utm_zone(180.0), 60);
    }

    #[test]
    fn test_central_meridian() {
        let zone = Zone {
            number: 10,
            south: false,
        };
        assert_eq!(zone.central_meridian_deg(), -123.0);
    }

    #[test]
    fn test_round_trip_modesto() {
        let p = GeodeticPoint::new(-121.0, 37.6).unwrap();
        let projector = Projector::new(Zone {
            number: utm_zone(p.lon),
            south: false,
        });

        let planar = projector.to_planar(&p);
        assert_eq!(planar.zone.number, 10);
        // Two degrees east of the -123 central meridian, mid latitudes
        assert!(planar.x > 600_000.0 && planar.x < 700_000.0);
        assert!(planar.y > 4_100_000.0 && planar.y < 4_220_000.0);

        // Round trip recovers the input to well under a meter
        // (1e-5 degrees is roughly a meter of longitude at this latitude)
        let back = projector.to_geodetic(&planar);
        assert!((back.lon - p.lon).abs() < 1.0e-5);
        assert!((back.lat - p.lat).abs() < 1.0e-5);
    }

    #[test]
    fn test_round_trip_various_points() {
        let cases = [
            (30.2447, 59.9559),  // St. Petersburg
            (-74.0060, 40.7128), // New York
            (151.2093, -33.8688), // Sydney
            (18.4241, -33.9249), // Cape Town
        ];

        for (lon, lat) in cases {
            let p = GeodeticPoint::new(lon, lat).unwrap();
            let (projector, _) = Projector::for_points(std::slice::from_ref(&p)).unwrap();
            let back = projector.to_geodetic(&projector.to_planar(&p));
            assert!(
                (back.lon - lon).abs() < 1.0e-5 && (back.lat - lat).abs() < 1.0e-5,
                "round trip drifted for ({}, {}): got ({}, {})",
                lon,
                lat,
                back.lon,
                back.lat
            );
        }
    }

    #[test]
    fn test_southern_hemisphere_northing() {
        let p = GeodeticPoint::new(151.2093, -33.8688).unwrap();
        let (projector, report) = Projector::for_points(std::slice::from_ref(&p)).unwrap();
        assert!(report.zone.south);

        let planar = projector.to_planar(&p);
        // False northing keeps southern coordinates positive
        assert!(planar.y > 0.0);
        assert!(planar.y > 5_000_000.0);
    }

    #[test]
    fn test_for_points_single_zone() {
        let points = vec![
            GeodeticPoint::new(-121.0018, 37.6391).unwrap(),
            GeodeticPoint::new(-121.0244, 37.6764).unwrap(),
        ];
        let (projector, report) = Projector::for_points(&points).unwrap();
        assert_eq!(projector.zone().number, 10);
        assert!(!report.zone.south);
        assert!(!report.spans_zones);
        // Both points sit about 2 degrees east of the -123 meridian
        assert!(report.max_meridian_offset_deg > 1.9);
        assert!(report.max_meridian_offset_deg < 2.1);
    }

    #[test]
    fn test_for_points_spanning_zones() {
        // -121 is zone 10, -115 is zone 11; mean longitude -118 picks zone 11
        let points = vec![
            GeodeticPoint::new(-121.0, 37.0).unwrap(),
            GeodeticPoint::new(-115.0, 37.0).unwrap(),
        ];
        let (projector, report) = Projector::for_points(&points).unwrap();
        assert_eq!(projector.zone().number, utm_zone(-118.0));
        assert!(report.spans_zones);
        assert!(report.max_meridian_offset_deg > 3.0);
    }

    #[test]
    fn test_for_points_empty() {
        assert_eq!(
            Projector::for_points(&[]).unwrap_err(),
            PipelineError::EmptyInput
        );
    }

    #[test]
    fn test_planar_distance_matches_geodesy() {
        // Downtown Modesto to Vintage Faire is roughly 4.5 km
        let a = GeodeticPoint::new(-121.0018, 37.6391).unwrap();
        let b = GeodeticPoint::new(-121.0244, 37.6764).unwrap();
        let (projector, _) = Projector::for_points(&[a, b]).unwrap();

        let dist = projector
            .to_planar(&a)
            .sq_dist(&projector.to_planar(&b))
            .sqrt();
        assert!(dist > 4_000.0 && dist < 5_000.0, "got {} m", dist);
    }
}
