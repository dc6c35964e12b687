#[cfg(test)]
mod tests {
    use crate::error::PipelineError;
    use crate::generate::{SOURCE_KEY, SOURCE_NOISE, modesto_demo};
    use crate::pipeline::{AnalysisConfig, analyze};
    use crate::point::{GeodeticPoint, NOISE_LABEL, PointRecord};

    #[test]
    fn test_config_validation() {
        assert_eq!(
            AnalysisConfig {
                eps: 0.0,
                min_samples: 5
            }
            .validate(),
            Err(PipelineError::InvalidEps(0.0))
        );
        assert_eq!(
            AnalysisConfig {
                eps: 250.0,
                min_samples: 0
            }
            .validate(),
            Err(PipelineError::InvalidMinSamples(0))
        );
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(
            analyze(Vec::new(), &AnalysisConfig::default()).unwrap_err(),
            PipelineError::EmptyInput
        );
    }

    #[test]
    fn test_modesto_scenario() {
        // Two 0.002 degree hotspots more than a kilometer apart plus 40
        // county-wide background points; eps=250m, min_samples=5 must
        // resolve exactly the two hotspots.
        let records = modesto_demo(42).unwrap();
        let result = analyze(records, &AnalysisConfig::default()).unwrap();

        assert_eq!(result.records.len(), 130);
        assert_eq!(result.labels.len(), 130);
        assert_eq!(result.clusters.len(), 2);

        let combined: usize = result.clusters.iter().map(|c| c.size).sum();
        assert!(
            (80..=100).contains(&combined),
            "combined cluster size {} outside [80, 100]",
            combined
        );

        // Most of the 40 background points stay noise
        assert!(
            result.statistics.noise_count >= 30,
            "only {} noise points",
            result.statistics.noise_count
        );
        assert_eq!(
            result.statistics.noise_count + combined,
            result.records.len()
        );

        // Background points far from both hotspots must be labeled noise;
        // count how many of the labeled-noise points are background draws
        let background_noise = result
            .records
            .iter()
            .zip(&result.labels)
            .filter(|(r, label)| {
                **label == NOISE_LABEL && r.attributes[SOURCE_KEY] == SOURCE_NOISE
            })
            .count();
        assert!(background_noise >= 30);

        // Centroids sit near the configured hotspot centers
        for cluster in &result.clusters {
            let near_downtown = (cluster.centroid.lon - (-121.0018)).abs() < 0.01
                && (cluster.centroid.lat - 37.6391).abs() < 0.01;
            let near_mall = (cluster.centroid.lon - (-121.0244)).abs() < 0.01
                && (cluster.centroid.lat - 37.6764).abs() < 0.01;
            assert!(
                near_downtown || near_mall,
                "cluster {} centroid ({}, {}) matches no hotspot",
                cluster.id,
                cluster.centroid.lon,
                cluster.centroid.lat
            );
        }

        // Modesto sits in UTM zone 10 north
        assert_eq!(result.zone_report.zone.number, 10);
        assert!(!result.zone_report.zone.south);
        assert!(!result.zone_report.spans_zones);
    }

    #[test]
    fn test_analysis_deterministic() {
        let records = modesto_demo(42).unwrap();
        let first = analyze(records.clone(), &AnalysisConfig::default()).unwrap();
        let second = analyze(records, &AnalysisConfig::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tiny_eps_all_noise() {
        let records = modesto_demo(42).unwrap();
        let total = records.len();
        let config = AnalysisConfig {
            eps: 0.0001,
            min_samples: 2,
        };
        let result = analyze(records, &config).unwrap();

        assert!(result.clusters.is_empty());
        assert_eq!(result.statistics.noise_count, total);
        assert!(result.labels.iter().all(|&label| label == NOISE_LABEL));
    }

    #[test]
    fn test_min_samples_one_labels_everything() {
        let records = modesto_demo(42).unwrap();
        let config = AnalysisConfig {
            eps: 250.0,
            min_samples: 1,
        };
        let result = analyze(records, &config).unwrap();

        assert_eq!(result.statistics.noise_count, 0);
        assert!(result.labels.iter().all(|&label| label != NOISE_LABEL));
    }

    #[test]
    fn test_single_supplied_record() {
        let records = vec![PointRecord::new(
            0,
            GeodeticPoint::new(-121.0, 37.6).unwrap(),
        )];
        let result = analyze(records, &AnalysisConfig::default()).unwrap();

        assert_eq!(result.labels, vec![NOISE_LABEL]);
        assert!(result.clusters.is_empty());
        assert_eq!(result.statistics.noise_ratio, 1.0);
    }
}
