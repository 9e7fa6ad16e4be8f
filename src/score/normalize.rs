//! Threshold-anchored metric normalization.
//!
//! Maps each measured metric onto a common 0–100 scale so heterogeneous
//! units (milliseconds, bytes, percentages, counts) can be compared and
//! aggregated. Every score is clamped to [0, 100]; unmeasured metrics are
//! omitted rather than scored.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::QualityThresholds;
use crate::metrics::QualityMetrics;

/// Complexity at or below this level scores a full 100.
pub const EXCELLENT_COMPLEXITY: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricName {
    BuildTime,
    TestTime,
    BundleSize,
    Coverage,
    ComplexityAverage,
    ComplexityMax,
    Duplication,
    Maintainability,
}

impl std::fmt::Display for MetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MetricName::BuildTime => "build_time",
            MetricName::TestTime => "test_time",
            MetricName::BundleSize => "bundle_size",
            MetricName::Coverage => "coverage",
            MetricName::ComplexityAverage => "complexity_average",
            MetricName::ComplexityMax => "complexity_max",
            MetricName::Duplication => "duplication",
            MetricName::Maintainability => "maintainability",
        };
        write!(f, "{}", name)
    }
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// Lower-is-better metric: 100 at or below `target`, 0 at or above `maximum`,
/// linear in between.
pub fn normalize_ceiling(value: f64, target: f64, maximum: f64) -> f64 {
    if maximum <= target {
        return if value <= target { 100.0 } else { 0.0 };
    }
    clamp_score(100.0 * (maximum - value) / (maximum - target))
}

/// Higher-is-better metric: 0 at or below `minimum`, 100 at or above `target`.
pub fn normalize_floor(value: f64, minimum: f64, target: f64) -> f64 {
    if target <= minimum {
        return if value >= target { 100.0 } else { 0.0 };
    }
    clamp_score(100.0 * (value - minimum) / (target - minimum))
}

/// Normalize every measured metric. Missing metrics produce no entry.
pub fn normalize_scores(
    metrics: &QualityMetrics,
    thresholds: &QualityThresholds,
) -> BTreeMap<MetricName, f64> {
    let mut scores = BTreeMap::new();

    if let Some(ms) = metrics.build_time_ms {
        scores.insert(
            MetricName::BuildTime,
            normalize_ceiling(
                ms as f64,
                thresholds.build_time_ms.warning as f64,
                thresholds.build_time_ms.maximum as f64,
            ),
        );
    }

    if let Some(ms) = metrics.test_time_ms {
        scores.insert(
            MetricName::TestTime,
            normalize_ceiling(
                ms as f64,
                thresholds.test_time_ms.warning as f64,
                thresholds.test_time_ms.maximum as f64,
            ),
        );
    }

    if let Some(bundle) = &metrics.bundle_size {
        scores.insert(
            MetricName::BundleSize,
            normalize_ceiling(
                bundle.total as f64,
                thresholds.bundle_size.warning as f64,
                thresholds.bundle_size.maximum as f64,
            ),
        );
    }

    if let Some(coverage) = metrics.coverage {
        scores.insert(
            MetricName::Coverage,
            normalize_floor(
                coverage,
                thresholds.coverage.minimum,
                thresholds.coverage.warning,
            ),
        );
    }

    if let Some(complexity) = &metrics.complexity {
        scores.insert(
            MetricName::ComplexityAverage,
            normalize_ceiling(
                complexity.average,
                EXCELLENT_COMPLEXITY,
                thresholds.complexity.average_maximum,
            ),
        );
        scores.insert(
            MetricName::ComplexityMax,
            normalize_ceiling(
                complexity.max as f64,
                EXCELLENT_COMPLEXITY,
                thresholds.complexity.individual_maximum,
            ),
        );
    }

    if let Some(duplication) = &metrics.duplication {
        scores.insert(
            MetricName::Duplication,
            normalize_ceiling(duplication.percentage, 0.0, thresholds.duplication.maximum),
        );
    }

    if let Some(maintainability) = &metrics.maintainability {
        scores.insert(
            MetricName::Maintainability,
            clamp_score(maintainability.index),
        );
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{BundleSize, ComplexityStats, DuplicationStats};

    #[test]
    fn test_ceiling_at_target_is_100() {
        assert_eq!(normalize_ceiling(240_000.0, 240_000.0, 300_000.0), 100.0);
    }

    #[test]
    fn test_ceiling_at_maximum_is_0() {
        assert_eq!(normalize_ceiling(300_000.0, 240_000.0, 300_000.0), 0.0);
    }

    #[test]
    fn test_ceiling_linear_midpoint() {
        assert_eq!(normalize_ceiling(270_000.0, 240_000.0, 300_000.0), 50.0);
    }

    #[test]
    fn test_ceiling_clamps_out_of_domain() {
        assert_eq!(normalize_ceiling(-50.0, 100.0, 200.0), 100.0);
        assert_eq!(normalize_ceiling(1e12, 100.0, 200.0), 0.0);
    }

    #[test]
    fn test_floor_coverage_bounds() {
        assert_eq!(normalize_floor(60.0, 60.0, 70.0), 0.0);
        assert_eq!(normalize_floor(70.0, 60.0, 70.0), 100.0);
        assert_eq!(normalize_floor(65.0, 60.0, 70.0), 50.0);
        assert_eq!(normalize_floor(95.0, 60.0, 70.0), 100.0);
    }

    #[test]
    fn test_missing_metrics_are_omitted() {
        let scores = normalize_scores(&QualityMetrics::default(), &QualityThresholds::default());
        assert!(scores.is_empty());
    }

    #[test]
    fn test_zero_duplication_scores_100() {
        let metrics = QualityMetrics {
            duplication: Some(DuplicationStats { percentage: 0.0 }),
            ..Default::default()
        };
        let scores = normalize_scores(&metrics, &QualityThresholds::default());
        assert_eq!(scores[&MetricName::Duplication], 100.0);
    }

    #[test]
    fn test_duplication_at_maximum_scores_0() {
        let metrics = QualityMetrics {
            duplication: Some(DuplicationStats { percentage: 10.0 }),
            ..Default::default()
        };
        let scores = normalize_scores(&metrics, &QualityThresholds::default());
        assert_eq!(scores[&MetricName::Duplication], 0.0);
    }

    #[test]
    fn test_excellent_complexity_scores_100() {
        let metrics = QualityMetrics {
            complexity: Some(ComplexityStats {
                average: 4.0,
                max: 5,
            }),
            ..Default::default()
        };
        let scores = normalize_scores(&metrics, &QualityThresholds::default());
        assert_eq!(scores[&MetricName::ComplexityAverage], 100.0);
        assert_eq!(scores[&MetricName::ComplexityMax], 100.0);
    }

    #[test]
    fn test_complexity_at_maximum_scores_0() {
        let metrics = QualityMetrics {
            complexity: Some(ComplexityStats {
                average: 10.0,
                max: 20,
            }),
            ..Default::default()
        };
        let scores = normalize_scores(&metrics, &QualityThresholds::default());
        assert_eq!(scores[&MetricName::ComplexityAverage], 0.0);
        assert_eq!(scores[&MetricName::ComplexityMax], 0.0);
    }

    #[test]
    fn test_bundle_size_scoring() {
        let metrics = QualityMetrics {
            bundle_size: Some(BundleSize {
                total: 80 * 1024 * 1024,
                javascript: None,
                css: None,
            }),
            ..Default::default()
        };
        let scores = normalize_scores(&metrics, &QualityThresholds::default());
        assert_eq!(scores[&MetricName::BundleSize], 100.0);
    }
}
