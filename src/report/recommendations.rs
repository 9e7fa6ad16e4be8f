//! Recommendation generation.
//!
//! Each triggered threshold breach yields one imperative recommendation.
//! Ordering is fixed by metric category (errors, coverage, performance,
//! complexity, maintainability, duplication), not by severity.

use crate::config::QualityThresholds;
use crate::metrics::QualityMetrics;

pub const ALL_CLEAR: &str = "Code quality is excellent - keep it up";

pub fn generate_recommendations(
    metrics: &QualityMetrics,
    thresholds: &QualityThresholds,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    // Errors
    if let Some(count) = metrics.type_errors {
        if count > thresholds.type_errors.maximum {
            recommendations.push(format!("Fix the {} type error(s) before merging", count));
        }
    }
    if let Some(count) = metrics.lint_errors {
        if count > thresholds.lint_errors.maximum {
            recommendations.push(format!("Resolve the {} outstanding lint error(s)", count));
        }
    }
    if let Some(count) = metrics.lint_warnings {
        if count > thresholds.lint_warnings.maximum {
            recommendations.push(format!(
                "Reduce lint warnings below {} (currently {})",
                thresholds.lint_warnings.maximum, count
            ));
        }
    }

    // Coverage
    if let Some(coverage) = metrics.coverage {
        if coverage < thresholds.coverage.warning {
            recommendations.push(format!(
                "Raise test coverage above {:.0}% (currently {:.1}%)",
                thresholds.coverage.warning, coverage
            ));
        }
    }

    // Performance
    if let Some(build_time) = metrics.build_time_ms {
        if build_time > thresholds.build_time_ms.warning {
            recommendations.push("Investigate build time regressions and trim slow steps".into());
        }
    }
    if let Some(bundle) = &metrics.bundle_size {
        if bundle.total > thresholds.bundle_size.warning {
            recommendations
                .push("Reduce the build output size with code splitting or pruning".into());
        }
    }

    // Complexity
    if let Some(complexity) = &metrics.complexity {
        if complexity.average > thresholds.complexity.average_warning {
            recommendations.push(format!(
                "Refactor hotspots to bring average complexity under {:.0}",
                thresholds.complexity.average_warning
            ));
        }
        if (complexity.max as f64) > thresholds.complexity.individual_warning {
            recommendations.push(format!(
                "Split functions with cyclomatic complexity above {:.0}",
                thresholds.complexity.individual_warning
            ));
        }
    }

    // Maintainability
    if let Some(maintainability) = &metrics.maintainability {
        if maintainability.index < thresholds.maintainability.warning {
            recommendations.push(format!(
                "Improve the maintainability index above {:.0} (currently {:.1}, rated {})",
                thresholds.maintainability.warning,
                maintainability.index,
                maintainability.rating()
            ));
        }
    }

    // Duplication
    if let Some(duplication) = &metrics.duplication {
        if duplication.percentage > thresholds.duplication.warning {
            recommendations.push(format!(
                "Deduplicate code below {:.0}% (currently {:.1}%)",
                thresholds.duplication.warning, duplication.percentage
            ));
        }
    }

    if recommendations.is_empty() {
        recommendations.push(ALL_CLEAR.to_string());
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{BundleSize, ComplexityStats, DuplicationStats, Maintainability};

    #[test]
    fn test_all_clear_on_perfect_report() {
        let metrics = QualityMetrics {
            type_errors: Some(0),
            lint_errors: Some(0),
            lint_warnings: Some(0),
            coverage: Some(90.0),
            maintainability: Some(Maintainability { index: 92.0 }),
            duplication: Some(DuplicationStats { percentage: 1.0 }),
            ..Default::default()
        };
        let recs = generate_recommendations(&metrics, &QualityThresholds::default());
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("excellent"));
    }

    #[test]
    fn test_category_order_is_fixed() {
        let metrics = QualityMetrics {
            type_errors: Some(2),
            coverage: Some(50.0),
            build_time_ms: Some(280_000),
            complexity: Some(ComplexityStats {
                average: 9.0,
                max: 10,
            }),
            maintainability: Some(Maintainability { index: 60.0 }),
            duplication: Some(DuplicationStats { percentage: 8.0 }),
            ..Default::default()
        };
        let recs = generate_recommendations(&metrics, &QualityThresholds::default());
        assert_eq!(recs.len(), 6);
        assert!(recs[0].contains("type error"));
        assert!(recs[1].contains("coverage"));
        assert!(recs[2].contains("build time"));
        assert!(recs[3].contains("complexity"));
        assert!(recs[4].contains("maintainability"));
        assert!(recs[5].contains("Deduplicate"));
    }

    #[test]
    fn test_missing_metrics_trigger_nothing() {
        let recs = generate_recommendations(&QualityMetrics::default(), &QualityThresholds::default());
        assert_eq!(recs, vec![ALL_CLEAR.to_string()]);
    }

    #[test]
    fn test_bundle_recommendation() {
        let metrics = QualityMetrics {
            bundle_size: Some(BundleSize {
                total: 90 * 1024 * 1024,
                javascript: None,
                css: None,
            }),
            ..Default::default()
        };
        let recs = generate_recommendations(&metrics, &QualityThresholds::default());
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("build output"));
    }
}
