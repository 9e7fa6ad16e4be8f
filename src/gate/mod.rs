//! Quality-gate evaluation.
//!
//! Pure, accumulating rule evaluation: every applicable rule is checked and
//! its message collected; nothing short-circuits. Metrics that were not
//! measured are skipped, absence is never a violation.

use serde::Serialize;

use crate::config::QualityThresholds;
use crate::formatting::{format_bytes, format_duration_ms};
use crate::metrics::QualityMetrics;

#[derive(Debug, Clone, Default, Serialize)]
pub struct GateResult {
    pub passed: bool,
    pub failures: Vec<String>,
    pub warnings: Vec<String>,
}

/// Evaluate measured metrics against the thresholds.
///
/// Hard failures: type errors, lint errors, coverage below the minimum,
/// build time over the maximum. Advisory warnings: lint warnings, coverage
/// below target, build time over target, test time, bundle size.
pub fn evaluate(metrics: &QualityMetrics, thresholds: &QualityThresholds) -> GateResult {
    let mut failures = Vec::new();
    let mut warnings = Vec::new();

    if let Some(count) = metrics.type_errors {
        if count > thresholds.type_errors.maximum {
            failures.push(format!(
                "Type check found {} error(s) (maximum {})",
                count, thresholds.type_errors.maximum
            ));
        }
    }

    if let Some(count) = metrics.lint_errors {
        if count > thresholds.lint_errors.maximum {
            failures.push(format!(
                "Lint found {} error(s) (maximum {})",
                count, thresholds.lint_errors.maximum
            ));
        }
    }

    if let Some(count) = metrics.lint_warnings {
        if count > thresholds.lint_warnings.maximum {
            warnings.push(format!(
                "Lint warnings at {} exceed the allowed {}",
                count, thresholds.lint_warnings.maximum
            ));
        }
    }

    if let Some(coverage) = metrics.coverage {
        let bounds = &thresholds.coverage;
        if coverage <= bounds.minimum {
            failures.push(format!(
                "Test coverage {:.1}% is at or below the required {:.0}%",
                coverage, bounds.minimum
            ));
        } else if coverage < bounds.warning {
            warnings.push(format!(
                "Test coverage {:.1}% is below the {:.0}% target",
                coverage, bounds.warning
            ));
        }
    }

    if let Some(build_time) = metrics.build_time_ms {
        let bounds = &thresholds.build_time_ms;
        if build_time > bounds.maximum {
            failures.push(format!(
                "Build time {} exceeds the maximum {}",
                format_duration_ms(build_time),
                format_duration_ms(bounds.maximum)
            ));
        } else if build_time > bounds.warning {
            warnings.push(format!(
                "Build time {} exceeds the {} target",
                format_duration_ms(build_time),
                format_duration_ms(bounds.warning)
            ));
        }
    }

    if let Some(test_time) = metrics.test_time_ms {
        let bounds = &thresholds.test_time_ms;
        if test_time > bounds.warning {
            warnings.push(format!(
                "Test time {} exceeds the {} target",
                format_duration_ms(test_time),
                format_duration_ms(bounds.warning)
            ));
        }
    }

    // Bundle size is advisory in this configuration: breaches warn but do
    // not fail the gate.
    if let Some(bundle) = &metrics.bundle_size {
        let bounds = &thresholds.bundle_size;
        if bundle.total > bounds.maximum {
            warnings.push(format!(
                "Build size {} exceeds the {} limit",
                format_bytes(bundle.total),
                format_bytes(bounds.maximum)
            ));
        } else if bundle.total > bounds.warning {
            warnings.push(format!(
                "Build size {} exceeds the {} target",
                format_bytes(bundle.total),
                format_bytes(bounds.warning)
            ));
        }
    }

    GateResult {
        passed: failures.is_empty(),
        failures,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::BundleSize;

    fn thresholds() -> QualityThresholds {
        QualityThresholds::default()
    }

    fn clean_metrics() -> QualityMetrics {
        QualityMetrics {
            type_errors: Some(0),
            lint_errors: Some(0),
            lint_warnings: Some(0),
            coverage: Some(85.0),
            bundle_size: Some(BundleSize {
                total: 80 * 1024,
                javascript: None,
                css: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_metrics_pass() {
        let result = evaluate(&clean_metrics(), &thresholds());
        assert!(result.passed);
        assert!(result.failures.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_coverage_at_minimum_fails() {
        let metrics = QualityMetrics {
            type_errors: Some(0),
            lint_errors: Some(0),
            lint_warnings: Some(0),
            coverage: Some(60.0),
            ..Default::default()
        };
        let result = evaluate(&metrics, &thresholds());
        assert!(!result.passed);
        assert!(result.failures.iter().any(|f| f.contains("Test coverage")));
    }

    #[test]
    fn test_coverage_between_minimum_and_target_warns() {
        let metrics = QualityMetrics {
            coverage: Some(65.0),
            ..Default::default()
        };
        let result = evaluate(&metrics, &thresholds());
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("below the 70% target"));
    }

    #[test]
    fn test_oversized_bundle_warns_but_passes() {
        let mut metrics = clean_metrics();
        metrics.bundle_size = Some(BundleSize {
            total: 150 * 1024 * 1024,
            javascript: None,
            css: None,
        });
        let result = evaluate(&metrics, &thresholds());
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("Build size")));
    }

    #[test]
    fn test_type_errors_fail() {
        let mut metrics = clean_metrics();
        metrics.type_errors = Some(1);
        let result = evaluate(&metrics, &thresholds());
        assert!(!result.passed);
        assert_eq!(result.failures.len(), 1);
    }

    #[test]
    fn test_failures_accumulate() {
        let metrics = QualityMetrics {
            type_errors: Some(3),
            lint_errors: Some(2),
            coverage: Some(40.0),
            build_time_ms: Some(400_000),
            ..Default::default()
        };
        let result = evaluate(&metrics, &thresholds());
        assert!(!result.passed);
        assert_eq!(result.failures.len(), 4);
    }

    #[test]
    fn test_missing_metrics_are_skipped() {
        let result = evaluate(&QualityMetrics::default(), &thresholds());
        assert!(result.passed);
        assert!(result.failures.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_passed_matches_failures_invariant() {
        let mut metrics = clean_metrics();
        metrics.lint_warnings = Some(50);
        let result = evaluate(&metrics, &thresholds());
        assert_eq!(result.passed, result.failures.is_empty());
        assert!(!result.warnings.is_empty());
    }
}
