use gatecheck::config::QualityThresholds;
use gatecheck::gate::evaluate;
use gatecheck::metrics::{
    ComplexityStats, DuplicationStats, LintIssueBreakdown, Maintainability, QualityMetrics,
};
use gatecheck::score::{calculate_health_score, normalize_scores};
use proptest::prelude::*;

fn arb_metrics() -> impl Strategy<Value = QualityMetrics> {
    (
        proptest::option::of(0u32..50),
        proptest::option::of(0u32..50),
        proptest::option::of(0u32..200),
        proptest::option::of(0.0f64..100.0),
        proptest::option::of((0.0f64..40.0, 0u32..100)),
        proptest::option::of(0.0f64..100.0),
        proptest::option::of(0.0f64..50.0),
        proptest::option::of(0u32..40),
        proptest::option::of((0u32..20, 0u32..20, 0u32..50)),
    )
        .prop_map(
            |(
                type_errors,
                lint_errors,
                lint_warnings,
                coverage,
                complexity,
                maintainability,
                duplication,
                large_files,
                lint_issues,
            )| {
                QualityMetrics {
                    type_errors,
                    lint_errors,
                    lint_warnings,
                    coverage,
                    complexity: complexity.map(|(average, max)| ComplexityStats { average, max }),
                    maintainability: maintainability.map(|index| Maintainability { index }),
                    duplication: duplication.map(|percentage| DuplicationStats { percentage }),
                    large_files,
                    lint_issues: lint_issues.map(|(cognitive_complexity, duplicate_strings, other)| {
                        LintIssueBreakdown {
                            cognitive_complexity,
                            duplicate_strings,
                            other,
                        }
                    }),
                    ..Default::default()
                }
            },
        )
}

proptest! {
    #[test]
    fn health_score_stays_in_range(metrics in arb_metrics()) {
        let thresholds = QualityThresholds::default();
        let gate = evaluate(&metrics, &thresholds);
        let score = calculate_health_score(&metrics, &gate);
        prop_assert!(score <= 100);
    }

    #[test]
    fn failed_gate_caps_health_score(metrics in arb_metrics()) {
        let thresholds = QualityThresholds::default();
        let gate = evaluate(&metrics, &thresholds);
        let score = calculate_health_score(&metrics, &gate);
        if !gate.passed {
            prop_assert!(score <= 59, "score {} with failed gate", score);
        }
    }

    #[test]
    fn normalized_scores_stay_in_range(metrics in arb_metrics()) {
        let thresholds = QualityThresholds::default();
        for (name, value) in normalize_scores(&metrics, &thresholds) {
            prop_assert!(
                (0.0..=100.0).contains(&value),
                "{} normalized to {}",
                name,
                value
            );
        }
    }

    #[test]
    fn gate_passed_iff_no_failures(metrics in arb_metrics()) {
        let result = evaluate(&metrics, &QualityThresholds::default());
        prop_assert_eq!(result.passed, result.failures.is_empty());
    }

    #[test]
    fn adding_type_errors_never_helps(metrics in arb_metrics()) {
        let thresholds = QualityThresholds::default();
        let baseline = evaluate(&metrics, &thresholds);

        let mut worse = metrics.clone();
        worse.type_errors = Some(metrics.type_errors.unwrap_or(0) + 1);
        let degraded = evaluate(&worse, &thresholds);

        prop_assert!(!degraded.passed || baseline.passed);
        prop_assert!(degraded.failures.len() >= baseline.failures.len());
    }
}
