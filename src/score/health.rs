//! Composite health score.
//!
//! The score starts at 100 and subtracts fixed penalties per quality issue.
//! A failed quality gate caps the score at [`GATE_FAILURE_CEILING`] before
//! clamping, so hard failures always dominate otherwise-good metrics.

use crate::gate::GateResult;
use crate::metrics::QualityMetrics;

/// Average complexity above this level is penalized.
pub const GOOD_AVERAGE_COMPLEXITY: f64 = 10.0;
pub const COMPLEXITY_PENALTY: f64 = 10.0;

/// Maintainability points below this anchor each cost a fraction of a point.
pub const MAINTAINABILITY_ANCHOR: f64 = 90.0;
pub const MAINTAINABILITY_POINT_PENALTY: f64 = 0.5;

pub const LARGE_FILE_PENALTY: f64 = 2.0;
pub const COGNITIVE_ISSUE_PENALTY: f64 = 3.0;
pub const DUPLICATE_STRING_PENALTY: f64 = 1.0;
pub const OTHER_ISSUE_PENALTY: f64 = 0.5;
pub const DUPLICATION_POINT_PENALTY: f64 = 2.0;

/// Highest score reachable when the hard gate fails.
pub const GATE_FAILURE_CEILING: f64 = 59.0;

pub fn calculate_health_score(metrics: &QualityMetrics, gate: &GateResult) -> u8 {
    let mut score = 100.0;

    if let Some(complexity) = &metrics.complexity {
        if complexity.average > GOOD_AVERAGE_COMPLEXITY {
            score -= COMPLEXITY_PENALTY;
        }
    }

    if let Some(maintainability) = &metrics.maintainability {
        let deficit = (MAINTAINABILITY_ANCHOR - maintainability.index).max(0.0);
        score -= deficit * MAINTAINABILITY_POINT_PENALTY;
    }

    if let Some(large_files) = metrics.large_files {
        score -= large_files as f64 * LARGE_FILE_PENALTY;
    }

    if let Some(issues) = &metrics.lint_issues {
        score -= issues.cognitive_complexity as f64 * COGNITIVE_ISSUE_PENALTY;
        score -= issues.duplicate_strings as f64 * DUPLICATE_STRING_PENALTY;
        score -= issues.other as f64 * OTHER_ISSUE_PENALTY;
    }

    if let Some(duplication) = &metrics.duplication {
        score -= duplication.percentage.max(0.0) * DUPLICATION_POINT_PENALTY;
    }

    if !gate.passed {
        score = score.min(GATE_FAILURE_CEILING);
    }

    score.clamp(0.0, 100.0).round() as u8
}
