//! The unified quality report.
//!
//! A report is constructed once per run as a pure function of the collected
//! metrics and the thresholds; it is never mutated afterwards. The metric
//! groups mirror how CI consumers read the output: performance, basic
//! quality, and advanced quality.

mod recommendations;

pub use recommendations::{generate_recommendations, ALL_CLEAR};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::QualityThresholds;
use crate::gate::{self, GateResult};
use crate::metrics::{
    BundleSize, ComplexityStats, DuplicationStats, LintIssueBreakdown, Maintainability,
    QualityMetrics, Rating,
};
use crate::score::{self, MetricName};

#[derive(Debug, Clone, Serialize)]
pub struct UnifiedQualityReport {
    pub generated_at: DateTime<Utc>,
    pub performance: PerformanceMetrics,
    pub basic: BasicQualityMetrics,
    pub advanced: AdvancedQualityMetrics,
    /// Normalized 0-100 sub-scores for each measured metric.
    pub scores: BTreeMap<MetricName, f64>,
    /// 0-100 composite, capped below 60 when the gate fails.
    pub health_score: u8,
    pub gate: GateResult,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceMetrics {
    pub build_time_ms: Option<u64>,
    pub test_time_ms: Option<u64>,
    pub bundle_size: Option<BundleSize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BasicQualityMetrics {
    pub type_errors: Option<u32>,
    pub lint_errors: Option<u32>,
    pub lint_warnings: Option<u32>,
    pub coverage: Option<f64>,
    pub complexity: Option<ComplexityStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvancedQualityMetrics {
    pub maintainability: Option<Maintainability>,
    pub maintainability_rating: Option<Rating>,
    pub duplication: Option<DuplicationStats>,
    pub large_files: Option<u32>,
    pub lint_issues: Option<LintIssueBreakdown>,
}

/// Assemble the full report: gate decision, normalized scores, health score,
/// and recommendations.
pub fn build_report(
    metrics: &QualityMetrics,
    thresholds: &QualityThresholds,
) -> UnifiedQualityReport {
    let gate = gate::evaluate(metrics, thresholds);
    let scores = score::normalize_scores(metrics, thresholds);
    let health_score = score::calculate_health_score(metrics, &gate);
    let recommendations = generate_recommendations(metrics, thresholds);

    UnifiedQualityReport {
        generated_at: Utc::now(),
        performance: PerformanceMetrics {
            build_time_ms: metrics.build_time_ms,
            test_time_ms: metrics.test_time_ms,
            bundle_size: metrics.bundle_size,
        },
        basic: BasicQualityMetrics {
            type_errors: metrics.type_errors,
            lint_errors: metrics.lint_errors,
            lint_warnings: metrics.lint_warnings,
            coverage: metrics.coverage,
            complexity: metrics.complexity,
        },
        advanced: AdvancedQualityMetrics {
            maintainability: metrics.maintainability,
            maintainability_rating: metrics.maintainability.map(|m| m.rating()),
            duplication: metrics.duplication,
            large_files: metrics.large_files,
            lint_issues: metrics.lint_issues,
        },
        scores,
        health_score,
        gate,
        recommendations,
    }
}
