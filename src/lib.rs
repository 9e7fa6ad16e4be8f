// Export modules for library usage
pub mod admin;
pub mod ci;
pub mod cli;
pub mod collectors;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod gate;
pub mod io;
pub mod metrics;
pub mod output;
pub mod report;
pub mod score;

// Re-export commonly used types
pub use crate::config::{GatecheckConfig, QualityThresholds};
pub use crate::errors::GatecheckError;
pub use crate::gate::{evaluate, GateResult};
pub use crate::metrics::{
    BundleSize, ComplexityStats, DuplicationStats, LintIssueBreakdown, Maintainability,
    QualityMetrics, Rating,
};
pub use crate::report::{build_report, generate_recommendations, UnifiedQualityReport};
pub use crate::score::{calculate_health_score, normalize_scores, MetricName};
