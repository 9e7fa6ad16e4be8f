//! Best-effort metric collection.
//!
//! Each collector reads one tool's report artifact and contributes its slice
//! of [`QualityMetrics`]. A collector that cannot produce a value (missing
//! file, malformed report) yields nothing for that metric; the pipeline
//! never fails because a measurement is unavailable.

pub mod build_metrics;
pub mod complexity;
pub mod coverage;
pub mod large_files;
pub mod lint;
pub mod process;
pub mod typecheck;

use std::fs;
use std::path::Path;

use crate::config::GatecheckConfig;
use crate::metrics::QualityMetrics;

pub use process::{run_tool, ToolOutput};

/// Read an artifact file, treating absence as normal and anything else as a
/// logged warning.
pub(crate) fn read_artifact(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("Artifact not present: {}", path.display());
            None
        }
        Err(e) => {
            log::warn!("Failed to read {}: {}", path.display(), e);
            None
        }
    }
}

/// Run every collector against the project root and assemble the metrics
/// record. Collectors are independent and run sequentially.
pub fn collect_all(root: &Path, config: &GatecheckConfig) -> QualityMetrics {
    let artifacts = &config.artifacts;

    let mut metrics = QualityMetrics {
        coverage: coverage::collect(&root.join(&artifacts.coverage_summary)),
        type_errors: typecheck::collect(&root.join(&artifacts.typecheck_log)),
        ..Default::default()
    };

    let build = build_metrics::collect(&root.join(&artifacts.build_metrics));
    metrics.build_time_ms = build.build_time_ms;
    metrics.test_time_ms = build.test_time_ms;
    metrics.bundle_size = build.bundle_size.map(Into::into);

    if let Some(lint) = lint::collect(&root.join(&artifacts.eslint_report)) {
        metrics.lint_errors = Some(lint.errors);
        metrics.lint_warnings = Some(lint.warnings);
        metrics.lint_issues = Some(lint.issues);
    }

    let analysis = complexity::collect(&root.join(&artifacts.complexity_report));
    metrics.complexity = analysis.complexity;
    metrics.maintainability = analysis.maintainability;
    metrics.duplication = analysis.duplication;

    metrics.large_files = large_files::count_large_files(
        root,
        &config.analysis.source_dirs,
        &config.analysis.source_extensions,
        config.thresholds.max_file_length,
    );

    metrics
}
