//! Coverage collector: reads the Istanbul-style `coverage-summary.json`
//! written by the coverage reporter and extracts total statement coverage.

use std::path::Path;

use serde::Deserialize;

use crate::errors::GatecheckError;

#[derive(Debug, Deserialize)]
struct CoverageSummary {
    total: TotalCoverage,
}

#[derive(Debug, Deserialize)]
struct TotalCoverage {
    statements: CoverageEntry,
}

#[derive(Debug, Deserialize)]
struct CoverageEntry {
    pct: f64,
}

/// Parse a coverage summary document into a statement coverage percentage.
pub fn parse_coverage_summary(path: &Path, contents: &str) -> Result<f64, GatecheckError> {
    let summary: CoverageSummary = serde_json::from_str(contents)
        .map_err(|e| GatecheckError::parse(path, format!("invalid coverage summary: {}", e)))?;
    Ok(summary.total.statements.pct)
}

/// Best-effort collection: a missing or malformed summary yields `None`.
pub fn collect(path: &Path) -> Option<f64> {
    let contents = super::read_artifact(path)?;
    match parse_coverage_summary(path, &contents) {
        Ok(pct) => Some(pct),
        Err(e) => {
            log::warn!("Skipping coverage metric: {}", e);
            None
        }
    }
}
