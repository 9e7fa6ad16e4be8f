//! Lint collector: reads an ESLint JSON report (`eslint --format json`) and
//! derives error/warning totals plus a per-rule-family breakdown used by the
//! health score.

use std::path::Path;

use serde::Deserialize;

use crate::errors::GatecheckError;
use crate::metrics::LintIssueBreakdown;

#[derive(Debug, Deserialize)]
struct FileResult {
    #[serde(rename = "errorCount", default)]
    error_count: u32,

    #[serde(rename = "warningCount", default)]
    warning_count: u32,

    #[serde(default)]
    messages: Vec<LintMessage>,
}

#[derive(Debug, Deserialize)]
struct LintMessage {
    #[serde(rename = "ruleId")]
    rule_id: Option<String>,
}

#[derive(Debug, Default, PartialEq)]
pub struct LintSummary {
    pub errors: u32,
    pub warnings: u32,
    pub issues: LintIssueBreakdown,
}

pub fn parse_eslint_report(path: &Path, contents: &str) -> Result<LintSummary, GatecheckError> {
    let files: Vec<FileResult> = serde_json::from_str(contents)
        .map_err(|e| GatecheckError::parse(path, format!("invalid ESLint report: {}", e)))?;

    let mut summary = LintSummary::default();
    for file in &files {
        summary.errors += file.error_count;
        summary.warnings += file.warning_count;
        for message in &file.messages {
            classify_rule(message.rule_id.as_deref(), &mut summary.issues);
        }
    }
    Ok(summary)
}

fn classify_rule(rule_id: Option<&str>, issues: &mut LintIssueBreakdown) {
    match rule_id {
        Some(rule) if rule.ends_with("cognitive-complexity") => issues.cognitive_complexity += 1,
        Some(rule) if rule.ends_with("no-duplicate-string") => issues.duplicate_strings += 1,
        _ => issues.other += 1,
    }
}

pub fn collect(path: &Path) -> Option<LintSummary> {
    let contents = super::read_artifact(path)?;
    match parse_eslint_report(path, &contents) {
        Ok(summary) => Some(summary),
        Err(e) => {
            log::warn!("Skipping lint metrics: {}", e);
            None
        }
    }
}
