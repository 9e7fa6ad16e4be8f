//! GitHub Actions integration.
//!
//! Two wire contracts: the Markdown step summary appended to the file named
//! by `GITHUB_STEP_SUMMARY`, and `key=value` lines appended to the file named
//! by `GITHUB_OUTPUT` (`quality_gate_passed`, `quality_gate_failures`,
//! `quality_gate_warnings`). Both are no-ops outside GitHub Actions.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::gate::GateResult;

pub const STEP_SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";
pub const OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Append the markdown summary to a step-summary file.
pub fn append_step_summary(path: &Path, markdown: &str) -> Result<()> {
    append(path, markdown)
}

/// Append the gate outputs in `key=value` form.
pub fn append_gate_outputs(path: &Path, gate: &GateResult) -> Result<()> {
    let lines = format_gate_outputs(gate);
    append(path, &lines)
}

pub fn format_gate_outputs(gate: &GateResult) -> String {
    format!(
        "quality_gate_passed={}\nquality_gate_failures={}\nquality_gate_warnings={}\n",
        gate.passed,
        gate.failures.len(),
        gate.warnings.len()
    )
}

/// Emit summary and outputs when the corresponding environment variables are
/// set, as they are inside a GitHub Actions step.
pub fn emit_github_outputs(markdown: &str, gate: &GateResult) -> Result<()> {
    if let Some(path) = std::env::var_os(STEP_SUMMARY_ENV) {
        append_step_summary(Path::new(&path), markdown)?;
    }
    if let Some(path) = std::env::var_os(OUTPUT_ENV) {
        append_gate_outputs(Path::new(&path), gate)?;
    }
    Ok(())
}

fn append(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn failing_gate() -> GateResult {
        GateResult {
            passed: false,
            failures: vec!["Type check found 1 error(s)".into()],
            warnings: vec!["Lint warnings at 12 exceed the allowed 10".into()],
        }
    }

    #[test]
    fn test_format_gate_outputs() {
        let output = format_gate_outputs(&failing_gate());
        assert_eq!(
            output,
            "quality_gate_passed=false\nquality_gate_failures=1\nquality_gate_warnings=1\n"
        );
    }

    #[test]
    fn test_append_gate_outputs_appends() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("github_output");
        fs::write(&path, "existing=1\n").unwrap();

        append_gate_outputs(&path, &failing_gate()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("existing=1\n"));
        assert!(contents.contains("quality_gate_passed=false"));
    }

    #[test]
    fn test_append_step_summary_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("summary.md");
        append_step_summary(&path, "# Quality Report\n").unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("Quality Report"));
    }
}
