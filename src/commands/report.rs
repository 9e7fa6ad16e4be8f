use std::path::PathBuf;

use anyhow::Result;

use crate::formatting::FormattingConfig;
use crate::output::{self, OutputFormat};
use crate::{ci, collectors, report};

pub struct ReportCommand {
    pub path: PathBuf,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

/// Build the unified quality report and render it.
pub fn run(command: ReportCommand) -> Result<()> {
    let config = super::gate::resolve_config(&command.path, command.config.as_deref())?;
    let metrics = collectors::collect_all(&command.path, &config);
    let quality_report = report::build_report(&metrics, &config.thresholds);

    let rendered = output::render_report(
        &quality_report,
        &config.thresholds,
        command.format,
        command.formatting,
    )?;
    output::write_output(&rendered, command.output)?;

    let markdown = output::generate_markdown_report(
        &quality_report,
        &config.thresholds,
        command.formatting,
    );
    ci::emit_github_outputs(&markdown, &quality_report.gate)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_writes_json_file() {
        // Keep the test from appending to a hosting CI job's files
        std::env::remove_var(ci::STEP_SUMMARY_ENV);
        std::env::remove_var(ci::OUTPUT_ENV);
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("coverage")).unwrap();
        std::fs::write(
            temp.path().join("coverage/coverage-summary.json"),
            r#"{"total": {"statements": {"pct": 91.5}}}"#,
        )
        .unwrap();
        let out_path = temp.path().join("report.json");

        run(ReportCommand {
            path: temp.path().to_path_buf(),
            config: None,
            format: OutputFormat::Json,
            output: Some(out_path.clone()),
            formatting: FormattingConfig::plain(),
        })
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out_path).unwrap()).unwrap();
        assert_eq!(value["basic"]["coverage"], 91.5);
        assert_eq!(value["gate"]["passed"], true);
    }
}
