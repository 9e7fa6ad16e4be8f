mod json;
mod markdown;
mod terminal;

pub use json::generate_json_report;
pub use markdown::generate_markdown_report;
pub use terminal::generate_terminal_report;

use std::path::PathBuf;

use anyhow::Result;

use crate::config::QualityThresholds;
use crate::formatting::FormattingConfig;
use crate::report::UnifiedQualityReport;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Render a report in the requested format.
pub fn render_report(
    report: &UnifiedQualityReport,
    thresholds: &QualityThresholds,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Result<String> {
    match format {
        OutputFormat::Json => generate_json_report(report),
        OutputFormat::Markdown => Ok(generate_markdown_report(report, thresholds, formatting)),
        OutputFormat::Terminal => Ok(generate_terminal_report(report, formatting)),
    }
}

/// Send rendered output to a file or stdout.
pub fn write_output(content: &str, output_file: Option<PathBuf>) -> Result<()> {
    if let Some(path) = output_file {
        if let Some(parent) = path.parent() {
            crate::io::ensure_dir(parent)?;
        }
        crate::io::write_file(&path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}
