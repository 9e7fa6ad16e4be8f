use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::config::{self, GatecheckConfig};
use crate::formatting::FormattingConfig;
use crate::output::generate_markdown_report;
use crate::{ci, collectors, gate, report};

pub struct GateCommand {
    pub path: PathBuf,
    pub config: Option<PathBuf>,
    pub verbosity: u8,
    pub formatting: FormattingConfig,
}

/// Run the quality gate: collect, evaluate, print, emit CI outputs, and
/// fail the process when the gate fails.
pub fn run(command: GateCommand) -> Result<()> {
    let config = resolve_config(&command.path, command.config.as_deref())?;
    let metrics = collectors::collect_all(&command.path, &config);
    let result = gate::evaluate(&metrics, &config.thresholds);

    print_result(&result, command.verbosity, command.formatting);

    let quality_report = report::build_report(&metrics, &config.thresholds);
    let markdown =
        generate_markdown_report(&quality_report, &config.thresholds, command.formatting);
    ci::emit_github_outputs(&markdown, &result)?;

    if result.passed {
        Ok(())
    } else {
        anyhow::bail!("Quality gate failed")
    }
}

pub(crate) fn resolve_config(
    root: &std::path::Path,
    explicit: Option<&std::path::Path>,
) -> Result<GatecheckConfig> {
    match explicit {
        Some(path) => Ok(config::load_config_from_path(path)?),
        None => Ok(config::load_config(root)),
    }
}

fn print_result(result: &gate::GateResult, verbosity: u8, formatting: FormattingConfig) {
    let use_color = formatting.color.should_use_color();

    for failure in &result.failures {
        let label = if use_color {
            "FAIL".red().bold().to_string()
        } else {
            "FAIL".to_string()
        };
        eprintln!("{} {}", label, failure);
    }
    for warning in &result.warnings {
        let label = if use_color {
            "WARN".yellow().to_string()
        } else {
            "WARN".to_string()
        };
        eprintln!("{} {}", label, warning);
    }

    if result.passed {
        println!(
            "Quality gate passed ({} warning(s))",
            result.warnings.len()
        );
    } else {
        println!(
            "Quality gate failed: {} failure(s), {} warning(s)",
            result.failures.len(),
            result.warnings.len()
        );
    }

    if verbosity > 0 && result.failures.is_empty() && result.warnings.is_empty() {
        println!("All measured metrics are within thresholds");
    }
}
