//! Terminal renderer: colored summary plus a metric table.

use std::fmt::Write as _;

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::formatting::{format_bytes, format_duration_ms, FormattingConfig};
use crate::report::UnifiedQualityReport;

pub fn generate_terminal_report(
    report: &UnifiedQualityReport,
    formatting: FormattingConfig,
) -> String {
    let use_color = formatting.color.should_use_color();
    let mut out = String::new();

    let verdict = if report.gate.passed {
        maybe_color("PASSED", use_color, |s| s.green().bold().to_string())
    } else {
        maybe_color("FAILED", use_color, |s| s.red().bold().to_string())
    };
    writeln!(out, "Quality gate: {}", verdict).unwrap();
    writeln!(out, "Health score: {}/100", report.health_score).unwrap();
    writeln!(out).unwrap();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Value", "Score"]);

    for (name, score) in &report.scores {
        table.add_row(vec![
            Cell::new(name.to_string()),
            Cell::new(metric_value(report, name)),
            Cell::new(format!("{:.0}", score)),
        ]);
    }
    writeln!(out, "{table}").unwrap();

    for failure in &report.gate.failures {
        let label = maybe_color("FAIL", use_color, |s| s.red().to_string());
        writeln!(out, "  {} {}", label, failure).unwrap();
    }
    for warning in &report.gate.warnings {
        let label = maybe_color("WARN", use_color, |s| s.yellow().to_string());
        writeln!(out, "  {} {}", label, warning).unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "Recommendations:").unwrap();
    for recommendation in &report.recommendations {
        writeln!(out, "  - {}", recommendation).unwrap();
    }

    out
}

fn maybe_color(text: &str, use_color: bool, paint: impl Fn(&str) -> String) -> String {
    if use_color {
        paint(text)
    } else {
        text.to_string()
    }
}

fn metric_value(report: &UnifiedQualityReport, name: &crate::score::MetricName) -> String {
    use crate::score::MetricName::*;
    match name {
        BuildTime => report
            .performance
            .build_time_ms
            .map(format_duration_ms)
            .unwrap_or_default(),
        TestTime => report
            .performance
            .test_time_ms
            .map(format_duration_ms)
            .unwrap_or_default(),
        BundleSize => report
            .performance
            .bundle_size
            .as_ref()
            .map(|b| format_bytes(b.total))
            .unwrap_or_default(),
        Coverage => report
            .basic
            .coverage
            .map(|c| format!("{:.1}%", c))
            .unwrap_or_default(),
        ComplexityAverage => report
            .basic
            .complexity
            .as_ref()
            .map(|c| format!("{:.1}", c.average))
            .unwrap_or_default(),
        ComplexityMax => report
            .basic
            .complexity
            .as_ref()
            .map(|c| c.max.to_string())
            .unwrap_or_default(),
        Duplication => report
            .advanced
            .duplication
            .as_ref()
            .map(|d| format!("{:.1}%", d.percentage))
            .unwrap_or_default(),
        Maintainability => report
            .advanced
            .maintainability
            .as_ref()
            .map(|m| format!("{:.1}", m.index))
            .unwrap_or_default(),
    }
}
