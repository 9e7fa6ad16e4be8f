//! Markdown report renderer for CI step summaries and saved reports.
//!
//! Pure string templating: fixed sections, one metric/value/status row per
//! measured field, deterministic for a given report.

use std::fmt::Write as _;

use crate::config::QualityThresholds;
use crate::formatting::{format_bytes, format_duration_ms, FormattingConfig, Status};
use crate::report::UnifiedQualityReport;

pub fn generate_markdown_report(
    report: &UnifiedQualityReport,
    thresholds: &QualityThresholds,
    formatting: FormattingConfig,
) -> String {
    let glyphs = formatting.glyphs.should_use_glyphs();
    let mut out = String::new();

    writeln!(out, "# Quality Report").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "**Health Score:** {}/100", report.health_score).unwrap();
    let gate_status = if report.gate.passed {
        Status::Pass
    } else {
        Status::Fail
    };
    writeln!(
        out,
        "**Quality Gate:** {} {}",
        gate_status.glyph(glyphs),
        if report.gate.passed { "Passed" } else { "Failed" }
    )
    .unwrap();

    writeln!(out).unwrap();
    writeln!(out, "## Performance Metrics").unwrap();
    writeln!(out).unwrap();
    table_header(&mut out);
    if let Some(ms) = report.performance.build_time_ms {
        row(
            &mut out,
            "Build Time",
            &format_duration_ms(ms),
            ceiling_status(ms, thresholds.build_time_ms.warning, thresholds.build_time_ms.maximum),
            glyphs,
        );
    }
    if let Some(ms) = report.performance.test_time_ms {
        row(
            &mut out,
            "Test Time",
            &format_duration_ms(ms),
            ceiling_status(ms, thresholds.test_time_ms.warning, thresholds.test_time_ms.maximum),
            glyphs,
        );
    }
    if let Some(bundle) = &report.performance.bundle_size {
        // Bundle size never fails the gate, so its row tops out at a warning
        let status = match ceiling_status(
            bundle.total,
            thresholds.bundle_size.warning,
            thresholds.bundle_size.maximum,
        ) {
            Status::Fail => Status::Warn,
            status => status,
        };
        row(
            &mut out,
            "Bundle Size",
            &format_bytes(bundle.total),
            status,
            glyphs,
        );
    }

    writeln!(out).unwrap();
    writeln!(out, "## Code Quality").unwrap();
    writeln!(out).unwrap();
    table_header(&mut out);
    if let Some(count) = report.basic.type_errors {
        row(
            &mut out,
            "Type Errors",
            &count.to_string(),
            count_status(count, thresholds.type_errors.maximum),
            glyphs,
        );
    }
    if let Some(count) = report.basic.lint_errors {
        row(
            &mut out,
            "Lint Errors",
            &count.to_string(),
            count_status(count, thresholds.lint_errors.maximum),
            glyphs,
        );
    }
    if let Some(count) = report.basic.lint_warnings {
        let status = if count > thresholds.lint_warnings.maximum {
            Status::Warn
        } else {
            Status::Pass
        };
        row(&mut out, "Lint Warnings", &count.to_string(), status, glyphs);
    }
    if let Some(coverage) = report.basic.coverage {
        let status = if coverage <= thresholds.coverage.minimum {
            Status::Fail
        } else if coverage < thresholds.coverage.warning {
            Status::Warn
        } else {
            Status::Pass
        };
        row(
            &mut out,
            "Coverage",
            &format!("{:.1}%", coverage),
            status,
            glyphs,
        );
    }
    if let Some(complexity) = &report.basic.complexity {
        let avg_status = float_ceiling_status(
            complexity.average,
            thresholds.complexity.average_warning,
            thresholds.complexity.average_maximum,
        );
        row(
            &mut out,
            "Avg Complexity",
            &format!("{:.1}", complexity.average),
            avg_status,
            glyphs,
        );
        let max_status = float_ceiling_status(
            complexity.max as f64,
            thresholds.complexity.individual_warning,
            thresholds.complexity.individual_maximum,
        );
        row(
            &mut out,
            "Max Complexity",
            &complexity.max.to_string(),
            max_status,
            glyphs,
        );
    }

    writeln!(out).unwrap();
    writeln!(out, "## Advanced Metrics").unwrap();
    writeln!(out).unwrap();
    table_header(&mut out);
    if let Some(maintainability) = &report.advanced.maintainability {
        let status = if maintainability.index < thresholds.maintainability.minimum {
            Status::Fail
        } else if maintainability.index < thresholds.maintainability.warning {
            Status::Warn
        } else {
            Status::Pass
        };
        row(
            &mut out,
            "Maintainability",
            &format!("{:.1} ({})", maintainability.index, maintainability.rating()),
            status,
            glyphs,
        );
    }
    if let Some(duplication) = &report.advanced.duplication {
        let status = float_ceiling_status(
            duplication.percentage,
            thresholds.duplication.warning,
            thresholds.duplication.maximum,
        );
        row(
            &mut out,
            "Duplication",
            &format!("{:.1}%", duplication.percentage),
            status,
            glyphs,
        );
    }
    if let Some(count) = report.advanced.large_files {
        let status = if count > 0 { Status::Warn } else { Status::Pass };
        row(&mut out, "Large Files", &count.to_string(), status, glyphs);
    }

    if !report.gate.failures.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "## Failures").unwrap();
        writeln!(out).unwrap();
        for failure in &report.gate.failures {
            writeln!(out, "- {}", failure).unwrap();
        }
    }

    if !report.gate.warnings.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "## Warnings").unwrap();
        writeln!(out).unwrap();
        for warning in &report.gate.warnings {
            writeln!(out, "- {}", warning).unwrap();
        }
    }

    writeln!(out).unwrap();
    writeln!(out, "## Recommendations").unwrap();
    writeln!(out).unwrap();
    for recommendation in &report.recommendations {
        writeln!(out, "- {}", recommendation).unwrap();
    }

    out
}

fn table_header(out: &mut String) {
    writeln!(out, "| Metric | Value | Status |").unwrap();
    writeln!(out, "|--------|-------|--------|").unwrap();
}

fn row(out: &mut String, metric: &str, value: &str, status: Status, glyphs: bool) {
    writeln!(out, "| {} | {} | {} |", metric, value, status.glyph(glyphs)).unwrap();
}

fn ceiling_status(value: u64, warning: u64, maximum: u64) -> Status {
    if value > maximum {
        Status::Fail
    } else if value > warning {
        Status::Warn
    } else {
        Status::Pass
    }
}

fn float_ceiling_status(value: f64, warning: f64, maximum: f64) -> Status {
    if value > maximum {
        Status::Fail
    } else if value > warning {
        Status::Warn
    } else {
        Status::Pass
    }
}

fn count_status(count: u32, maximum: u32) -> Status {
    if count > maximum {
        Status::Fail
    } else {
        Status::Pass
    }
}
