//! Complexity/maintainability collector: reads the analysis report emitted
//! by the complexity tool (`metrics/complexity.json`).

use std::path::Path;

use serde::Deserialize;

use crate::errors::GatecheckError;
use crate::metrics::{ComplexityStats, DuplicationStats, Maintainability};

#[derive(Debug, Deserialize)]
pub struct ComplexityReport {
    #[serde(rename = "averageComplexity")]
    pub average_complexity: Option<f64>,

    #[serde(rename = "maxComplexity")]
    pub max_complexity: Option<u32>,

    #[serde(rename = "maintainabilityIndex")]
    pub maintainability_index: Option<f64>,

    #[serde(rename = "duplicationPercentage")]
    pub duplication_percentage: Option<f64>,
}

#[derive(Debug, Default)]
pub struct ComplexityMetrics {
    pub complexity: Option<ComplexityStats>,
    pub maintainability: Option<Maintainability>,
    pub duplication: Option<DuplicationStats>,
}

pub fn parse_complexity_report(
    path: &Path,
    contents: &str,
) -> Result<ComplexityReport, GatecheckError> {
    serde_json::from_str(contents)
        .map_err(|e| GatecheckError::parse(path, format!("invalid complexity report: {}", e)))
}

impl From<ComplexityReport> for ComplexityMetrics {
    fn from(report: ComplexityReport) -> Self {
        let complexity = match (report.average_complexity, report.max_complexity) {
            (Some(average), Some(max)) => Some(ComplexityStats { average, max }),
            // A report with only an average still carries signal
            (Some(average), None) => Some(ComplexityStats {
                average,
                max: average.ceil() as u32,
            }),
            _ => None,
        };
        Self {
            complexity,
            maintainability: report
                .maintainability_index
                .map(|index| Maintainability { index }),
            duplication: report
                .duplication_percentage
                .map(|percentage| DuplicationStats { percentage }),
        }
    }
}

pub fn collect(path: &Path) -> ComplexityMetrics {
    let Some(contents) = super::read_artifact(path) else {
        return ComplexityMetrics::default();
    };
    match parse_complexity_report(path, &contents) {
        Ok(report) => report.into(),
        Err(e) => {
            log::warn!("Skipping complexity metrics: {}", e);
            ComplexityMetrics::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_complexity_report() {
        let json = r#"{"averageComplexity": 6.2, "maxComplexity": 18, "maintainabilityIndex": 82.5, "duplicationPercentage": 3.1}"#;
        let report = parse_complexity_report(&PathBuf::from("complexity.json"), json).unwrap();
        let metrics: ComplexityMetrics = report.into();

        let complexity = metrics.complexity.unwrap();
        assert_eq!(complexity.average, 6.2);
        assert_eq!(complexity.max, 18);
        assert_eq!(metrics.maintainability.unwrap().index, 82.5);
        assert_eq!(metrics.duplication.unwrap().percentage, 3.1);
    }

    #[test]
    fn test_empty_report_yields_no_metrics() {
        let report = parse_complexity_report(&PathBuf::from("complexity.json"), "{}").unwrap();
        let metrics: ComplexityMetrics = report.into();
        assert!(metrics.complexity.is_none());
        assert!(metrics.maintainability.is_none());
        assert!(metrics.duplication.is_none());
    }
}
