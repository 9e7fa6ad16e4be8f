//! Core metric types shared across collection, gating, and reporting.
//!
//! Every non-trivial field on [`QualityMetrics`] is optional: not every CI
//! run produces every measurement, and an absent metric is skipped by the
//! gate and the scorers rather than treated as zero or perfect.

use serde::{Deserialize, Serialize};

/// A flat record of everything the collectors could measure for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub type_errors: Option<u32>,
    pub lint_errors: Option<u32>,
    pub lint_warnings: Option<u32>,
    /// Statement coverage percentage in [0, 100].
    pub coverage: Option<f64>,
    pub complexity: Option<ComplexityStats>,
    pub maintainability: Option<Maintainability>,
    pub duplication: Option<DuplicationStats>,
    pub build_time_ms: Option<u64>,
    pub test_time_ms: Option<u64>,
    pub bundle_size: Option<BundleSize>,
    /// Lint findings broken down by rule family, used by the health score.
    pub lint_issues: Option<LintIssueBreakdown>,
    /// Number of source files over the configured length limit.
    pub large_files: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexityStats {
    pub average: f64,
    pub max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Maintainability {
    /// Maintainability index in [0, 100].
    pub index: f64,
}

impl Maintainability {
    pub fn rating(&self) -> Rating {
        Rating::from_index(self.index)
    }
}

/// Letter rating derived from the maintainability index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    A,
    B,
    C,
    D,
}

impl Rating {
    pub fn from_index(index: f64) -> Self {
        if index >= 85.0 {
            Rating::A
        } else if index >= 70.0 {
            Rating::B
        } else if index >= 50.0 {
            Rating::C
        } else {
            Rating::D
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::A => write!(f, "A"),
            Rating::B => write!(f, "B"),
            Rating::C => write!(f, "C"),
            Rating::D => write!(f, "D"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DuplicationStats {
    /// Duplicated-code percentage in [0, 100].
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BundleSize {
    /// Total output size in bytes.
    pub total: u64,
    pub javascript: Option<u64>,
    pub css: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LintIssueBreakdown {
    pub cognitive_complexity: u32,
    pub duplicate_strings: u32,
    pub other: u32,
}

impl QualityMetrics {
    /// True when no collector produced anything at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
