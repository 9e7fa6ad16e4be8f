use serde::{Deserialize, Serialize};

/// Quality gate thresholds.
///
/// Each metric carries either a `minimum`/`warning` pair (higher is better,
/// e.g. coverage) or a `warning`/`maximum` pair (lower is better, e.g. build
/// time). Values between `warning` and the hard bound produce advisory
/// warnings; values past the hard bound fail the gate, except for metrics
/// that are advisory by design (bundle size, test time, lint warnings).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityThresholds {
    /// Maximum allowed type-check errors (default: 0)
    #[serde(default = "default_type_errors")]
    pub type_errors: CountLimit,

    /// Maximum allowed lint errors (default: 0)
    #[serde(default = "default_lint_errors")]
    pub lint_errors: CountLimit,

    /// Maximum allowed lint warnings before an advisory warning (default: 10)
    #[serde(default = "default_lint_warnings")]
    pub lint_warnings: CountLimit,

    /// Coverage floor: below `minimum` fails, below `warning` warns
    #[serde(default = "default_coverage")]
    pub coverage: FloorThreshold,

    /// Build time ceiling in milliseconds
    #[serde(default = "default_build_time")]
    pub build_time_ms: CeilingThreshold,

    /// Test time ceiling in milliseconds (advisory only)
    #[serde(default = "default_test_time")]
    pub test_time_ms: CeilingThreshold,

    /// Bundle size ceiling in bytes (advisory only)
    #[serde(default = "default_bundle_size")]
    pub bundle_size: CeilingThreshold,

    /// Cyclomatic complexity bounds
    #[serde(default)]
    pub complexity: ComplexityThresholds,

    /// Duplication percentage bounds
    #[serde(default = "default_duplication")]
    pub duplication: BandThreshold,

    /// Maintainability index floor
    #[serde(default = "default_maintainability")]
    pub maintainability: FloorThreshold,

    /// Source files longer than this count as large files (lines)
    #[serde(default = "default_max_file_length")]
    pub max_file_length: usize,
}

/// A bare `maximum` count bound.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CountLimit {
    pub maximum: u32,
}

/// Higher-is-better metric: failing below `minimum`, warning below `warning`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FloorThreshold {
    pub minimum: f64,
    pub warning: f64,
}

/// Lower-is-better metric: warning above `warning`, hard bound at `maximum`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CeilingThreshold {
    pub warning: u64,
    pub maximum: u64,
}

/// Lower-is-better percentage metric with fractional bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BandThreshold {
    pub warning: f64,
    pub maximum: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComplexityThresholds {
    /// Per-function complexity that triggers a warning (default: 15)
    #[serde(default = "default_individual_warning")]
    pub individual_warning: f64,

    /// Per-function complexity hard bound (default: 20)
    #[serde(default = "default_individual_maximum")]
    pub individual_maximum: f64,

    /// Average complexity that triggers a warning (default: 8)
    #[serde(default = "default_average_warning")]
    pub average_warning: f64,

    /// Average complexity hard bound (default: 10)
    #[serde(default = "default_average_maximum")]
    pub average_maximum: f64,
}

impl Default for ComplexityThresholds {
    fn default() -> Self {
        Self {
            individual_warning: default_individual_warning(),
            individual_maximum: default_individual_maximum(),
            average_warning: default_average_warning(),
            average_maximum: default_average_maximum(),
        }
    }
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            type_errors: default_type_errors(),
            lint_errors: default_lint_errors(),
            lint_warnings: default_lint_warnings(),
            coverage: default_coverage(),
            build_time_ms: default_build_time(),
            test_time_ms: default_test_time(),
            bundle_size: default_bundle_size(),
            complexity: ComplexityThresholds::default(),
            duplication: default_duplication(),
            maintainability: default_maintainability(),
            max_file_length: default_max_file_length(),
        }
    }
}

// Default threshold values
fn default_type_errors() -> CountLimit {
    CountLimit { maximum: 0 }
}
fn default_lint_errors() -> CountLimit {
    CountLimit { maximum: 0 }
}
fn default_lint_warnings() -> CountLimit {
    CountLimit { maximum: 10 }
}
fn default_coverage() -> FloorThreshold {
    FloorThreshold {
        minimum: 60.0,
        warning: 70.0,
    }
}
fn default_build_time() -> CeilingThreshold {
    CeilingThreshold {
        warning: 240_000,
        maximum: 300_000,
    }
}
fn default_test_time() -> CeilingThreshold {
    CeilingThreshold {
        warning: 60_000,
        maximum: 120_000,
    }
}
fn default_bundle_size() -> CeilingThreshold {
    CeilingThreshold {
        warning: 80 * 1024 * 1024,
        maximum: 100 * 1024 * 1024,
    }
}
fn default_duplication() -> BandThreshold {
    BandThreshold {
        warning: 5.0,
        maximum: 10.0,
    }
}
fn default_maintainability() -> FloorThreshold {
    FloorThreshold {
        minimum: 50.0,
        warning: 85.0,
    }
}
fn default_max_file_length() -> usize {
    300
}
fn default_individual_warning() -> f64 {
    15.0
}
fn default_individual_maximum() -> f64 {
    20.0
}
fn default_average_warning() -> f64 {
    8.0
}
fn default_average_maximum() -> f64 {
    10.0
}
