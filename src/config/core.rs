use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::thresholds::QualityThresholds;

/// Top-level configuration parsed from `.gatecheck.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatecheckConfig {
    #[serde(default)]
    pub thresholds: QualityThresholds,

    #[serde(default)]
    pub artifacts: ArtifactPaths,

    #[serde(default)]
    pub analysis: AnalysisSettings,

    /// Settings for the admin control plane (log-level API).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminSettings>,
}

/// Locations of the report artifacts the collectors read, relative to the
/// project root. These match the layout the measured toolchain writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactPaths {
    #[serde(default = "default_coverage_summary")]
    pub coverage_summary: PathBuf,

    #[serde(default = "default_build_metrics")]
    pub build_metrics: PathBuf,

    #[serde(default = "default_complexity_report")]
    pub complexity_report: PathBuf,

    #[serde(default = "default_eslint_report")]
    pub eslint_report: PathBuf,

    #[serde(default = "default_typecheck_log")]
    pub typecheck_log: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            coverage_summary: default_coverage_summary(),
            build_metrics: default_build_metrics(),
            complexity_report: default_complexity_report(),
            eslint_report: default_eslint_report(),
            typecheck_log: default_typecheck_log(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Directories scanned by the large-file collector.
    #[serde(default = "default_source_dirs")]
    pub source_dirs: Vec<String>,

    /// File extensions counted as source files.
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            source_dirs: default_source_dirs(),
            source_extensions: default_source_extensions(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminSettings {
    /// Bearer keys accepted by the log-level API.
    #[serde(default)]
    pub api_keys: Vec<String>,

    /// Origins allowed to call the log-level API.
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    #[serde(default)]
    pub rate_limit: RateLimitSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitSettings {
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,

    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_seconds: default_window_seconds(),
        }
    }
}

fn default_coverage_summary() -> PathBuf {
    PathBuf::from("coverage/coverage-summary.json")
}
fn default_build_metrics() -> PathBuf {
    PathBuf::from("metrics/latest.json")
}
fn default_complexity_report() -> PathBuf {
    PathBuf::from("metrics/complexity.json")
}
fn default_eslint_report() -> PathBuf {
    PathBuf::from("eslint-report.json")
}
fn default_typecheck_log() -> PathBuf {
    PathBuf::from("typecheck.log")
}
fn default_source_dirs() -> Vec<String> {
    vec!["src".to_string()]
}
fn default_source_extensions() -> Vec<String> {
    ["ts", "tsx", "js", "jsx"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_max_requests() -> u32 {
    10
}
fn default_window_seconds() -> u64 {
    60
}
