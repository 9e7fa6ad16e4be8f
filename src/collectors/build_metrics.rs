//! Build metrics collector: reads `metrics/latest.json` as written by the
//! build pipeline. Field names are the artifact's wire names (camelCase) and
//! must not change.

use std::path::Path;

use serde::Deserialize;

use crate::errors::GatecheckError;
use crate::metrics::BundleSize;

#[derive(Debug, Default, Deserialize)]
pub struct BuildMetrics {
    #[serde(rename = "buildTime")]
    pub build_time_ms: Option<u64>,

    #[serde(rename = "testTime")]
    pub test_time_ms: Option<u64>,

    #[serde(rename = "bundleSize")]
    pub bundle_size: Option<RawBundleSize>,
}

#[derive(Debug, Deserialize)]
pub struct RawBundleSize {
    pub total: u64,
    pub javascript: Option<u64>,
    pub css: Option<u64>,
}

impl From<RawBundleSize> for BundleSize {
    fn from(raw: RawBundleSize) -> Self {
        Self {
            total: raw.total,
            javascript: raw.javascript,
            css: raw.css,
        }
    }
}

pub fn parse_build_metrics(path: &Path, contents: &str) -> Result<BuildMetrics, GatecheckError> {
    serde_json::from_str(contents)
        .map_err(|e| GatecheckError::parse(path, format!("invalid build metrics: {}", e)))
}

pub fn collect(path: &Path) -> BuildMetrics {
    let Some(contents) = super::read_artifact(path) else {
        return BuildMetrics::default();
    };
    match parse_build_metrics(path, &contents) {
        Ok(metrics) => metrics,
        Err(e) => {
            log::warn!("Skipping build metrics: {}", e);
            BuildMetrics::default()
        }
    }
}
