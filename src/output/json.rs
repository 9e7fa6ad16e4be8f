use anyhow::Result;

use crate::report::UnifiedQualityReport;

pub fn generate_json_report(report: &UnifiedQualityReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
