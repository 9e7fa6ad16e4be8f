use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Gatecheck Configuration

[thresholds.coverage]
minimum = 60.0
warning = 70.0

[thresholds.lint_warnings]
maximum = 10

[thresholds.build_time_ms]
warning = 240000
maximum = 300000

[thresholds.bundle_size]
warning = 83886080
maximum = 104857600

[artifacts]
coverage_summary = "coverage/coverage-summary.json"
build_metrics = "metrics/latest.json"
eslint_report = "eslint-report.json"
typecheck_log = "typecheck.log"

[analysis]
source_dirs = ["src"]
source_extensions = ["ts", "tsx", "js", "jsx"]
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    #[test]
    fn test_default_config_template_parses() {
        // The template written by init must be valid config
        let template = r#"
[thresholds.coverage]
minimum = 60.0
warning = 70.0

[analysis]
source_dirs = ["src"]
"#;
        let config = parse_config(template).unwrap();
        assert_eq!(config.thresholds.coverage.warning, 70.0);
    }
}
