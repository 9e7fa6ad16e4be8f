use std::fs;
use std::path::{Path, PathBuf};

use super::core::GatecheckConfig;
use crate::errors::GatecheckError;

pub const CONFIG_FILE_NAME: &str = ".gatecheck.toml";

/// Parse a configuration file's contents.
pub fn parse_config(contents: &str) -> Result<GatecheckConfig, String> {
    toml::from_str::<GatecheckConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Load configuration from an explicit path. Unlike discovery, a missing or
/// malformed file here is an error the caller asked for.
pub fn load_config_from_path(path: &Path) -> Result<GatecheckConfig, GatecheckError> {
    let contents = fs::read_to_string(path).map_err(|e| GatecheckError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&contents).map_err(|message| GatecheckError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Try loading config from a specific path, falling back to `None` on any
/// problem. Parse errors are surfaced as warnings, read errors other than
/// "not found" are logged.
fn try_load_config_from_path(config_path: &Path) -> Option<GatecheckConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

/// Directory ancestors of `start`, up to a depth limit.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Discover `.gatecheck.toml` starting at `root` and walking up; defaults
/// when nothing is found.
pub fn load_config(root: &Path) -> GatecheckConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(root.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config_rejects_bad_toml() {
        assert!(parse_config("thresholds = not toml").is_err());
    }

    #[test]
    fn test_load_config_defaults_when_missing() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path());
        assert_eq!(config.thresholds.coverage.minimum, 60.0);
    }

    #[test]
    fn test_load_config_finds_file_in_ancestor() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[thresholds.coverage]\nminimum = 80.0\nwarning = 90.0\n",
        )
        .unwrap();
        let nested = temp.path().join("packages/app");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config(&nested);
        assert_eq!(config.thresholds.coverage.minimum, 80.0);
    }

    #[test]
    fn test_load_config_from_path_missing_is_error() {
        let temp = TempDir::new().unwrap();
        let result = load_config_from_path(&temp.path().join("nope.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_directory_ancestors_depth_limit() {
        let ancestors: Vec<_> =
            directory_ancestors(PathBuf::from("/a/b/c/d/e"), 3).collect();
        assert_eq!(ancestors.len(), 3);
        assert_eq!(ancestors[0], PathBuf::from("/a/b/c/d/e"));
        assert_eq!(ancestors[2], PathBuf::from("/a/b/c"));
    }
}
