//! Runtime log-level configuration store.
//!
//! Holds a global level plus per-target overrides, mirroring the four verbs
//! of the admin API: get (read), set (replace), patch (merge), reset
//! (restore defaults). Mutations are applied to the `log` facade's max
//! level so they take effect immediately.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::response::AdminError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn parse(s: &str) -> Result<Self, AdminError> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(AdminError::Invalid(format!("unknown log level '{}'", other))),
        }
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogLevelConfig {
    pub global: LogLevel,
    #[serde(default)]
    pub overrides: BTreeMap<String, LogLevel>,
}

/// Partial update: only the supplied fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogLevelPatch {
    pub global: Option<LogLevel>,
    #[serde(default)]
    pub overrides: BTreeMap<String, LogLevel>,
}

#[derive(Debug)]
pub struct LogLevelStore {
    default_level: LogLevel,
    state: RwLock<LogLevelConfig>,
}

impl LogLevelStore {
    pub fn new(default_level: LogLevel) -> Self {
        Self {
            default_level,
            state: RwLock::new(LogLevelConfig {
                global: default_level,
                overrides: BTreeMap::new(),
            }),
        }
    }

    /// GET: the current configuration.
    pub fn current(&self) -> LogLevelConfig {
        self.state.read().clone()
    }

    /// POST: replace the whole configuration.
    pub fn replace(&self, config: LogLevelConfig) -> LogLevelConfig {
        let mut state = self.state.write();
        *state = config;
        apply(state.global);
        state.clone()
    }

    /// PATCH: merge a partial update into the current configuration.
    pub fn merge(&self, patch: LogLevelPatch) -> LogLevelConfig {
        let mut state = self.state.write();
        if let Some(global) = patch.global {
            state.global = global;
        }
        state.overrides.extend(patch.overrides);
        apply(state.global);
        state.clone()
    }

    /// DELETE: drop all overrides and restore the default global level.
    pub fn reset(&self) -> LogLevelConfig {
        let mut state = self.state.write();
        state.global = self.default_level;
        state.overrides.clear();
        apply(state.global);
        state.clone()
    }

    /// Effective level for a target, falling back to the global level.
    pub fn level_for(&self, target: &str) -> LogLevel {
        let state = self.state.read();
        state.overrides.get(target).copied().unwrap_or(state.global)
    }
}

fn apply(level: LogLevel) {
    log::set_max_level(level.into());
}
