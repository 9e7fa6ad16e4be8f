//! Error types for gatecheck operations.
//!
//! Collectors deliberately do not use these to abort a run: a metric that
//! cannot be measured is omitted, not fatal. The typed errors cover the
//! places where failure must be reported to the caller (explicit config
//! paths, output writing, admin operations).

use std::path::PathBuf;

use thiserror::Error;

use crate::admin::AdminError;

#[derive(Debug, Error)]
pub enum GatecheckError {
    /// File system I/O errors (read, write, permissions)
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Report artifact or configuration parsing failures
    #[error("{message}")]
    Parse { path: PathBuf, message: String },

    /// Configuration validation failures
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Admin control-plane errors
    #[error(transparent)]
    Admin(#[from] AdminError),
}

impl GatecheckError {
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}
