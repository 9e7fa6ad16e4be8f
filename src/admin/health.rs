//! Health snapshot for a hosting transport's health endpoint.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HealthSnapshot {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub version: &'static str,
    pub environment: String,
    pub system: SystemInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    pub pid: u32,
    /// Resident set size in bytes, when the platform exposes it.
    pub memory_bytes: Option<u64>,
}

pub fn snapshot(started_at: Instant) -> HealthSnapshot {
    HealthSnapshot {
        status: "ok",
        timestamp: Utc::now(),
        uptime_seconds: started_at.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION"),
        environment: std::env::var("GATECHECK_ENV").unwrap_or_else(|_| "development".to_string()),
        system: SystemInfo {
            pid: std::process::id(),
            memory_bytes: resident_memory_bytes(),
        },
    }
}

#[cfg(target_os = "linux")]
fn resident_memory_bytes() -> Option<u64> {
    let statm = std::fs::read_to_string("/proc/self/statm").ok()?;
    let resident_pages: u64 = statm.split_whitespace().nth(1)?.parse().ok()?;
    Some(resident_pages * 4096)
}

#[cfg(not(target_os = "linux"))]
fn resident_memory_bytes() -> Option<u64> {
    None
}
