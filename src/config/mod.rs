mod core;
mod loader;
mod thresholds;

pub use core::{
    AdminSettings, AnalysisSettings, ArtifactPaths, GatecheckConfig, RateLimitSettings,
};
pub use loader::{
    directory_ancestors, load_config, load_config_from_path, parse_config, CONFIG_FILE_NAME,
};
pub use thresholds::{
    BandThreshold, CeilingThreshold, ComplexityThresholds, CountLimit, FloorThreshold,
    QualityThresholds,
};
