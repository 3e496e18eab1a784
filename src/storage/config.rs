//! Athlete profile and application configuration.
//!
//! Stored as TOML in the platform data directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::metrics::analytics::{
    AnalyticsResult, AthleteVo2maxProfile, PdPoint, ThresholdAthleteProfile,
};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Athlete performance data
    pub athlete: AthleteSettings,
    /// Session search settings
    pub optimizer: OptimizerSettings,
    /// Log output settings
    pub logging: LoggingSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            athlete: AthleteSettings::default(),
            optimizer: OptimizerSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// Athlete performance data used to build session profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AthleteSettings {
    /// Functional Threshold Power in watts
    pub ftp: u32,
    /// Time to exhaustion at FTP in seconds (curve default when unset)
    pub tte_at_ftp_secs: Option<f64>,
    /// Time to exhaustion at 120% FTP in minutes
    pub tte_120_min: f64,
    /// Time to exhaustion at 106% FTP in minutes
    pub tte_106_min: f64,
    /// Power-duration curve samples
    pub pd_points: Vec<PdPoint>,
}

impl Default for AthleteSettings {
    fn default() -> Self {
        Self {
            ftp: 200,
            tte_at_ftp_secs: None,
            tte_120_min: 5.0,
            tte_106_min: 20.0,
            pd_points: Vec::new(),
        }
    }
}

impl AthleteSettings {
    /// Profile for threshold and sweet-spot sessions.
    pub fn threshold_profile(&self) -> AnalyticsResult<ThresholdAthleteProfile> {
        ThresholdAthleteProfile::new(self.ftp, self.tte_at_ftp_secs, self.pd_points.iter().copied())
    }

    /// Profile for VO2max sessions.
    pub fn vo2max_profile(&self) -> AnalyticsResult<AthleteVo2maxProfile> {
        AthleteVo2maxProfile::new(self.ftp, self.tte_120_min, self.tte_106_min)
    }
}

/// Session search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerSettings {
    /// Spread the VO2max grid search across threads
    pub parallel: bool,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when RUST_LOG is unset
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "intervalforge", "IntervalForge")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load configuration from a file; a missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let data_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(get_data_dir);

    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig {
            data_dir,
            ..Default::default()
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = data_dir;

    Ok(config)
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save configuration to a file, creating parent directories.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    tracing::info!("Saved config to {}", path.display());
    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
