// Configuration d'apparence, lue une seule fois au démarrage

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::switcher::transition::DEFAULT_DURATION_MS;

const APP_DIR: &str = "split-theme-switcher";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub transition_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
    pub pattern_spacing: f32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            transition_ms: DEFAULT_DURATION_MS,
            window_width: 960.0,
            window_height: 640.0,
            pattern_spacing: 70.0,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// `<config dir>/split-theme-switcher/config.json`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.json"))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig =
            serde_json::from_str(content).map_err(|source| ConfigError::Parse {
                path: PathBuf::new(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file at [`AppConfig::default_path`]. Platforms without a
    /// config directory get the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.transition_ms == 0 || self.transition_ms > 10_000 {
            return Err(ConfigError::Invalid {
                field: "transition_ms",
                reason: format!("{} is outside 1..=10000", self.transition_ms),
            });
        }
        for (field, value) in [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{value} must be a positive size"),
                });
            }
        }
        if !(self.pattern_spacing.is_finite() && self.pattern_spacing >= 4.0) {
            return Err(ConfigError::Invalid {
                field: "pattern_spacing",
                reason: format!("{} must be at least 4", self.pattern_spacing),
            });
        }
        Ok(())
    }

    pub fn transition_secs(&self) -> f64 {
        self.transition_ms as f64 / 1000.0
    }

    /// Directory for rolling log files.
    pub fn log_dir() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join("logs"))
    }
}
