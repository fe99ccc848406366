use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::check::Thresholds;
use crate::check::thresholds::{DEFAULT_CRIT_PERCENT, DEFAULT_WARN_PERCENT};
use crate::error::ConfigError;
use crate::logging::{LogFormat, LogSettings};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub thresholds: ThresholdsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThresholdsConfig {
    pub warning: f64,
    pub critical: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        ThresholdsConfig {
            warning: DEFAULT_WARN_PERCENT,
            critical: DEFAULT_CRIT_PERCENT,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub debug: bool,
    pub format: LogFormat,
}

impl Config {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.thresholds.warning, self.thresholds.critical)
    }

    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            debug: self.logging.debug,
            format: self.logging.format,
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("memswapcheck").join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => Ok(Config::default()),
    }
}

/// A missing file means defaults; an unreadable or malformed one is an error.
pub fn load_config_from_path(path: &Path) -> Result<Config, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
