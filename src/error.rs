use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to read a metric from the operating system.
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("memory metrics are not supported on {os}")]
    UnsupportedPlatform { os: &'static str },

    #[error("operating system reported no {resource} data")]
    NoData { resource: &'static str },
}

/// Config file exists but cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}
