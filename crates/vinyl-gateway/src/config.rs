use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application configuration decoded from `config.json`.
///
/// One recognized field; extra fields are ignored, a missing `uri`
/// fails decoding. The connection string's syntax is not validated
/// here; the driver rejects it at connect time.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// MongoDB connection string.
    pub uri: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not open config file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not decode config file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl AppConfig {
    /// Loads `config.json` from the given directory. Both failure modes
    /// are startup-fatal for the caller.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = dir.as_ref().join("config.json");
        let file = File::open(&path).map_err(|source| ConfigError::Open {
            path: path.clone(),
            source,
        })?;

        serde_json::from_reader(file).map_err(|source| ConfigError::Decode { path, source })
    }
}
