use std::path::PathBuf;

use thiserror::Error;

/// Reasons a driver or rider record cannot take part in matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("name is empty")]
    EmptyName,

    #[error("{endpoint} location ({lat}, {lon}) is not a valid coordinate")]
    InvalidLocation {
        endpoint: &'static str,
        lat: f64,
        lon: f64,
    },

    #[error("max detour distance {0} km must be a finite, non-negative number")]
    InvalidDetour(f64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
