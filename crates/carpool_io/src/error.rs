use std::path::PathBuf;

use carpool_core::RecordError;
use thiserror::Error;

/// Fatal problems loading a dataset; no groups are computed.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),
}

/// Why a single dataset row was skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("malformed row: {0}")]
    Malformed(String),

    #[error("missing value for `{0}`")]
    MissingField(&'static str),

    #[error("unknown role `{0}` (expected Driver or Rider)")]
    UnknownRole(String),

    #[error("`{field}` value `{value}` is not a \"lat,lon\" pair")]
    InvalidCoordinates { field: &'static str, value: String },

    #[error("`time_of_travel` value `{0}` is not a time of day")]
    InvalidTime(String),

    #[error("`{field}` value `{value}` is not a boolean")]
    InvalidFlag { field: &'static str, value: String },

    #[error("`{field}` value `{value}` is not a number")]
    InvalidNumber { field: &'static str, value: String },

    #[error(transparent)]
    Record(#[from] RecordError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}
