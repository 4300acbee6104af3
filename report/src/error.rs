//! Error types for the report binary.

use std::path::PathBuf;

/// All errors that can occur while producing a report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error(transparent)]
    Data(#[from] secflow::Error),

    #[error("chart error: {0}")]
    Chart(String),

    #[error("failed to write chart {path}: {source}")]
    ChartWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode JSON report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
