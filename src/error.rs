use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the host around the form. Validation problems are not errors;
/// they are shown inline and never reach this type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("failed to read prefill file {path}: {source}")]
    PrefillRead { path: PathBuf, source: io::Error },

    #[error("invalid prefill file {path}: {source}")]
    PrefillParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to open log file {path}: {source}")]
    LogFile { path: PathBuf, source: io::Error },

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
