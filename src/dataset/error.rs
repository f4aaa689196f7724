// Dataset error types
// Every failure while loading or interrogating the backing file lands here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("data file not found at '{0}'")]
    NotFound(PathBuf),

    #[error("invalid JSON in '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid data structure: {0}")]
    Structural(&'static str),
}

pub type DataResult<T> = Result<T, DataError>;
