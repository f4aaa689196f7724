// Dataset loader module
// Reads and parses the backing file. Every call performs a full read so
// edits to the file are visible on the next request; callers bear the cost
// of the repeated I/O.

use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;

use super::error::{DataError, DataResult};
use super::types::Dataset;

pub async fn load(path: &Path) -> DataResult<Dataset> {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(DataError::NotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(DataError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    serde_json::from_str(&raw).map_err(|e| DataError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
