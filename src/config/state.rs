// Application state module

use std::path::PathBuf;

use super::types::Config;

/// Shared per-process state. The configuration is immutable once loaded, so
/// requests borrow it through an `Arc` without any synchronization.
pub struct AppState {
    pub config: Config,
    /// Resolved path of the backing dataset file
    pub data_file: PathBuf,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let data_file = PathBuf::from(&config.paths.data_file);
        Self { config, data_file }
    }
}
