use std::path::PathBuf;

use serde::Deserialize;

/// Configuration from tally.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the task data file
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            file: default_file(),
        }
    }
}

fn default_file() -> PathBuf {
    PathBuf::from("tasks.txt")
}
