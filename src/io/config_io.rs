use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "tally.toml";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load `tally.toml` from the given directory. An absent file yields the
/// default configuration.
pub fn load_config(dir: &Path) -> Result<Config, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::Parse { path, source: e })
}

/// Resolve the data-file path: a CLI `--file` override wins over config.
pub fn resolve_data_file(cli_file: Option<&Path>, config: &Config) -> PathBuf {
    match cli_file {
        Some(path) => path.to_path_buf(),
        None => config.storage.file.clone(),
    }
}
