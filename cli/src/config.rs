use std::fs;
use std::path::{Path, PathBuf};

use askline_core::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the answering service.
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

/// Default config location: `<config_dir>/askline/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("askline").join("config.toml"))
}

/// Load the config at `path`. An absent file yields the defaults.
pub fn load_from(path: &Path) -> Result<Config, AppError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let text = fs::read_to_string(path).map_err(|e| {
        AppError::new("CONFIG_READ_FAILED", "Failed to read config file")
            .with_details(format!("path={}; {e}", path.display()))
    })?;

    toml::from_str(&text).map_err(|e| {
        AppError::new("CONFIG_PARSE_FAILED", "Failed to parse config file")
            .with_details(format!("path={}; {e}", path.display()))
    })
}

/// Load from the default location, falling back to defaults when the
/// platform has no config directory.
pub fn load_default() -> Result<Config, AppError> {
    match default_config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}
