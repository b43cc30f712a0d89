//! Configuration discovery and loading
//!
//! Discovery hierarchy:
//! 1. Explicit `--config` override
//! 2. Current directory: ./taskroad.toml
//! 3. User config: ~/.taskroad/config.toml
//! 4. Built-in defaults
//!
//! The `GEMINI_API_KEY` environment variable overrides any file-provided key.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "taskroad.toml";

/// Per-user config directory under $HOME
pub const USER_CONFIG_DIR: &str = ".taskroad";

/// Config file name within the user config directory
pub const USER_CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Planner configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// API key for the completion endpoint.
    pub api_key: Option<String>,
    /// Endpoint URL override; the default points at the hosted Gemini
    /// generateContent endpoint.
    pub endpoint: Option<String>,
}

impl PlannerConfig {
    /// Load from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Walk the discovery hierarchy and apply the environment override.
    pub fn discover(override_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = override_path {
            info!("loading configuration override from {:?}", path);
            Self::from_toml_file(path)?
        } else if let Some(path) = Self::first_existing_path() {
            debug!("loading configuration from {:?}", path);
            Self::from_toml_file(&path)?
        } else {
            debug!("no configuration file found, using defaults");
            Self::default()
        };

        if let Ok(key) = env::var(API_KEY_ENV)
            && !key.is_empty()
        {
            config.api_key = Some(key);
        }

        Ok(config)
    }

    fn first_existing_path() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Some(local);
        }
        let home = env::var_os("HOME").map(PathBuf::from)?;
        let user = home.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE);
        user.exists().then_some(user)
    }
}
