//! NanoSeed configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::layout::{DEFAULT_TEMPLATE_PATHS, TEMPLATE_DIR_ENV};

/// Main NanoSeed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Workspace root to seed
    pub workspace: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Template search configuration
    pub templates: TemplatesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace: "~/.nanobot/workspace".to_string(),
            log_level: None,
            templates: TemplatesConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // An explicit path must load
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for candidate in Self::implicit_paths() {
            if candidate.exists() {
                match Self::load_from_file(&candidate) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", candidate.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, before logging is set up
    ///
    /// Any problem loading the file yields `None`.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let paths = match config_path {
            Some(path) => vec![path.clone()],
            None => Self::implicit_paths(),
        };
        paths
            .iter()
            .filter(|p| p.exists())
            .find_map(|p| Self::load_from_file(p).ok())
            .and_then(|config| config.log_level)
    }

    /// Workspace root with `~/` expanded
    pub fn workspace_path(&self) -> PathBuf {
        if let Some(rest) = self.workspace.strip_prefix("~/")
            && let Some(home) = dirs::home_dir()
        {
            return home.join(rest);
        }
        PathBuf::from(&self.workspace)
    }

    /// Project-local `.nanoseed.yml`, then `<config_dir>/nanoseed/nanoseed.yml`
    fn implicit_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".nanoseed.yml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("nanoseed").join("nanoseed.yml"));
        }
        paths
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Template search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Environment variable holding an explicit template directory (empty disables it)
    #[serde(rename = "env-var")]
    pub env_var: String,

    /// Locations probed after the environment override (searched in order)
    pub paths: Vec<String>,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            env_var: TEMPLATE_DIR_ENV.to_string(),
            paths: DEFAULT_TEMPLATE_PATHS.iter().map(|p| p.to_string()).collect(),
        }
    }
}
