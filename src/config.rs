//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::task::EXPORT_FILE_NAME;

const APP_DIR_NAME: &str = "ai-todo";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Default destination for the session `export` command
    #[serde(default = "default_export_path")]
    pub path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: default_export_path(),
        }
    }
}

fn default_export_path() -> PathBuf {
    PathBuf::from(EXPORT_FILE_NAME)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Include completed tasks in `list`
    #[serde(default = "default_true")]
    pub show_done: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { show_done: true }
    }
}

fn default_true() -> bool {
    true
}

pub fn get_app_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_DIR_NAME))
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    /// Load from the user config directory, falling back to defaults when
    /// no file exists.
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config at {:?}", path))?;
        Ok(config)
    }

    /// Like [`Config::load`], but writes the defaults out on first run so
    /// there is a file to edit. A failed write only warns.
    pub fn load_or_init() -> Result<Self> {
        if config_path()?.exists() {
            return Self::load();
        }

        let config = Config::default();
        if let Err(e) = save_config(&config) {
            warn!("Failed to write default config: {:#}", e);
        }
        Ok(config)
    }
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}
