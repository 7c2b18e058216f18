use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::persistence::DEFAULT_SAVE_PATH;

fn default_grid_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_grid_height() -> u32 {
    DEFAULT_HEIGHT
}

fn default_cell_size() -> u32 {
    32
}

fn default_save_path() -> PathBuf {
    PathBuf::from(DEFAULT_SAVE_PATH)
}

/// Runtime settings, loadable from a YAML file. Every field has a
/// default, so an empty document yields the stock 20x15 city with
/// 32-pixel cells saving to `city_save.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_grid_width")]
    pub grid_width: u32,
    #[serde(default = "default_grid_height")]
    pub grid_height: u32,
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
    #[serde(default = "default_save_path")]
    pub save_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_width: default_grid_width(),
            grid_height: default_grid_height(),
            cell_size: default_cell_size(),
            save_path: default_save_path(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }
}
