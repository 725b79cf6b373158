use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "transcheck.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locales_dir: PathBuf,
    pub reference_locale: String,
    pub file_name: String,
    pub sort_locales: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_dir: PathBuf::from("public").join("locales"),
            reference_locale: "fr".to_string(),
            file_name: "translation.json".to_string(),
            sort_locales: false,
        }
    }
}

/// Load config from `path`, or from `transcheck.toml` in the working directory.
/// A missing file yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Reading config file {:?}", path))?;
    let cfg: Config = toml::from_str(&contents)
        .with_context(|| format!("Parsing config file {:?}", path))?;
    Ok(cfg)
}
