use anyhow::Result;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BridgeError;
use crate::link::{BaseUrl, DEFAULT_BASE_URL};

/// Global configuration loaded from `~/.config/grafiki/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrafikiConfig {
    /// Web app endpoint that links point at. Only affects link assembly.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Optional gzip level 0-9; if missing, the compressor's default level is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_level: Option<u32>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for GrafikiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            compression_level: None,
        }
    }
}

impl GrafikiConfig {
    pub fn base_url(&self) -> Result<BaseUrl, BridgeError> {
        BaseUrl::parse(&self.base_url)
    }

    pub fn compression(&self) -> Result<Compression, BridgeError> {
        match self.compression_level {
            None => Ok(Compression::default()),
            Some(level) if level <= 9 => Ok(Compression::new(level)),
            Some(level) => Err(BridgeError::Configuration(format!(
                "compression_level {level} is out of range 0-9"
            ))),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("grafiki")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GrafikiConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<GrafikiConfig> {
    if !path.exists() {
        let default_cfg = GrafikiConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: GrafikiConfig = toml::from_str(&data)?;
    Ok(cfg)
}
