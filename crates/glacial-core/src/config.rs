use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::checksum::{DigestAlgorithm, DEFAULT_BLOCK_SIZE};

/// Global configuration loaded from `~/.config/glacial/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlacialConfig {
    /// Digest algorithm used when a command does not name one.
    #[serde(default = "default_algorithm")]
    pub default_algorithm: DigestAlgorithm,
    /// Read block size in bytes for streaming digests.
    #[serde(default = "default_block_size")]
    pub block_size: usize,
    /// Vault name used when registering files without an explicit vault.
    #[serde(default)]
    pub default_vault: Option<String>,
}

fn default_algorithm() -> DigestAlgorithm {
    DigestAlgorithm::Sha256
}

fn default_block_size() -> usize {
    DEFAULT_BLOCK_SIZE
}

impl Default for GlacialConfig {
    fn default() -> Self {
        Self {
            default_algorithm: default_algorithm(),
            block_size: default_block_size(),
            default_vault: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("glacial")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GlacialConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GlacialConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: GlacialConfig = toml::from_str(&data)?;
    Ok(cfg)
}
