//! `glacial digest` – compute and print a file's digest.

use anyhow::Result;
use glacial_core::checksum;
use glacial_core::config::GlacialConfig;
use std::path::Path;

use super::resolve_algorithm;

/// Compute and print the digest of the given file.
pub async fn run_digest(cfg: &GlacialConfig, path: &Path, algorithm: Option<&str>) -> Result<()> {
    let algorithm = resolve_algorithm(cfg, algorithm)?;
    let digest = checksum::digest_path(path, algorithm, cfg.block_size)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
