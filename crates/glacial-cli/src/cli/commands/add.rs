//! `glacial add <source>` – register a file for vault sync.

use anyhow::{Context, Result};
use glacial_core::catalog::Catalog;
use glacial_core::config::GlacialConfig;
use std::path::Path;
use std::time::UNIX_EPOCH;

pub async fn run_add(
    db: &Catalog,
    cfg: &GlacialConfig,
    source: &Path,
    vault: Option<&str>,
    name: Option<&str>,
) -> Result<()> {
    let meta = std::fs::metadata(source).with_context(|| format!("stat {}", source.display()))?;
    anyhow::ensure!(meta.is_file(), "not a regular file: {}", source.display());

    let vault = vault.or(cfg.default_vault.as_deref()).unwrap_or("default");
    let name = match name {
        Some(name) => name.to_string(),
        None => source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("no file name in {}", source.display()))?,
    };
    let source_timestamp = meta
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs().to_string());

    let id = db
        .add_file(
            vault,
            &name,
            &source.to_string_lossy(),
            source_timestamp.as_deref(),
        )
        .await?;
    println!("Added file {id}: {name} -> vault {vault}");
    Ok(())
}
