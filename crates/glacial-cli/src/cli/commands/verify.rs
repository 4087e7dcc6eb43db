//! `glacial verify` – verify a checksum manifest, reporting per file.

use anyhow::Result;
use glacial_core::checksum;
use glacial_core::config::GlacialConfig;
use std::io;
use std::path::Path;

use super::resolve_algorithm;

/// Verify the manifest, streaming the per-file report to stdout. Exits
/// nonzero (via the returned error) when any entry fails.
pub async fn run_verify(
    cfg: &GlacialConfig,
    manifest: &Path,
    algorithm: Option<&str>,
    block_size: Option<usize>,
) -> Result<()> {
    let algorithm = resolve_algorithm(cfg, algorithm)?;
    let block_size = block_size.unwrap_or(cfg.block_size);

    let mut stdout = io::stdout().lock();
    let passed = checksum::verify_manifest(manifest, algorithm, block_size, Some(&mut stdout))?;

    if !passed {
        anyhow::bail!("manifest verification failed: {}", manifest.display());
    }
    Ok(())
}
