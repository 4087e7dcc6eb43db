//! `glacial chunk-size` – multipart chunk size for an archive.

use anyhow::{Context, Result};
use glacial_core::catalog::Catalog;
use glacial_core::chunk_sizer;
use std::path::Path;

/// Compute the conforming chunk size from an archive file's length or an
/// explicit byte count, optionally recording the decision in the catalog.
pub async fn run_chunk_size(
    db: &Catalog,
    path: Option<&Path>,
    bytes: Option<u64>,
    archive: Option<i64>,
) -> Result<()> {
    let size = match (path, bytes) {
        (Some(path), None) => std::fs::metadata(path)
            .with_context(|| format!("stat {}", path.display()))?
            .len(),
        (None, Some(bytes)) => bytes,
        _ => anyhow::bail!("pass an archive path or --bytes <N>"),
    };

    let chunk_size = chunk_sizer::calculate(size)?;
    let parts = chunk_sizer::part_count(size, chunk_size);
    println!("archive {size} bytes -> chunk size {chunk_size} bytes ({parts} parts)");

    if let Some(id) = archive {
        db.set_chunk_size(id, chunk_size as i64).await?;
        println!("Recorded chunk size for archive {id}");
    }
    Ok(())
}
