//! `glacial mark` – set a tracked file's sync status.

use anyhow::Result;
use glacial_core::catalog::{Catalog, SyncStatus};

pub async fn run_mark(db: &Catalog, id: i64, status: &str) -> Result<()> {
    let status = match status {
        "pending" => SyncStatus::Pending,
        "synced" => SyncStatus::Synced,
        "failed" => SyncStatus::Failed,
        other => anyhow::bail!("unknown status {other:?} (expected pending, synced, or failed)"),
    };
    db.set_file_status(id, status).await?;
    println!("Marked file {id} as {}", status.as_str());
    Ok(())
}
