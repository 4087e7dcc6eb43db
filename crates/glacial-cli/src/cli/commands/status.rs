//! `glacial status` – show catalog archives and tracked files.

use anyhow::Result;
use glacial_core::catalog::Catalog;

pub async fn run_status(db: &Catalog) -> Result<()> {
    let archives = db.list_archives().await?;
    if archives.is_empty() {
        println!("No archives in catalog.");
    } else {
        println!(
            "{:<6} {:<12} {:<28} {}",
            "ID", "CHUNK", "ARCHIVE_ID", "DESCRIPTION"
        );
        for a in archives {
            let chunk = a
                .chunk_size
                .map(|c| format!("{c}"))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:<6} {:<12} {:<28} {}",
                a.id,
                chunk,
                a.archive_id,
                a.description.as_deref().unwrap_or("-")
            );
        }
    }

    let files = db.list_files().await?;
    if files.is_empty() {
        println!("No files tracked for sync.");
    } else {
        println!(
            "{:<6} {:<10} {:<16} {:<28} {}",
            "ID", "STATUS", "VAULT", "NAME", "SOURCE"
        );
        for f in files {
            println!(
                "{:<6} {:<10} {:<16} {:<28} {}",
                f.id,
                f.status.as_str(),
                f.vault,
                f.name,
                f.source
            );
        }
    }
    Ok(())
}
