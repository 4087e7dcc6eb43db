//! `glacial archive <archive-id>` – record an archive in the catalog.

use anyhow::Result;
use glacial_core::catalog::Catalog;

pub async fn run_archive(db: &Catalog, archive_id: &str, description: Option<&str>) -> Result<()> {
    let id = db.add_archive(archive_id, description).await?;
    println!("Recorded archive {id}: {archive_id}");
    Ok(())
}
