//! `glacial remove` – drop a tracked file from the catalog.

use anyhow::Result;
use glacial_core::catalog::Catalog;

pub async fn run_remove(db: &Catalog, id: i64) -> Result<()> {
    db.remove_file(id).await?;
    println!("Removed file {id}");
    Ok(())
}
