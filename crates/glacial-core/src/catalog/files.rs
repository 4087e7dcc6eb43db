//! Tracked-file operations: register, status transitions, list, remove.

use anyhow::Result;
use sqlx::Row;

use super::db::{unix_timestamp, Catalog};
use super::types::{CatalogId, SyncFile, SyncStatus};

fn file_from_row(row: &sqlx::sqlite::SqliteRow) -> SyncFile {
    let status: String = row.get("status");
    SyncFile {
        id: row.get("id"),
        vault: row.get("vault"),
        name: row.get("name"),
        source: row.get("source"),
        status: SyncStatus::from_str(&status),
        source_timestamp: row.get("source_timestamp"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

impl Catalog {
    /// Register a file for sync into `vault`. New files start out
    /// pending.
    pub async fn add_file(
        &self,
        vault: &str,
        name: &str,
        source: &str,
        source_timestamp: Option<&str>,
    ) -> Result<CatalogId> {
        let now = unix_timestamp();
        let row_id = sqlx::query(
            r#"
            INSERT INTO sync_files (vault, name, source, status, source_timestamp, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(vault)
        .bind(name)
        .bind(source)
        .bind(SyncStatus::Pending.as_str())
        .bind(source_timestamp)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(row_id)
    }

    /// Update the sync status of a tracked file.
    pub async fn set_file_status(&self, id: CatalogId, status: SyncStatus) -> Result<()> {
        let now = unix_timestamp();
        let r = sqlx::query(
            r#"
            UPDATE sync_files
            SET status = ?1,
                updated_at = ?2
            WHERE id = ?3
            "#,
        )
        .bind(status.as_str())
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;
        anyhow::ensure!(r.rows_affected() == 1, "no tracked file with id {id}");
        Ok(())
    }

    /// Fetch a single tracked file.
    pub async fn get_file(&self, id: CatalogId) -> Result<Option<SyncFile>> {
        let row = sqlx::query(
            r#"
            SELECT id, vault, name, source, status, source_timestamp, created_at, updated_at
            FROM sync_files
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(file_from_row))
    }

    /// List all tracked files, newest first.
    pub async fn list_files(&self) -> Result<Vec<SyncFile>> {
        let rows = sqlx::query(
            r#"
            SELECT id, vault, name, source, status, source_timestamp, created_at, updated_at
            FROM sync_files
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(file_from_row).collect())
    }

    /// Permanently remove a tracked file row.
    pub async fn remove_file(&self, id: CatalogId) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM sync_files
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
