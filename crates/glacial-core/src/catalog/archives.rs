//! Archive row operations: record, chunk-size decision, list, get, remove.

use anyhow::Result;
use sqlx::Row;

use super::db::{unix_timestamp, Catalog};
use super::types::{ArchiveRecord, CatalogId};

fn archive_from_row(row: &sqlx::sqlite::SqliteRow) -> ArchiveRecord {
    ArchiveRecord {
        id: row.get("id"),
        archive_id: row.get("archive_id"),
        description: row.get("description"),
        chunk_size: row.get("chunk_size"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

impl Catalog {
    /// Insert a new archive row and return its catalog id. The chunk-size
    /// decision is recorded separately once computed.
    pub async fn add_archive(
        &self,
        archive_id: &str,
        description: Option<&str>,
    ) -> Result<CatalogId> {
        let now = unix_timestamp();
        let row_id = sqlx::query(
            r#"
            INSERT INTO archives (archive_id, description, chunk_size, created_at, updated_at)
            VALUES (?1, ?2, NULL, ?3, ?4)
            "#,
        )
        .bind(archive_id)
        .bind(description)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(row_id)
    }

    /// Record the computed multipart chunk size for an archive.
    pub async fn set_chunk_size(&self, id: CatalogId, chunk_size: i64) -> Result<()> {
        let now = unix_timestamp();
        let r = sqlx::query(
            r#"
            UPDATE archives
            SET chunk_size = ?1,
                updated_at = ?2
            WHERE id = ?3
            "#,
        )
        .bind(chunk_size)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;
        anyhow::ensure!(r.rows_affected() == 1, "no archive with id {id}");
        Ok(())
    }

    /// Fetch a single archive row.
    pub async fn get_archive(&self, id: CatalogId) -> Result<Option<ArchiveRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, archive_id, description, chunk_size, created_at, updated_at
            FROM archives
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(archive_from_row))
    }

    /// List all archives, newest first.
    pub async fn list_archives(&self) -> Result<Vec<ArchiveRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, archive_id, description, chunk_size, created_at, updated_at
            FROM archives
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(archive_from_row).collect())
    }

    /// Permanently remove an archive row.
    pub async fn remove_archive(&self, id: CatalogId) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM archives
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
