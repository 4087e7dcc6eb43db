//! Types stored in the archive catalog.

/// Catalog row identifier.
pub type CatalogId = i64;

/// Sync state of a tracked file, stored as a string in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Pending,
    Synced,
    Failed,
}

impl SyncStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SyncStatus::Pending => "pending",
            SyncStatus::Synced => "synced",
            SyncStatus::Failed => "failed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "pending" => SyncStatus::Pending,
            "synced" => SyncStatus::Synced,
            "failed" => SyncStatus::Failed,
            _ => SyncStatus::Failed,
        }
    }
}

/// An archive known to the catalog, with the chunk-size decision recorded
/// for it (if one has been computed yet).
#[derive(Debug, Clone)]
pub struct ArchiveRecord {
    pub id: CatalogId,
    pub archive_id: String,
    pub description: Option<String>,
    pub chunk_size: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// A file registered for sync into a vault.
#[derive(Debug, Clone)]
pub struct SyncFile {
    pub id: CatalogId,
    pub vault: String,
    pub name: String,
    pub source: String,
    pub status: SyncStatus,
    pub source_timestamp: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}
