//! Tests for the catalog (use the in-memory helper from db).

use crate::catalog::db::open_memory;
use crate::catalog::SyncStatus;

#[tokio::test]
async fn archive_roundtrip_with_chunk_size_decision() {
    let db = open_memory().await.unwrap();
    let id = db
        .add_archive("arch-aaa111", Some("2026 photo backup"))
        .await
        .unwrap();

    let archive = db.get_archive(id).await.unwrap().expect("archive exists");
    assert_eq!(archive.id, id);
    assert_eq!(archive.archive_id, "arch-aaa111");
    assert_eq!(archive.description.as_deref(), Some("2026 photo backup"));
    assert_eq!(archive.chunk_size, None);

    db.set_chunk_size(id, 8 * 1024 * 1024).await.unwrap();
    let archive = db.get_archive(id).await.unwrap().expect("archive exists");
    assert_eq!(archive.chunk_size, Some(8 * 1024 * 1024));
}

#[tokio::test]
async fn set_chunk_size_for_unknown_archive_fails() {
    let db = open_memory().await.unwrap();
    assert!(db.set_chunk_size(42, 4 * 1024 * 1024).await.is_err());
}

#[tokio::test]
async fn add_list_remove_archives() {
    let db = open_memory().await.unwrap();
    assert!(db.list_archives().await.unwrap().is_empty());

    let id1 = db.add_archive("arch-one", None).await.unwrap();
    let id2 = db.add_archive("arch-two", None).await.unwrap();
    let archives = db.list_archives().await.unwrap();
    assert_eq!(archives.len(), 2);
    // Newest first
    assert_eq!(archives[0].id, id2);
    assert_eq!(archives[1].id, id1);

    db.remove_archive(id1).await.unwrap();
    let archives = db.list_archives().await.unwrap();
    assert_eq!(archives.len(), 1);
    assert_eq!(archives[0].archive_id, "arch-two");
}

#[tokio::test]
async fn file_status_transitions() {
    let db = open_memory().await.unwrap();
    let id = db
        .add_file("photos", "2026-01.tar", "/data/2026-01.tar", Some("1767225600"))
        .await
        .unwrap();

    let file = db.get_file(id).await.unwrap().expect("file exists");
    assert_eq!(file.vault, "photos");
    assert_eq!(file.name, "2026-01.tar");
    assert_eq!(file.source, "/data/2026-01.tar");
    assert_eq!(file.status, SyncStatus::Pending);
    assert_eq!(file.source_timestamp.as_deref(), Some("1767225600"));

    db.set_file_status(id, SyncStatus::Synced).await.unwrap();
    let file = db.get_file(id).await.unwrap().expect("file exists");
    assert_eq!(file.status, SyncStatus::Synced);

    db.set_file_status(id, SyncStatus::Failed).await.unwrap();
    let file = db.get_file(id).await.unwrap().expect("file exists");
    assert_eq!(file.status, SyncStatus::Failed);
}

#[tokio::test]
async fn set_status_for_unknown_file_fails() {
    let db = open_memory().await.unwrap();
    assert!(db.set_file_status(7, SyncStatus::Synced).await.is_err());
}

#[tokio::test]
async fn add_list_remove_files() {
    let db = open_memory().await.unwrap();
    assert!(db.list_files().await.unwrap().is_empty());

    let id1 = db.add_file("vault-a", "one.tar", "/src/one.tar", None).await.unwrap();
    let id2 = db.add_file("vault-b", "two.tar", "/src/two.tar", None).await.unwrap();
    let files = db.list_files().await.unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].id, id2);
    assert_eq!(files[1].id, id1);

    db.remove_file(id2).await.unwrap();
    let files = db.list_files().await.unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "one.tar");
}

#[test]
fn sync_status_string_roundtrip() {
    for status in [SyncStatus::Pending, SyncStatus::Synced, SyncStatus::Failed] {
        assert_eq!(SyncStatus::from_str(status.as_str()), status);
    }
    // Unknown strings read back from the DB degrade to Failed.
    assert_eq!(SyncStatus::from_str("garbage"), SyncStatus::Failed);
}
