/// Counter helpers against a live backend
///
/// Fail-open decoding is the write path's safety net: no counter state may
/// ever block a write.
use invox_store::counters::{read_counter, write_counter};
use invox_store::{DocumentStore, MemoryStore};
use serde_json::json;

#[tokio::test]
async fn test_absent_counter_reads_default() {
    let store = MemoryStore::new();

    assert_eq!(read_counter(&store, "update-count", 0).await.unwrap(), 0);
    assert_eq!(
        read_counter(&store, "invoiceNumber", 1001).await.unwrap(),
        1001
    );
}

#[tokio::test]
async fn test_write_then_read_round_trip() {
    let store = MemoryStore::new();

    write_counter(&store, "backup-count", 7).await.unwrap();
    assert_eq!(read_counter(&store, "backup-count", 0).await.unwrap(), 7);
}

#[tokio::test]
async fn test_corrupt_counter_reads_default_not_error() {
    let store = MemoryStore::new();
    store
        .set("update-count", json!({"oops": "not a number"}))
        .await
        .unwrap();

    // GIVEN a corrupt counter WHEN read THEN the default comes back, no error
    assert_eq!(read_counter(&store, "update-count", 0).await.unwrap(), 0);
}

#[tokio::test]
async fn test_stringly_typed_counter_still_decodes() {
    let store = MemoryStore::new();
    store.set("invoiceNumber", json!("1005")).await.unwrap();

    assert_eq!(
        read_counter(&store, "invoiceNumber", 1001).await.unwrap(),
        1005
    );
}
