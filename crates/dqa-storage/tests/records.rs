use dqa_storage::error::StorageError;
use dqa_storage::memory::MemoryStore;
use dqa_storage::records::{append_with_header, get_all_records, recent_records};
use dqa_storage::store::TableStore;

fn header() -> Vec<String> {
    vec!["quarter".to_string(), "tx_ml_flag".to_string()]
}

fn row(q: &str, flag: &str) -> Vec<String> {
    vec![q.to_string(), flag.to_string()]
}

#[tokio::test]
async fn header_is_written_only_once() {
    let store = MemoryStore::new();

    append_with_header(&store, "TX_ML", header(), vec![row("Q1", "NO")])
        .await
        .unwrap();
    append_with_header(&store, "TX_ML", header(), vec![row("Q2", "YES")])
        .await
        .unwrap();

    let values = store.snapshot("TX_ML");
    assert_eq!(values.len(), 3);
    assert_eq!(values[0], header());
    assert_eq!(values[2], row("Q2", "YES"));
}

#[tokio::test]
async fn existing_header_is_not_duplicated() {
    let store = MemoryStore::new().with_table("HTS_TST", vec![header()]);
    let appended = append_with_header(&store, "HTS_TST", header(), vec![row("Q3", "NO")])
        .await
        .unwrap();
    assert_eq!(appended, 1);
    assert_eq!(store.snapshot("HTS_TST").len(), 2);
}

#[tokio::test]
async fn records_come_back_as_a_table() {
    let store = MemoryStore::new();
    let rows: Vec<_> = (1..=12).map(|i| row(&format!("Q{i}"), "NO")).collect();
    append_with_header(&store, "TX_ML", header(), rows).await.unwrap();

    let all = get_all_records(&store, "TX_ML").await.unwrap();
    assert_eq!(all.header, header());
    assert_eq!(all.len(), 12);

    let recent = recent_records(&store, "TX_ML", 5).await.unwrap();
    assert_eq!(recent.len(), 5);
    assert_eq!(recent.rows[0][0], "Q8");
    assert_eq!(recent.rows[4][0], "Q12");
}

#[tokio::test]
async fn missing_table_reads_empty() {
    let store = MemoryStore::new();
    let table = get_all_records(&store, "nothing").await.unwrap();
    assert!(table.is_empty());
    assert!(table.header.is_empty());
}

#[tokio::test]
async fn offline_store_fails_without_writing() {
    let store = MemoryStore::new();
    store.set_unavailable(true);

    let err = append_with_header(&store, "TX_ML", header(), vec![row("Q1", "NO")])
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Unavailable(_)));

    store.set_unavailable(false);
    assert!(store.get_all_values("TX_ML").await.unwrap().is_empty());
}
