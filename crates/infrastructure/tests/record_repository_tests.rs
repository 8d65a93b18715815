use dnslite_application::ports::RecordRepository;
use dnslite_domain::{DnsRecord, RecordFilter, RecordType};
use dnslite_infrastructure::repositories::SqliteRecordRepository;

mod helpers;
use helpers::create_test_db;

fn record(name: &str, rt: RecordType, value: &str, ttl: u32) -> DnsRecord {
    DnsRecord::new(name, rt, value, ttl)
}

#[tokio::test]
async fn test_insert_assigns_id_and_timestamp() {
    let repo = SqliteRecordRepository::new(create_test_db().await);

    let stored = repo
        .insert(&record("www.example.com.", RecordType::A, "10.0.0.1", 120))
        .await
        .unwrap();

    assert_eq!(stored.id, Some(1));
    assert_eq!(stored.name, "www.example.com.");
    assert_eq!(stored.record_type, RecordType::A);
    assert_eq!(stored.value, "10.0.0.1");
    assert_eq!(stored.ttl, 120);
    assert!(stored.created_at.is_some());
}

#[tokio::test]
async fn test_find_returns_matches_in_id_order() {
    let repo = SqliteRecordRepository::new(create_test_db().await);
    for ip in ["10.0.0.3", "10.0.0.1", "10.0.0.2"] {
        repo.insert(&record("multi.example.com.", RecordType::A, ip, 60))
            .await
            .unwrap();
    }
    repo.insert(&record("multi.example.com.", RecordType::TXT, "other", 60))
        .await
        .unwrap();

    let found = repo
        .find("multi.example.com.", RecordType::A)
        .await
        .unwrap();

    let values: Vec<&str> = found.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, vec!["10.0.0.3", "10.0.0.1", "10.0.0.2"]);
}

#[tokio::test]
async fn test_find_miss_is_empty() {
    let repo = SqliteRecordRepository::new(create_test_db().await);
    let found = repo.find("nothing.example.com.", RecordType::A).await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_find_by_name_spans_types() {
    let repo = SqliteRecordRepository::new(create_test_db().await);
    repo.insert(&record("a.example.com.", RecordType::A, "10.0.0.1", 60))
        .await
        .unwrap();
    repo.insert(&record("a.example.com.", RecordType::TXT, "hi", 60))
        .await
        .unwrap();
    repo.insert(&record("b.example.com.", RecordType::A, "10.0.0.2", 60))
        .await
        .unwrap();

    assert_eq!(repo.find_by_name("a.example.com.").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_with_filters() {
    let repo = SqliteRecordRepository::new(create_test_db().await);
    repo.insert(&record("a.example.com.", RecordType::A, "10.0.0.1", 60))
        .await
        .unwrap();
    repo.insert(&record("a.example.com.", RecordType::TXT, "hi", 60))
        .await
        .unwrap();
    repo.insert(&record("b.example.com.", RecordType::A, "10.0.0.2", 60))
        .await
        .unwrap();

    let all = repo.list(&RecordFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);

    let only_a = repo
        .list(&RecordFilter {
            name: None,
            record_type: Some(RecordType::A),
        })
        .await
        .unwrap();
    assert_eq!(only_a.len(), 2);

    let one = repo
        .list(&RecordFilter {
            name: Some("a.example.com.".to_string()),
            record_type: Some(RecordType::TXT),
        })
        .await
        .unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].value, "hi");
}

#[tokio::test]
async fn test_delete_and_get_by_id() {
    let repo = SqliteRecordRepository::new(create_test_db().await);
    let stored = repo
        .insert(&record("gone.example.com.", RecordType::AAAA, "2001:db8::1", 60))
        .await
        .unwrap();
    let id = stored.id.unwrap();

    assert!(repo.get_by_id(id).await.unwrap().is_some());
    assert!(repo.delete(id).await.unwrap());
    assert!(repo.get_by_id(id).await.unwrap().is_none());
    assert!(!repo.delete(id).await.unwrap());
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let repo = SqliteRecordRepository::new(create_test_db().await);
    let first = repo
        .insert(&record("x.example.com.", RecordType::A, "10.0.0.1", 60))
        .await
        .unwrap();
    repo.delete(first.id.unwrap()).await.unwrap();

    let second = repo
        .insert(&record("x.example.com.", RecordType::A, "10.0.0.1", 60))
        .await
        .unwrap();

    assert!(second.id.unwrap() > first.id.unwrap());
}
