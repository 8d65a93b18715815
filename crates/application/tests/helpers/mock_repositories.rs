use async_trait::async_trait;
use dnslite_application::ports::{RecordRepository, UpstreamProxy};
use dnslite_domain::{DnsRecord, DomainError, RecordFilter, RecordType, Transport};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockRecordRepository {
    records: Arc<RwLock<Vec<DnsRecord>>>,
    next_id: Arc<AtomicI64>,
    should_fail: Arc<AtomicBool>,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_records(records: Vec<DnsRecord>) -> Self {
        let repo = Self::new();
        for record in records {
            repo.insert(&record).await.unwrap();
        }
        repo
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    fn check_fail(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("mock failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn insert(&self, record: &DnsRecord) -> Result<DnsRecord, DomainError> {
        self.check_fail()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = record.clone().with_id(id);
        self.records.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        self.check_fail()?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.name == name && r.record_type == record_type)
            .cloned()
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<DnsRecord>, DomainError> {
        self.check_fail()?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.name == name)
            .cloned()
            .collect())
    }

    async fn list(&self, filter: &RecordFilter) -> Result<Vec<DnsRecord>, DomainError> {
        self.check_fail()?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<DnsRecord>, DomainError> {
        self.check_fail()?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.id == Some(id))
            .cloned())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        self.check_fail()?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != Some(id));
        Ok(records.len() != before)
    }
}

/// Upstream that answers every query with a fixed reply and counts calls.
#[derive(Clone, Default)]
pub struct MockUpstreamProxy {
    reply: Arc<RwLock<Option<Vec<u8>>>>,
    calls: Arc<RwLock<Vec<(Vec<u8>, Transport)>>>,
}

impl MockUpstreamProxy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replying(reply: Vec<u8>) -> Self {
        Self {
            reply: Arc::new(RwLock::new(Some(reply))),
            calls: Arc::default(),
        }
    }

    pub async fn calls(&self) -> Vec<(Vec<u8>, Transport)> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl UpstreamProxy for MockUpstreamProxy {
    async fn forward(&self, query: &[u8], transport: Transport) -> Result<Vec<u8>, DomainError> {
        self.calls.write().await.push((query.to_vec(), transport));
        self.reply
            .read()
            .await
            .clone()
            .ok_or_else(|| DomainError::UpstreamTimeout {
                server: "mock".to_string(),
            })
    }
}
