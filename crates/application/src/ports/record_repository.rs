use async_trait::async_trait;
use dnslite_domain::{DnsRecord, DomainError, RecordFilter, RecordType};

#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Stores a checked record and returns it with its assigned id.
    async fn insert(&self, record: &DnsRecord) -> Result<DnsRecord, DomainError>;

    /// All records for `(name, record_type)`, ascending by id.
    async fn find(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError>;

    async fn find_by_name(&self, name: &str) -> Result<Vec<DnsRecord>, DomainError>;

    async fn list(&self, filter: &RecordFilter) -> Result<Vec<DnsRecord>, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<DnsRecord>, DomainError>;

    /// Returns `false` when no row had this id.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
