use dnslite_domain::{DnsRecord, DomainError, RecordFilter};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::RecordRepository;

pub struct ListRecordsUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl ListRecordsUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, mut filter: RecordFilter) -> Result<Vec<DnsRecord>, DomainError> {
        filter.name = filter
            .name
            .map(|n| n.trim().to_ascii_lowercase())
            .filter(|n| !n.is_empty());
        self.repo.list(&filter).await
    }
}
