use dnslite_domain::{DnsRecord, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::RecordRepository;

pub struct DeleteRecordUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl DeleteRecordUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<DnsRecord, DomainError> {
        let record = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::NotFound(id))?;

        if !self.repo.delete(id).await? {
            return Err(DomainError::NotFound(id));
        }

        info!(
            record_id = id,
            name = %record.name,
            record_type = %record.record_type,
            "DNS record deleted"
        );

        Ok(record)
    }
}
