use dnslite_domain::{DnsRecord, DomainError, NewRecord, RecordType};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::RecordRepository;
use crate::records::TypeRegistry;

pub struct AddRecordUseCase {
    repo: Arc<dyn RecordRepository>,
    registry: Arc<TypeRegistry>,
    default_ttl: u32,
}

impl AddRecordUseCase {
    pub fn new(
        repo: Arc<dyn RecordRepository>,
        registry: Arc<TypeRegistry>,
        default_ttl: u32,
    ) -> Self {
        Self {
            repo,
            registry,
            default_ttl,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, new_record: NewRecord) -> Result<DnsRecord, DomainError> {
        let handler = self
            .registry
            .lookup(&new_record.record_type)
            .ok_or_else(|| DomainError::UnsupportedType(new_record.record_type.clone()))?;

        let mut record = new_record.into_record(handler.record_type());
        record.check_common(self.default_ttl)?;
        handler.check_record(&record)?;
        self.check_conflict(&record).await?;

        let stored = self.repo.insert(&record).await?;

        info!(
            record_id = ?stored.id,
            name = %stored.name,
            record_type = %stored.record_type,
            ttl = stored.ttl,
            "DNS record created"
        );

        Ok(stored)
    }

    /// A CNAME owns its name exclusively (RFC 1034 §3.6.2).
    async fn check_conflict(&self, record: &DnsRecord) -> Result<(), DomainError> {
        let existing = self.repo.find_by_name(&record.name).await?;
        if existing.is_empty() {
            return Ok(());
        }

        let conflict = if record.record_type == RecordType::CNAME {
            existing.first()
        } else {
            existing
                .iter()
                .find(|r| r.record_type == RecordType::CNAME)
        };

        match conflict {
            Some(other) => {
                warn!(
                    name = %record.name,
                    record_type = %record.record_type,
                    existing_type = %other.record_type,
                    "CNAME cannot coexist with other records"
                );
                Err(DomainError::TypeConflict(format!(
                    "{} already has a {} record",
                    record.name, other.record_type
                )))
            }
            None => Ok(()),
        }
    }
}
