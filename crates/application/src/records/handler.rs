use dnslite_domain::{DnsRecord, DomainError, RecordType};
use hickory_proto::rr::{Name, Record};

/// Per-type validation and answer rendering.
pub trait RecordHandler: Send + Sync {
    fn record_type(&self) -> RecordType;

    /// Checks the record value. Runs after the common checks, before storage.
    fn check_record(&self, record: &DnsRecord) -> Result<(), DomainError>;

    /// Renders a stored record as an answer owned by `name`.
    fn render(&self, name: &Name, record: &DnsRecord) -> Result<Record, DomainError>;
}

pub(crate) fn bad_value(record: &DnsRecord, reason: impl std::fmt::Display) -> DomainError {
    DomainError::InvalidRecordValue(format!(
        "{} value '{}': {}",
        record.record_type, record.value, reason
    ))
}
