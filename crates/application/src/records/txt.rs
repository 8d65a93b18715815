use dnslite_domain::{DnsRecord, DomainError, RecordType};
use hickory_proto::rr::rdata::TXT;
use hickory_proto::rr::{Name, RData, Record};

use super::handler::{bad_value, RecordHandler};

/// Longest character-string a TXT record can carry.
pub const MAX_SEGMENT_LEN: usize = 255;

/// `"` separates character-strings in a stored TXT value.
pub const SEGMENT_DELIMITER: char = '"';

pub struct TxtHandler;

impl TxtHandler {
    pub fn segments(value: &str) -> Vec<String> {
        value.split(SEGMENT_DELIMITER).map(str::to_string).collect()
    }
}

impl RecordHandler for TxtHandler {
    fn record_type(&self) -> RecordType {
        RecordType::TXT
    }

    fn check_record(&self, record: &DnsRecord) -> Result<(), DomainError> {
        if record.value.is_empty() {
            return Err(bad_value(record, "empty text"));
        }
        if let Some(long) = record
            .value
            .split(SEGMENT_DELIMITER)
            .find(|s| s.len() > MAX_SEGMENT_LEN)
        {
            return Err(bad_value(
                record,
                format!(
                    "segment of {} bytes exceeds {}",
                    long.len(),
                    MAX_SEGMENT_LEN
                ),
            ));
        }
        Ok(())
    }

    fn render(&self, name: &Name, record: &DnsRecord) -> Result<Record, DomainError> {
        self.check_record(record)?;
        Ok(Record::from_rdata(
            name.clone(),
            record.ttl,
            RData::TXT(TXT::new(Self::segments(&record.value))),
        ))
    }
}
