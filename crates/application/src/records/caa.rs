use dnslite_domain::{DnsRecord, DomainError, RecordType};
use hickory_proto::rr::{Name, RData, Record, RecordType as HickoryRecordType};
use hickory_proto::serialize::binary::{BinDecoder, Restrict};

use super::handler::{bad_value, RecordHandler};

/// Property tag every administered CAA record carries.
pub const CAA_TAG: &str = "issue";

/// Flags byte, tag length byte, tag.
const CAA_HEADER_LEN: usize = 2 + CAA_TAG.len();

/// Longest value that still fits a 16-bit RDLENGTH.
pub const MAX_CAA_VALUE_LEN: usize = u16::MAX as usize - CAA_HEADER_LEN;

pub struct CaaHandler;

impl CaaHandler {
    /// `issue` rdata whose value is the stored text, byte for byte.
    ///
    /// `letsencrypt.org`, `ca.example.net; account=1` and `;` (no CA may
    /// issue) are all served exactly as stored.
    fn issue_rdata(value: &str) -> Result<RData, String> {
        let mut wire = Vec::with_capacity(CAA_HEADER_LEN + value.len());
        wire.push(0);
        wire.push(CAA_TAG.len() as u8);
        wire.extend_from_slice(CAA_TAG.as_bytes());
        wire.extend_from_slice(value.as_bytes());

        let length = u16::try_from(wire.len())
            .map_err(|_| format!("value of {} bytes is too long", value.len()))?;
        let mut decoder = BinDecoder::new(&wire);
        RData::read(&mut decoder, HickoryRecordType::CAA, Restrict::new(length))
            .map_err(|e| e.to_string())
    }
}

impl RecordHandler for CaaHandler {
    fn record_type(&self) -> RecordType {
        RecordType::CAA
    }

    fn check_record(&self, record: &DnsRecord) -> Result<(), DomainError> {
        if record.value.is_empty() {
            return Err(bad_value(record, "empty value"));
        }
        if record.value.len() > MAX_CAA_VALUE_LEN {
            return Err(bad_value(
                record,
                format!("value exceeds {} bytes", MAX_CAA_VALUE_LEN),
            ));
        }
        Ok(())
    }

    fn render(&self, name: &Name, record: &DnsRecord) -> Result<Record, DomainError> {
        self.check_record(record)?;
        let rdata = Self::issue_rdata(&record.value).map_err(|e| bad_value(record, e))?;
        Ok(Record::from_rdata(name.clone(), record.ttl, rdata))
    }
}
