use dnslite_domain::{DnsRecord, DomainError, RecordType};
use hickory_proto::rr::rdata::CNAME;
use hickory_proto::rr::{Name, RData, Record};

use super::handler::{bad_value, RecordHandler};

pub struct CnameHandler;

impl RecordHandler for CnameHandler {
    fn record_type(&self) -> RecordType {
        RecordType::CNAME
    }

    fn check_record(&self, record: &DnsRecord) -> Result<(), DomainError> {
        DnsRecord::validate_name(&record.value).map_err(|e| bad_value(record, e))
    }

    fn render(&self, name: &Name, record: &DnsRecord) -> Result<Record, DomainError> {
        let target = Name::from_ascii(&record.value).map_err(|e| bad_value(record, e))?;
        Ok(Record::from_rdata(
            name.clone(),
            record.ttl,
            RData::CNAME(CNAME(target)),
        ))
    }
}
