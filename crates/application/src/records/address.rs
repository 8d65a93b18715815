use dnslite_domain::{DnsRecord, DomainError, RecordType};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{Name, RData, Record};
use std::net::{Ipv4Addr, Ipv6Addr};

use super::handler::{bad_value, RecordHandler};

pub struct AHandler;

impl AHandler {
    fn parse(record: &DnsRecord) -> Result<Ipv4Addr, DomainError> {
        record
            .value
            .parse::<Ipv4Addr>()
            .map_err(|e| bad_value(record, e))
    }
}

impl RecordHandler for AHandler {
    fn record_type(&self) -> RecordType {
        RecordType::A
    }

    fn check_record(&self, record: &DnsRecord) -> Result<(), DomainError> {
        Self::parse(record).map(|_| ())
    }

    fn render(&self, name: &Name, record: &DnsRecord) -> Result<Record, DomainError> {
        let ip = Self::parse(record)?;
        Ok(Record::from_rdata(name.clone(), record.ttl, RData::A(A(ip))))
    }
}

pub struct AaaaHandler;

impl AaaaHandler {
    fn parse(record: &DnsRecord) -> Result<Ipv6Addr, DomainError> {
        record
            .value
            .parse::<Ipv6Addr>()
            .map_err(|e| bad_value(record, e))
    }
}

impl RecordHandler for AaaaHandler {
    fn record_type(&self) -> RecordType {
        RecordType::AAAA
    }

    fn check_record(&self, record: &DnsRecord) -> Result<(), DomainError> {
        Self::parse(record).map(|_| ())
    }

    fn render(&self, name: &Name, record: &DnsRecord) -> Result<Record, DomainError> {
        let ip = Self::parse(record)?;
        Ok(Record::from_rdata(
            name.clone(),
            record.ttl,
            RData::AAAA(AAAA(ip)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn record(rt: RecordType, value: &str) -> DnsRecord {
        DnsRecord::new("host.example.com.", rt, value, 120)
    }

    #[test]
    fn test_a_accepts_dotted_quad() {
        assert!(AHandler.check_record(&record(RecordType::A, "93.184.216.34")).is_ok());
    }

    #[test]
    fn test_a_rejects_garbage() {
        for value in ["", "1.2.3", "256.1.1.1", "::1", "1.2.3.4 "] {
            let err = AHandler.check_record(&record(RecordType::A, value)).unwrap_err();
            assert!(matches!(err, DomainError::InvalidRecordValue(_)), "{}", value);
        }
    }

    #[test]
    fn test_a_renders_address_and_ttl() {
        let name = Name::from_str("host.example.com.").unwrap();
        let rr = AHandler
            .render(&name, &record(RecordType::A, "10.1.2.3"))
            .unwrap();
        assert_eq!(rr.ttl(), 120);
        assert_eq!(rr.data(), &RData::A(A(Ipv4Addr::new(10, 1, 2, 3))));
    }

    #[test]
    fn test_aaaa_accepts_compressed_literal() {
        assert!(AaaaHandler
            .check_record(&record(RecordType::AAAA, "2001:db8::1"))
            .is_ok());
    }

    #[test]
    fn test_aaaa_rejects_ipv4() {
        assert!(AaaaHandler
            .check_record(&record(RecordType::AAAA, "10.0.0.1"))
            .is_err());
    }
}
