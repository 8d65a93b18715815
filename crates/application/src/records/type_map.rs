use dnslite_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

/// Bidirectional mapper between domain and hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::CAA => HickoryRecordType::CAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
        }
    }

    /// Returns `None` for query types this server does not answer.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            HickoryRecordType::NS => Some(RecordType::NS),
            HickoryRecordType::TXT => Some(RecordType::TXT),
            HickoryRecordType::CAA => Some(RecordType::CAA),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            _ => None,
        }
    }
}
