use dnslite_domain::{DnsRecord, ResponseCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct StatusReply {
    pub code: u8,
    pub msg: &'static str,
}

impl From<ResponseCode> for StatusReply {
    fn from(code: ResponseCode) -> Self {
        Self {
            code: code.code(),
            msg: code.msg(),
        }
    }
}

/// A record with the status envelope merged in.
#[derive(Debug, Serialize)]
pub struct RecordReply {
    #[serde(flatten)]
    pub record: DnsRecord,
    #[serde(flatten)]
    pub status: StatusReply,
}

impl RecordReply {
    pub fn ok(record: DnsRecord) -> Self {
        Self {
            record,
            status: ResponseCode::Success.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListRecordsReply {
    #[serde(flatten)]
    pub status: StatusReply,
    pub records: Vec<DnsRecord>,
}

impl ListRecordsReply {
    pub fn ok(records: Vec<DnsRecord>) -> Self {
        Self {
            status: ResponseCode::Success.into(),
            records,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteRecordRequest {
    pub id: i64,
}
