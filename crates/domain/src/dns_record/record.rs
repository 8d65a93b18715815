use super::RecordType;
use serde::{Deserialize, Serialize};

/// One administered resource record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    pub value: String,

    #[serde(default)]
    pub ttl: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl DnsRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        value: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            record_type,
            value: value.into(),
            ttl,
            created_at: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// A create request before the type has been resolved against the registry.
///
/// `record_type` stays a raw string so an unknown type can be reported as
/// "not supported" rather than as a malformed body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: String,

    pub value: String,

    #[serde(default)]
    pub ttl: Option<u32>,
}

impl NewRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        value: impl Into<String>,
        ttl: Option<u32>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            value: value.into(),
            ttl,
        }
    }

    pub fn into_record(self, record_type: RecordType) -> DnsRecord {
        DnsRecord::new(self.name, record_type, self.value, self.ttl.unwrap_or(0))
    }
}

/// Optional filters for listing records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecordFilter {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, rename = "type")]
    pub record_type: Option<RecordType>,
}

impl RecordFilter {
    pub fn matches(&self, record: &DnsRecord) -> bool {
        let name_ok = self
            .name
            .as_deref()
            .map_or(true, |n| n.eq_ignore_ascii_case(&record.name));
        let type_ok = self.record_type.map_or(true, |t| t == record.record_type);
        name_ok && type_ok
    }
}
