use dnslite_domain::{DnsRecord, NewRecord, RecordType};

pub struct DnsRecordBuilder {
    name: String,
    record_type: RecordType,
    value: String,
    ttl: u32,
    id: Option<i64>,
}

impl DnsRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com.".to_string(),
            record_type: RecordType::A,
            value: "192.0.2.1".to_string(),
            ttl: 300,
            id: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn build(self) -> DnsRecord {
        let record = DnsRecord::new(self.name, self.record_type, self.value, self.ttl);
        match self.id {
            Some(id) => record.with_id(id),
            None => record,
        }
    }

    pub fn build_new(self) -> NewRecord {
        NewRecord::new(
            self.name,
            self.record_type.as_str(),
            self.value,
            Some(self.ttl),
        )
    }
}

impl Default for DnsRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
