use super::RecordType;
use std::fmt;
use std::sync::Arc;

/// Transport a query arrived on; misses are proxied over the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    Udp,
    Tcp,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Udp => "udp",
            Transport::Tcp => "tcp",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified inbound question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    /// Lower-cased, dot-terminated owner name.
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub transport: Transport,
}

impl DnsQuery {
    pub fn new(name: &str, record_type: RecordType, transport: Transport) -> Self {
        let mut name = name.to_ascii_lowercase();
        if !name.ends_with('.') {
            name.push('.');
        }
        Self {
            name: name.into(),
            record_type,
            transport,
        }
    }
}
