//! dnslite domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod response_code;

pub use config::{CliOverrides, Config, DnsConfig, LogFormat};
pub use dns_query::{DnsQuery, Transport};
pub use dns_record::{DnsRecord, NewRecord, RecordFilter, RecordType, MAX_TTL};
pub use errors::DomainError;
pub use response_code::ResponseCode;
