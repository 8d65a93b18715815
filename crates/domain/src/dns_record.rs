mod check;
mod record;
mod record_type;

pub use check::{MAX_LABEL_LEN, MAX_NAME_LEN, MAX_TTL};
pub use record::{DnsRecord, NewRecord, RecordFilter};
pub use record_type::RecordType;
