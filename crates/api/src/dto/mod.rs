mod record;

pub use record::{DeleteRecordRequest, ListRecordsReply, RecordReply, StatusReply};
