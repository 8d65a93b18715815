use crate::ResponseCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Not supported record type: {0}")]
    UnsupportedType(String),

    #[error("Invalid record value: {0}")]
    InvalidRecordValue(String),

    #[error("Record type conflict: {0}")]
    TypeConflict(String),

    #[error("Record not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Malformed DNS query: {0}")]
    MalformedQuery(String),

    #[error("Unsupported query type: {0}")]
    UnsupportedQueryType(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Upstream timeout from {server}")]
    UpstreamTimeout { server: String },

    #[error("Upstream exchange with {server} failed: {reason}")]
    UpstreamFailed { server: String, reason: String },

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// The administrative reply code for this error.
    pub fn response_code(&self) -> ResponseCode {
        match self {
            DomainError::InvalidRequest(_)
            | DomainError::InvalidRecord(_)
            | DomainError::NotFound(_) => ResponseCode::BadRequest,

            DomainError::UnsupportedType(_) => ResponseCode::NotSupportedType,

            DomainError::InvalidRecordValue(_) => ResponseCode::BadRecordValue,

            DomainError::TypeConflict(_) => ResponseCode::TypeConflict,

            DomainError::DatabaseError(_)
            | DomainError::IoError(_)
            | DomainError::MalformedQuery(_)
            | DomainError::UnsupportedQueryType(_)
            | DomainError::InvalidDnsResponse(_)
            | DomainError::UpstreamTimeout { .. }
            | DomainError::UpstreamFailed { .. } => ResponseCode::StorageError,
        }
    }
}
