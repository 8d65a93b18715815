use serde::{Deserialize, Serialize};
use std::fmt;

/// Status code embedded in every administrative reply body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    Success,
    BadRequest,
    NotSupportedType,
    BadRecordValue,
    StorageError,
    BadMethod,
    TypeConflict,
}

impl ResponseCode {
    pub fn code(&self) -> u8 {
        match self {
            ResponseCode::Success => 0,
            ResponseCode::BadRequest => 1,
            ResponseCode::NotSupportedType => 2,
            ResponseCode::BadRecordValue => 3,
            ResponseCode::StorageError => 4,
            ResponseCode::BadMethod => 5,
            ResponseCode::TypeConflict => 6,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ResponseCode::Success),
            1 => Some(ResponseCode::BadRequest),
            2 => Some(ResponseCode::NotSupportedType),
            3 => Some(ResponseCode::BadRecordValue),
            4 => Some(ResponseCode::StorageError),
            5 => Some(ResponseCode::BadMethod),
            6 => Some(ResponseCode::TypeConflict),
            _ => None,
        }
    }

    pub fn msg(&self) -> &'static str {
        match self {
            ResponseCode::Success => "ok",
            ResponseCode::BadRequest => "bad request",
            ResponseCode::NotSupportedType => "not supported type",
            ResponseCode::BadRecordValue => "bad record value",
            ResponseCode::StorageError => "db error",
            ResponseCode::BadMethod => "bad method",
            ResponseCode::TypeConflict => "type conflict",
        }
    }

    pub fn errors() -> &'static [ResponseCode] {
        &[
            ResponseCode::BadRequest,
            ResponseCode::NotSupportedType,
            ResponseCode::BadRecordValue,
            ResponseCode::StorageError,
            ResponseCode::BadMethod,
            ResponseCode::TypeConflict,
        ]
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.msg())
    }
}

impl Serialize for ResponseCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for ResponseCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        ResponseCode::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown response code {}", code)))
    }
}
