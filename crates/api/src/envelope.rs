use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use dnslite_domain::ResponseCode;
use serde::Serialize;
use std::collections::HashMap;

use crate::dto::StatusReply;

/// Status-only reply bodies, serialized once at startup.
pub struct Envelopes {
    bodies: HashMap<ResponseCode, Bytes>,
}

impl Envelopes {
    pub fn new() -> Self {
        let bodies = std::iter::once(ResponseCode::Success)
            .chain(ResponseCode::errors().iter().copied())
            .map(|code| (code, encode(&StatusReply::from(code))))
            .collect();
        Self { bodies }
    }

    pub fn body(&self, code: ResponseCode) -> Bytes {
        self.bodies
            .get(&code)
            .cloned()
            .unwrap_or_else(|| encode(&StatusReply::from(code)))
    }

    pub fn reply(&self, code: ResponseCode) -> Response {
        json_response(self.body(code))
    }
}

impl Default for Envelopes {
    fn default() -> Self {
        Self::new()
    }
}

/// Every administrative reply is HTTP 200; the status lives in the body.
pub fn json_response(body: Bytes) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

pub fn encode<T: Serialize>(value: &T) -> Bytes {
    match serde_json::to_vec(value) {
        Ok(v) => Bytes::from(v),
        Err(_) => Bytes::from_static(br#"{"code":4,"msg":"db error"}"#),
    }
}
