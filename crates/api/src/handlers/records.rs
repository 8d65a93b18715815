use axum::{
    extract::{Query, State},
    http::{Method, Uri},
    response::Response,
    routing::any,
    Router,
};
use bytes::Bytes;
use dnslite_domain::{DomainError, NewRecord, RecordFilter, ResponseCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

use crate::dto::{DeleteRecordRequest, ListRecordsReply, RecordReply};
use crate::envelope::{encode, json_response};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add.record", any(add_record))
        .route("/list.record", any(list_records))
        .route("/del.record", any(delete_record))
}

#[instrument(skip(state, body), name = "api_add_record")]
async fn add_record(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    if method != Method::POST {
        return state.envelopes.reply(ResponseCode::BadMethod);
    }
    let new_record: NewRecord = match parse_json(&body) {
        Some(r) => r,
        None => return state.envelopes.reply(ResponseCode::BadRequest),
    };

    match state.add_record.execute(new_record).await {
        Ok(record) => json_response(encode(&RecordReply::ok(record))),
        Err(e) => failure(&state, e),
    }
}

#[instrument(skip(state, body), name = "api_list_records")]
async fn list_records(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let filter = match method {
        Method::GET => Query::<RecordFilter>::try_from_uri(&uri)
            .map(|Query(f)| f)
            .ok(),
        Method::POST if body.iter().all(u8::is_ascii_whitespace) => Some(RecordFilter::default()),
        Method::POST => parse_json(&body),
        _ => return state.envelopes.reply(ResponseCode::BadMethod),
    };
    let Some(filter) = filter else {
        return state.envelopes.reply(ResponseCode::BadRequest);
    };

    match state.list_records.execute(filter).await {
        Ok(records) => {
            debug!(count = records.len(), "Listed DNS records");
            json_response(encode(&ListRecordsReply::ok(records)))
        }
        Err(e) => failure(&state, e),
    }
}

#[instrument(skip(state, body), name = "api_delete_record")]
async fn delete_record(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    if method != Method::POST {
        return state.envelopes.reply(ResponseCode::BadMethod);
    }
    let request: DeleteRecordRequest = match parse_json(&body) {
        Some(r) => r,
        None => return state.envelopes.reply(ResponseCode::BadRequest),
    };

    match state.delete_record.execute(request.id).await {
        Ok(record) => {
            info!(record_id = request.id, "Record deleted via API");
            json_response(encode(&RecordReply::ok(record)))
        }
        Err(e) => failure(&state, e),
    }
}

fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Option<T> {
    serde_json::from_slice(body)
        .map_err(|e| debug!(error = %e, "Rejecting malformed request body"))
        .ok()
}

fn failure(state: &AppState, e: DomainError) -> Response {
    let code = e.response_code();
    match code {
        ResponseCode::StorageError => error!(error = %e, "Record operation failed"),
        _ => warn!(error = %e, code = code.code(), "Record request rejected"),
    }
    state.envelopes.reply(code)
}
