use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tracing::debug;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

pub async fn health_check() -> Json<Value> {
    debug!("Health check requested");
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}
