use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Administrative routes, mounted under `/api` by the binary.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .merge(handlers::health::routes())
        .merge(handlers::records::routes())
        .with_state(state)
}
