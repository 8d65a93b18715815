pub mod dto;
pub mod envelope;
pub mod handlers;
pub mod routes;
pub mod state;

pub use envelope::Envelopes;
pub use routes::create_api_routes;
pub use state::AppState;
