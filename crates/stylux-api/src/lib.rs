//! Stylux API crate - axum server for the recommendation endpoint.
//!
//! Serves `POST /api/recommend` from a reply resolver (the built-in rule
//! table by default) plus a health check, so the chat's remote strategy has
//! a real endpoint to call.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
