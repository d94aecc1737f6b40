//! HTTP API module for the service info and health endpoints.

pub mod handlers;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
