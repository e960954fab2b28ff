//! HTTP API module for the actor runtime callbacks and health endpoint.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::{create_router, App};
