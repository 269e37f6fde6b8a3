//! HTTP/WebSocket endpoint for health snapshots.

pub mod channel;
pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
