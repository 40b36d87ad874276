//! REST API module
//!
//! HTTP server, routing, shared state, and request middleware.

pub mod handlers;
pub mod json;
pub mod middleware;
pub mod routes;
pub mod server;

pub use handlers::AppState;
pub use json::Json;
pub use middleware::{trace_id_middleware, TraceId, TRACE_ID_HEADER};
pub use server::ApiServer;
