//! Authgate
//!
//! A minimal user-authentication backend: register, login, fetch and update
//! profile, logout, delete. Sessions are stateless signed tokens verified
//! from either an HTTP-only cookie or an Authorization bearer header.

pub mod api;
pub mod auth;
pub mod core;
pub mod db;

pub use crate::core::Config;
pub use api::ApiServer;
pub use db::DatabaseManager;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for the library
pub type Result<T> = anyhow::Result<T>;
