//! Core application layer
//!
//! Configuration management, structured logging, and the error type system.

pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::{ErrorResponse, GateError, Result};
pub use logging::Logger;
