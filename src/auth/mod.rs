//! Authentication module
//!
//! User registration and login, session-token generation and validation,
//! password hashing, and the verification extractors protected handlers use.

pub mod extract;
pub mod handlers;
pub mod jwt;
pub mod models;
pub mod password;

pub use extract::{BearerUser, CookieUser, SESSION_COOKIE};
pub use jwt::{generate_token, validate_token, Claims};
pub use password::{hash_password, verify_password};
