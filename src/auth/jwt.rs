//! Session-token codec
//!
//! Encodes the user id and an absolute expiry into a signed HS256 token and
//! verifies such tokens on the way back in. Tokens are self-contained; no
//! server-side session state exists, so validity is purely signature plus
//! expiry at verification time.

use crate::core::error::{GateError, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by a session token
///
/// `iss` is the string form of the user id, `exp` the unix expiry timestamp.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub exp: usize,
}

impl Claims {
    /// Parse the issuer claim back into a user id
    pub fn user_id(&self) -> Result<i64> {
        self.iss
            .parse()
            .map_err(|_| GateError::Unauthenticated(format!("invalid issuer claim: {}", self.iss)))
    }
}

/// Generate a signed session token for a user
pub fn generate_token(user_id: i64, secret: &str, ttl_hours: i64) -> Result<String> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(ttl_hours))
        .ok_or_else(|| GateError::TokenError("Failed to calculate expiration".to_string()))?
        .timestamp() as usize;

    let claims = Claims {
        iss: user_id.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| GateError::TokenError(format!("Failed to sign token: {}", e)))
}

/// Validate a session token and extract its claims
///
/// Rejects tokens with a bad signature or a past expiry.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| GateError::Unauthenticated(format!("invalid token: {}", e)))?;

    Ok(token_data.claims)
}
