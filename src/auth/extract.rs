//! Session verification extractors
//!
//! Two entry points feed one verification core: `BearerUser` reads the
//! Authorization header, `CookieUser` reads the session cookie. Both decode
//! and verify the token, then load the user it names. Handlers receive the
//! resolved user or a 401 rejection.

use crate::api::handlers::AppState;
use crate::auth::jwt::validate_token;
use crate::core::error::{GateError, Result};
use crate::db::models::User;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;

/// Name of the session cookie set at login and cleared at logout
pub const SESSION_COOKIE: &str = "jwt";

/// User authenticated via the Authorization header
#[derive(Debug)]
pub struct BearerUser(pub User);

/// User authenticated via the session cookie
#[derive(Debug)]
pub struct CookieUser(pub User);

/// Verify a token and load the user its issuer claim names
async fn resolve_user(state: &AppState, token: &str) -> Result<User> {
    let claims = validate_token(token, &state.jwt_secret)?;
    let user_id = claims.user_id()?;

    state
        .user_repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| GateError::Unauthenticated(format!("no user for id {}", user_id)))
}

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// A missing header or missing `Bearer ` prefix is a clean 401, never a
/// parse panic. Surrounding whitespace on the token is trimmed.
fn bearer_token(parts: &Parts) -> Result<String> {
    let header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| GateError::Unauthenticated("missing Authorization header".to_string()))?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        GateError::Unauthenticated("Authorization header is not a Bearer token".to_string())
    })?;

    Ok(token.trim().to_string())
}

#[async_trait]
impl FromRequestParts<AppState> for BearerUser {
    type Rejection = GateError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let token = bearer_token(parts)?;
        let user = resolve_user(state, &token).await?;
        Ok(BearerUser(user))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CookieUser {
    type Rejection = GateError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| GateError::Unauthenticated("missing session cookie".to_string()))?;

        let user = resolve_user(state, &token).await?;
        Ok(CookieUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::generate_token;
    use crate::auth::password::hash_password;
    use crate::db::{DatabaseManager, UserRepository};
    use axum::http::Request;
    use std::sync::Arc;

    const SECRET: &str = "test-secret";

    async fn test_state_with_user() -> (AppState, User) {
        let db = Arc::new(DatabaseManager::new_in_memory().unwrap());
        let repo = Arc::new(UserRepository::new(db));
        let hash = hash_password("p1").unwrap();
        let user = repo.create("A", "a@x.com", &hash).await.unwrap();

        let state = AppState {
            user_repo: repo,
            jwt_secret: Arc::new(SECRET.to_string()),
            token_ttl_hours: 24,
        };
        (state, user)
    }

    fn parts_with_header(name: &str, value: &str) -> Parts {
        let req = Request::builder()
            .header(name, value)
            .body(())
            .unwrap();
        req.into_parts().0
    }

    #[tokio::test]
    async fn test_bearer_path_resolves_user() {
        let (state, user) = test_state_with_user().await;
        let token = generate_token(user.id, SECRET, 24).unwrap();

        let mut parts =
            parts_with_header("authorization", &format!("Bearer {}", token));
        let BearerUser(resolved) = BearerUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(resolved.id, user.id);
        assert_eq!(resolved.name, "A");
    }

    #[tokio::test]
    async fn test_bearer_token_whitespace_trimmed() {
        let (state, user) = test_state_with_user().await;
        let token = generate_token(user.id, SECRET, 24).unwrap();

        let mut parts =
            parts_with_header("authorization", &format!("Bearer   {}  ", token));
        assert!(BearerUser::from_request_parts(&mut parts, &state)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_missing_bearer_prefix_rejected() {
        let (state, user) = test_state_with_user().await;
        let token = generate_token(user.id, SECRET, 24).unwrap();

        let mut parts = parts_with_header("authorization", &token);
        let err = BearerUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, GateError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn test_missing_header_rejected() {
        let (state, _user) = test_state_with_user().await;

        let mut parts = Request::builder().body(()).unwrap().into_parts().0;
        let err = BearerUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, GateError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn test_wrong_secret_rejected_on_both_paths() {
        let (state, user) = test_state_with_user().await;
        let token = generate_token(user.id, "other-secret", 24).unwrap();

        let mut parts =
            parts_with_header("authorization", &format!("Bearer {}", token));
        assert!(BearerUser::from_request_parts(&mut parts, &state)
            .await
            .is_err());

        let mut parts = parts_with_header("cookie", &format!("jwt={}", token));
        assert!(CookieUser::from_request_parts(&mut parts, &state)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_cookie_path_resolves_user() {
        let (state, user) = test_state_with_user().await;
        let token = generate_token(user.id, SECRET, 24).unwrap();

        let mut parts = parts_with_header("cookie", &format!("jwt={}", token));
        let CookieUser(resolved) = CookieUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(resolved.id, user.id);
    }

    #[tokio::test]
    async fn test_missing_cookie_rejected() {
        let (state, _user) = test_state_with_user().await;

        let mut parts = Request::builder().body(()).unwrap().into_parts().0;
        let err = CookieUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, GateError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn test_token_for_deleted_user_rejected() {
        let (state, user) = test_state_with_user().await;
        let token = generate_token(user.id, SECRET, 24).unwrap();
        state.user_repo.delete(user.id).await.unwrap();

        let mut parts =
            parts_with_header("authorization", &format!("Bearer {}", token));
        let err = BearerUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, GateError::Unauthenticated(_)));
    }
}
