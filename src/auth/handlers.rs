//! Authentication API handlers

use crate::api::handlers::AppState;
use crate::api::json::Json;
use crate::auth::extract::{BearerUser, CookieUser, SESSION_COOKIE};
use crate::auth::jwt::generate_token;
use crate::auth::models::{
    LoginRequest, MessageResponse, RegisterRequest, TokenResponse, UpdateNameRequest,
    UpdatePasswordRequest, UserInfo,
};
use crate::auth::password::{hash_password, verify_password};
use crate::core::error::{GateError, Result};
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar};

/// Handler for POST /api/register - User registration
///
/// No password-strength or email-format validation is performed; email
/// uniqueness is not enforced at this layer.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<UserInfo>> {
    tracing::info!(email = %req.email, "User registration attempt");

    let password_hash = hash_password(&req.password)?;
    let user = state
        .user_repo
        .create(&req.name, &req.email, &password_hash)
        .await?;

    tracing::info!(user_id = user.id, email = %user.email, "User registered");

    Ok(Json(UserInfo::from(user)))
}

/// Handler for POST /api/login - User login
///
/// Looks up the user by email AND name; both must match. On success issues a
/// session token, sets it as an HTTP-only cookie and returns it in the body.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<TokenResponse>)> {
    tracing::info!(email = %req.email, "Login attempt");

    let user = state
        .user_repo
        .find_by_email_and_name(&req.email, &req.name)
        .await?
        .ok_or_else(|| GateError::NotFound("User not found".to_string()))?;

    if !verify_password(&req.password, &user.password_hash)? {
        tracing::warn!(user_id = user.id, "Incorrect password");
        return Err(GateError::IncorrectPassword);
    }

    let token = generate_token(user.id, &state.jwt_secret, state.token_ttl_hours)?;

    let mut cookie = Cookie::new(SESSION_COOKIE, token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_max_age(time::Duration::hours(state.token_ttl_hours));
    let jar = jar.add(cookie);

    tracing::info!(user_id = user.id, "Login successful");

    Ok((jar, Json(TokenResponse { token })))
}

/// Handler for GET /api/user - Get current user via bearer token
pub async fn get_user(BearerUser(user): BearerUser) -> Json<UserInfo> {
    Json(UserInfo::from(user))
}

/// Handler for GET /api/session - Get current user via session cookie
pub async fn get_session(CookieUser(user): CookieUser) -> Json<UserInfo> {
    Json(UserInfo::from(user))
}

/// Handler for PATCH /api/user/name - Update display name
pub async fn update_name(
    State(state): State<AppState>,
    BearerUser(mut user): BearerUser,
    Json(req): Json<UpdateNameRequest>,
) -> Result<Json<UserInfo>> {
    if req.name.is_empty() {
        return Err(GateError::ValidationError("Name is not valid".to_string()));
    }

    state.user_repo.update_name(user.id, &req.name).await?;
    user.name = req.name;

    tracing::info!(user_id = user.id, "Display name updated");

    Ok(Json(UserInfo::from(user)))
}

/// Handler for PATCH /api/user/password - Update password
///
/// An empty new password is rejected with 406 and the stored hash is left
/// untouched.
pub async fn update_password(
    State(state): State<AppState>,
    BearerUser(user): BearerUser,
    Json(req): Json<UpdatePasswordRequest>,
) -> Result<Json<UserInfo>> {
    if req.password.is_empty() {
        return Err(GateError::PasswordRejected("Invalid password".to_string()));
    }

    let password_hash = hash_password(&req.password)?;
    state
        .user_repo
        .update_password(user.id, &password_hash)
        .await?;

    tracing::info!(user_id = user.id, "Password updated");

    Ok(Json(UserInfo::from(user)))
}

/// Handler for DELETE /api/user - Delete the authenticated user
///
/// Verification failures reject with 401 before this body runs; a success
/// message is only returned once the row is actually gone.
pub async fn delete_user(
    State(state): State<AppState>,
    BearerUser(user): BearerUser,
) -> Result<Json<MessageResponse>> {
    state.user_repo.delete(user.id).await?;

    tracing::info!(user_id = user.id, "User deleted");

    Ok(Json(MessageResponse::new("User deleted")))
}

/// Handler for POST /api/logout - Clear the session cookie
///
/// Stateless: instructs the client to drop the cookie by setting an empty
/// value with an expiry in the past. Tokens already issued remain valid via
/// the header path until they expire.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Json(MessageResponse::new("Logout success")))
}
