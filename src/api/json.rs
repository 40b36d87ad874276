//! Custom JSON extractor that routes body-parse failures through GateError
//!
//! A wrapper around `axum::Json` so that malformed bodies and missing fields
//! produce the same `ErrorResponse` shape as every other failure instead of
//! axum's plain-text rejections.

use crate::core::error::GateError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl From<JsonRejection> for GateError {
    fn from(rejection: JsonRejection) -> Self {
        GateError::InvalidRequest(rejection.body_text())
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = GateError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(rejection.into()),
        }
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}
