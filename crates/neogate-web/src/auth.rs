//! Bearer-token auth gate.
//!
//! A single process-wide shared secret gates the mutating routes; read
//! routes are open. No sessions, scopes, expiry, or lockout.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::{header, request::Parts};

use crate::error::ApiError;

/// The configured shared secret.
#[derive(Clone)]
pub struct AuthToken(Arc<str>);

impl AuthToken {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into().into())
    }
}

/// Extractor admitting a request only when `Authorization: Bearer <token>`
/// exactly equals the configured secret.
///
/// Rejection happens before the body is touched, so a bad token never
/// reaches the validator or the store.
pub struct RequireToken;

impl<S> FromRequestParts<S> for RequireToken
where
    AuthToken: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let expected = AuthToken::from_ref(state);
        let presented = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match presented {
            Some(token) if token == &*expected.0 => Ok(Self),
            _ => Err(ApiError::Unauthorized),
        }
    }
}
