//! Uniform API error responses.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Error taxonomy of the HTTP layer.
///
/// Every variant renders as a JSON body with a single `detail` field, the
/// shape shared by all non-2xx responses of this service.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or incorrect bearer token on a mutating route.
    Unauthorized,
    /// Structurally invalid creation payload.
    Validation(String),
    /// The operation succeeded but yielded no data.
    NotFound(&'static str),
    /// Connectivity or query failure from the graph store.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(json!({"detail": "Invalid or missing bearer token"})),
            )
                .into_response(),
            ApiError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"detail": msg})),
            )
                .into_response(),
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({"detail": msg}))).into_response()
            }
            ApiError::Internal(err) => {
                tracing::error!(error = ?err, "graph store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"detail": "Graph store operation failed"})),
                )
                    .into_response()
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}
