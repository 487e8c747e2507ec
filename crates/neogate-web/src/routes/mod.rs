//! Route handlers.

pub mod graph;
pub mod nodes;

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "neogate",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
