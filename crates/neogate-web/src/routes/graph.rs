//! Full-graph dump handler.

use axum::{extract::State, Json};

use neogate_core::GraphEntry;

use crate::error::ApiError;
use crate::state::AppState;

/// Dump every node with its incident edges.
///
/// Isolated nodes appear with an empty `relationships` list; an empty
/// store is a 404, matching the list view.
pub async fn dump_graph(
    State(state): State<AppState>,
) -> Result<Json<Vec<GraphEntry>>, ApiError> {
    let entries = state.store.dump_graph().await?;
    if entries.is_empty() {
        return Err(ApiError::NotFound("No nodes found"));
    }
    Ok(Json(entries))
}
