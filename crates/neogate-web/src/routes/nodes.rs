//! Node route handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use neogate_core::{NodeCreateRequest, NodeEdge, NodeId, NodeSummary};

use crate::auth::RequireToken;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_nodes(
    State(state): State<AppState>,
) -> Result<Json<Vec<NodeSummary>>, ApiError> {
    let nodes = state.store.list_nodes().await?;
    if nodes.is_empty() {
        return Err(ApiError::NotFound("No nodes found"));
    }
    Ok(Json(nodes))
}

/// Detail view: one triple per incident relationship.
///
/// An existing node without relationships yields `200` with an empty list;
/// `404` means the identifier matched no node at all.
pub async fn get_node(
    State(state): State<AppState>,
    Path(id): Path<NodeId>,
) -> Result<Json<Vec<NodeEdge>>, ApiError> {
    match state.store.node_with_relationships(id).await? {
        Some(edges) => Ok(Json(edges)),
        None => Err(ApiError::NotFound("Node not found")),
    }
}

pub async fn create_node(
    _token: RequireToken,
    State(state): State<AppState>,
    Json(req): Json<NodeCreateRequest>,
) -> Result<Json<Value>, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let outcome = state.store.create_node(&req).await?;
    Ok(Json(json!({
        "message": "Node and relationships added successfully",
        "node_id": outcome.node_id,
        "relationships_created": outcome.relationships_created,
        "relationships_skipped": outcome.relationships_skipped,
    })))
}

pub async fn delete_node(
    _token: RequireToken,
    State(state): State<AppState>,
    Path(id): Path<NodeId>,
) -> Result<Json<Value>, ApiError> {
    state.store.delete_node(id).await?;
    Ok(Json(json!({
        "message": "Node and relationships deleted successfully",
    })))
}
