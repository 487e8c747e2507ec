//! Neogate Core
//!
//! Wire data model and request validation shared by the graph adapter
//! and the HTTP layer.

pub mod error;
pub mod model;

pub use error::ValidationError;
pub use model::{
    GraphEntry, NeighborEdge, Node, NodeCreateRequest, NodeEdge, NodeId, NodeSummary,
    Relationship, RelationshipSpec, REL_TYPE,
};
