//! Wire data model.
//!
//! One canonical shape per entity across every route: node identifiers are
//! the store's native id (an `i64`), and labels are always a list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Native store identifier of a node.
pub type NodeId = i64;

/// Relationship type applied to every edge created through the API.
pub const REL_TYPE: &str = "RELATIONSHIP_TYPE";

/// A node as it appears in the list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSummary {
    pub id: NodeId,
    pub labels: Vec<String>,
}

/// A node with its full property map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub labels: Vec<String>,
    pub attributes: Map<String, Value>,
}

/// A relationship with its property map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(rename = "type")]
    pub rel_type: String,
    pub attributes: Map<String, Value>,
}

/// One (node, incident edge, neighbor) triple from the detail view.
///
/// A node with k incident relationships yields k of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeEdge {
    pub node: Node,
    pub relationship: Relationship,
    pub target_node: Node,
}

/// An edge as seen from one endpoint, used in the graph dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborEdge {
    pub relationship: Relationship,
    pub target_node: Node,
}

/// One node and all its incident edges in the full-graph dump.
///
/// Isolated nodes appear with an empty `relationships` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEntry {
    pub node: Node,
    pub relationships: Vec<NeighborEdge>,
}

/// A relationship entry in a creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipSpec {
    pub target_id: NodeId,
    pub attributes: Map<String, Value>,
}

/// Payload for `POST /nodes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeCreateRequest {
    pub label: String,
    pub properties: Map<String, Value>,
    pub relationships: Vec<RelationshipSpec>,
}

impl NodeCreateRequest {
    /// Structural validation of the payload.
    ///
    /// The label ends up in a schema position of a Cypher statement, where
    /// parameter binding cannot protect it, so it is held to a strict
    /// identifier charset. Everything else (property shapes, whether
    /// `target_id` entries exist) is deliberately left to the store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_label(&self.label)
    }
}

/// Check that a label is safe to splice into a Cypher label position.
///
/// Allowed: an ASCII letter followed by ASCII letters, digits, or
/// underscores.
pub fn validate_label(label: &str) -> Result<(), ValidationError> {
    let mut chars = label.chars();
    match chars.next() {
        None => return Err(ValidationError::EmptyLabel),
        Some(c) if !c.is_ascii_alphabetic() => {
            return Err(ValidationError::BadLabelStart(label.to_string()));
        }
        Some(_) => {}
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(ValidationError::UnsafeLabel(label.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_label_accepts_identifiers() {
        for label in ["Person", "a", "Node_2", "HTTP2", "x_y_z"] {
            assert!(validate_label(label).is_ok(), "expected ok: {label}");
        }
    }

    #[test]
    fn test_label_rejects_empty() {
        assert_eq!(validate_label(""), Err(ValidationError::EmptyLabel));
    }

    #[test]
    fn test_label_rejects_bad_start() {
        for label in ["1Person", "_x", "9"] {
            assert!(matches!(
                validate_label(label),
                Err(ValidationError::BadLabelStart(_))
            ));
        }
    }

    #[test]
    fn test_label_rejects_injection() {
        for label in ["Person) DETACH DELETE (n", "a b", "Tag`x`", "é", "A-B"] {
            assert!(matches!(
                validate_label(label),
                Err(ValidationError::UnsafeLabel(_))
            ));
        }
    }

    #[test]
    fn test_relationship_serializes_type_field() {
        let rel = Relationship {
            rel_type: REL_TYPE.to_string(),
            attributes: Map::new(),
        };
        let value = serde_json::to_value(&rel).unwrap();
        assert_eq!(value["type"], json!("RELATIONSHIP_TYPE"));
        assert!(value.get("rel_type").is_none());
    }

    #[test]
    fn test_create_request_roundtrip() {
        let req: NodeCreateRequest = serde_json::from_value(json!({
            "label": "Person",
            "properties": {"name": "A", "age": 30},
            "relationships": [{"target_id": 7, "attributes": {"weight": 1.5}}],
        }))
        .unwrap();

        assert_eq!(req.label, "Person");
        assert_eq!(req.properties["name"], json!("A"));
        assert_eq!(req.relationships.len(), 1);
        assert_eq!(req.relationships[0].target_id, 7);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_requires_all_fields() {
        let missing: Result<NodeCreateRequest, _> =
            serde_json::from_value(json!({"label": "Person"}));
        assert!(missing.is_err());
    }
}
