//! Store operations behind the HTTP façade.
//!
//! Each operation is one parameterized Cypher interaction. Node identity is
//! the store's native id (`id(n)`) throughout; no user-level `id` property
//! is consulted. Errors from the driver propagate unretried.

use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use neo4rs::{BoltType, Query};
use tracing::{debug, warn};

use neogate_core::{
    GraphEntry, NeighborEdge, Node, NodeCreateRequest, NodeEdge, NodeId, NodeSummary, REL_TYPE,
};

use crate::client::GraphClient;
use crate::convert::{node_to_wire, props_to_bolt, relation_to_wire};

/// Store adapter executing the façade's operations.
#[derive(Clone)]
pub struct GraphStore {
    client: GraphClient,
}

/// Result of a node-creation request.
///
/// `relationships_skipped` counts entries whose `target_id` matched no
/// node: the transaction commits without them, and the caller is told.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateOutcome {
    pub node_id: NodeId,
    pub relationships_created: usize,
    pub relationships_skipped: usize,
}

impl GraphStore {
    pub fn new(client: GraphClient) -> Self {
        Self { client }
    }

    /// List every node's identifier and labels.
    ///
    /// An empty database yields an empty list, not an error.
    pub async fn list_nodes(&self) -> Result<Vec<NodeSummary>> {
        let query = Query::new("MATCH (n) RETURN id(n) AS id, labels(n) AS labels".to_string());

        let rows = self.client.query(query).await?;
        let mut nodes = Vec::with_capacity(rows.len());
        for row in rows {
            let id: NodeId = row.get("id").context("Row is missing the id column")?;
            let labels: Vec<String> = row
                .get("labels")
                .context("Row is missing the labels column")?;
            nodes.push(NodeSummary { id, labels });
        }
        Ok(nodes)
    }

    /// Fetch a node's (node, relationship, neighbor) triples, traversing
    /// relationships in either direction.
    ///
    /// Returns `None` when no node has this identifier and `Some` with an
    /// empty list for a node without relationships, so callers can tell
    /// "not found" from "isolated".
    pub async fn node_with_relationships(&self, id: NodeId) -> Result<Option<Vec<NodeEdge>>> {
        let query = Query::new(
            "MATCH (n) WHERE id(n) = $id
             OPTIONAL MATCH (n)-[r]-(m)
             RETURN n AS node, r AS relationship, m AS target_node"
                .to_string(),
        )
        .param("id", id);

        let rows = self.client.query(query).await?;
        if rows.is_empty() {
            return Ok(None);
        }

        let mut edges = Vec::new();
        for row in rows {
            let node: neo4rs::Node = row.get("node").context("Row is missing the node column")?;
            let relationship: Option<neo4rs::Relation> = row
                .get("relationship")
                .context("Row is missing the relationship column")?;
            let target: Option<neo4rs::Node> = row
                .get("target_node")
                .context("Row is missing the target_node column")?;

            if let (Some(relationship), Some(target)) = (relationship, target) {
                edges.push(NodeEdge {
                    node: node_to_wire(&node),
                    relationship: relation_to_wire(&relationship),
                    target_node: node_to_wire(&target),
                });
            }
        }
        Ok(Some(edges))
    }

    /// Create a node and its relationships in a single write transaction.
    ///
    /// The label is the only caller-supplied text spliced into the
    /// statement and must pass the identifier allow-list first; all values
    /// travel as bound parameters. A relationship whose `target_id` matches
    /// no node creates nothing; the transaction still commits and the skip
    /// is counted in the outcome.
    pub async fn create_node(&self, req: &NodeCreateRequest) -> Result<CreateOutcome> {
        req.validate()?;

        let mut txn = self
            .client
            .inner()
            .start_txn()
            .await
            .context("Failed to open a write transaction")?;

        let create = Query::new(format!(
            "CREATE (n:{} $props) RETURN id(n) AS id",
            req.label
        ))
        .param("props", BoltType::Map(props_to_bolt(&req.properties)));

        let mut stream = txn.execute(create).await.context("Node creation failed")?;
        let row = stream
            .next(txn.handle())
            .await
            .context("Node creation result stream failed")?
            .ok_or_else(|| anyhow!("Node creation returned no row"))?;
        let node_id: NodeId = row.get("id").context("Created node has no id column")?;

        let mut relationships_created = 0usize;
        for entry in &req.relationships {
            let link = Query::new(format!(
                "MATCH (n), (m) WHERE id(n) = $node_id AND id(m) = $target_id
                 CREATE (n)-[r:{REL_TYPE}]->(m)
                 SET r = $attrs
                 RETURN count(r) AS created"
            ))
            .param("node_id", node_id)
            .param("target_id", entry.target_id)
            .param("attrs", BoltType::Map(props_to_bolt(&entry.attributes)));

            let mut stream = txn
                .execute(link)
                .await
                .context("Relationship creation failed")?;
            let created: i64 = match stream
                .next(txn.handle())
                .await
                .context("Relationship creation result stream failed")?
            {
                Some(row) => row
                    .get("created")
                    .context("Relationship row has no created column")?,
                None => 0,
            };
            relationships_created += created as usize;
        }

        txn.commit()
            .await
            .context("Failed to commit the create transaction")?;

        let relationships_skipped = req.relationships.len() - relationships_created;
        if relationships_skipped > 0 {
            warn!(
                node_id,
                skipped = relationships_skipped,
                "relationship targets not found; entries dropped"
            );
        }
        debug!(
            node_id,
            label = %req.label,
            created = relationships_created,
            "created node"
        );

        Ok(CreateOutcome {
            node_id,
            relationships_created,
            relationships_skipped,
        })
    }

    /// Detach-delete a node and all its incident relationships.
    ///
    /// Idempotent: deleting an absent identifier succeeds.
    pub async fn delete_node(&self, id: NodeId) -> Result<()> {
        let query = Query::new("MATCH (n) WHERE id(n) = $id DETACH DELETE n".to_string())
            .param("id", id);

        self.client.execute(query).await?;
        debug!(node_id = id, "deleted node");
        Ok(())
    }

    /// Dump the whole graph, one entry per node with all incident edges.
    pub async fn dump_graph(&self) -> Result<Vec<GraphEntry>> {
        let query = Query::new(
            "MATCH (n)
             OPTIONAL MATCH (n)-[r]-(m)
             RETURN n AS node, r AS relationship, m AS target_node"
                .to_string(),
        );

        let rows = self.client.query(query).await?;
        let mut flat = Vec::with_capacity(rows.len());
        for row in rows {
            let node: neo4rs::Node = row.get("node").context("Row is missing the node column")?;
            let relationship: Option<neo4rs::Relation> = row
                .get("relationship")
                .context("Row is missing the relationship column")?;
            let target: Option<neo4rs::Node> = row
                .get("target_node")
                .context("Row is missing the target_node column")?;

            let edge = match (relationship, target) {
                (Some(relationship), Some(target)) => Some(NeighborEdge {
                    relationship: relation_to_wire(&relationship),
                    target_node: node_to_wire(&target),
                }),
                _ => None,
            };
            flat.push((node_to_wire(&node), edge));
        }

        Ok(group_entries(flat))
    }
}

/// Group (node, edge) rows into one entry per node, preserving row order.
fn group_entries(rows: Vec<(Node, Option<NeighborEdge>)>) -> Vec<GraphEntry> {
    let mut order: Vec<NodeId> = Vec::new();
    let mut by_id: HashMap<NodeId, GraphEntry> = HashMap::new();

    for (node, edge) in rows {
        let id = node.id;
        let entry = by_id.entry(id).or_insert_with(|| {
            order.push(id);
            GraphEntry {
                node,
                relationships: Vec::new(),
            }
        });
        if let Some(edge) = edge {
            entry.relationships.push(edge);
        }
    }

    order
        .into_iter()
        .filter_map(|id| by_id.remove(&id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn node(id: NodeId, label: &str) -> Node {
        Node {
            id,
            labels: vec![label.to_string()],
            attributes: Map::new(),
        }
    }

    fn edge(target: Node) -> NeighborEdge {
        NeighborEdge {
            relationship: neogate_core::Relationship {
                rel_type: REL_TYPE.to_string(),
                attributes: Map::new(),
            },
            target_node: target,
        }
    }

    #[test]
    fn test_group_entries_keeps_isolated_nodes() {
        let entries = group_entries(vec![(node(1, "Person"), None)]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].node.id, 1);
        assert!(entries[0].relationships.is_empty());
    }

    #[test]
    fn test_group_entries_collects_edges_per_node() {
        let rows = vec![
            (node(1, "Person"), Some(edge(node(2, "Person")))),
            (node(1, "Person"), Some(edge(node(3, "City")))),
            (node(2, "Person"), Some(edge(node(1, "Person")))),
            (node(3, "City"), Some(edge(node(1, "Person")))),
        ];
        let entries = group_entries(rows);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].node.id, 1);
        assert_eq!(entries[0].relationships.len(), 2);
        assert_eq!(entries[1].relationships.len(), 1);
        assert_eq!(entries[2].relationships.len(), 1);
    }

    #[test]
    fn test_group_entries_preserves_first_seen_order() {
        let rows = vec![
            (node(5, "A"), None),
            (node(2, "B"), None),
            (node(9, "C"), None),
        ];
        let ids: Vec<NodeId> = group_entries(rows).into_iter().map(|e| e.node.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }
}
