//! Store properties exercised against a running Neo4j instance.
//!
//! Ignored by default; run with `cargo test -- --ignored` after pointing
//! `DB_URI`/`DB_USERNAME`/`DB_PASSWORD` at a disposable database.

use serde_json::{json, Map, Value};

use neogate_core::{NodeCreateRequest, RelationshipSpec};
use neogate_graph::{GraphClient, GraphConfig, GraphStore};

fn config_from_env() -> GraphConfig {
    let default = GraphConfig::default();
    GraphConfig {
        uri: std::env::var("DB_URI").unwrap_or(default.uri),
        user: std::env::var("DB_USERNAME").unwrap_or(default.user),
        password: std::env::var("DB_PASSWORD").unwrap_or(default.password),
    }
}

async fn store() -> GraphStore {
    let client = GraphClient::connect(&config_from_env())
        .await
        .expect("live Neo4j required");
    GraphStore::new(client)
}

fn props(entries: &[(&str, Value)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn create_request(label: &str, properties: Map<String, Value>) -> NodeCreateRequest {
    NodeCreateRequest {
        label: label.to_string(),
        properties,
        relationships: Vec::new(),
    }
}

#[tokio::test]
#[ignore = "requires a running Neo4j"]
async fn create_then_list_and_fetch_roundtrip() {
    let store = store().await;

    let before = store.list_nodes().await.unwrap().len();
    let outcome = store
        .create_node(&create_request(
            "NeogateLiveTest",
            props(&[("name", json!("A"))]),
        ))
        .await
        .unwrap();

    let after = store.list_nodes().await.unwrap();
    assert_eq!(after.len(), before + 1);
    assert!(after
        .iter()
        .any(|n| n.id == outcome.node_id && n.labels == vec!["NeogateLiveTest".to_string()]));

    // Isolated node: found, but zero edges.
    let edges = store
        .node_with_relationships(outcome.node_id)
        .await
        .unwrap()
        .expect("node exists");
    assert!(edges.is_empty());

    store.delete_node(outcome.node_id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Neo4j"]
async fn properties_surface_verbatim() {
    let store = store().await;

    let outcome = store
        .create_node(&create_request(
            "NeogateLiveTest",
            props(&[("name", json!("A"))]),
        ))
        .await
        .unwrap();
    let neighbor = store
        .create_node(&NodeCreateRequest {
            label: "NeogateLiveTest".to_string(),
            properties: props(&[("name", json!("B"))]),
            relationships: vec![RelationshipSpec {
                target_id: outcome.node_id,
                attributes: props(&[("weight", json!(2))]),
            }],
        })
        .await
        .unwrap();
    assert_eq!(neighbor.relationships_created, 1);
    assert_eq!(neighbor.relationships_skipped, 0);

    let edges = store
        .node_with_relationships(outcome.node_id)
        .await
        .unwrap()
        .expect("node exists");
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].node.attributes["name"], json!("A"));
    assert_eq!(edges[0].target_node.attributes["name"], json!("B"));
    assert_eq!(edges[0].relationship.rel_type, "RELATIONSHIP_TYPE");
    assert_eq!(edges[0].relationship.attributes["weight"], json!(2));

    store.delete_node(neighbor.node_id).await.unwrap();
    store.delete_node(outcome.node_id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Neo4j"]
async fn delete_is_idempotent() {
    let store = store().await;

    let outcome = store
        .create_node(&create_request("NeogateLiveTest", Map::new()))
        .await
        .unwrap();

    store.delete_node(outcome.node_id).await.unwrap();
    store.delete_node(outcome.node_id).await.unwrap();

    assert!(store
        .node_with_relationships(outcome.node_id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
#[ignore = "requires a running Neo4j"]
async fn missing_node_is_none_not_error() {
    let store = store().await;
    assert!(store.node_with_relationships(-1).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires a running Neo4j"]
async fn dangling_target_is_skipped_and_reported() {
    let store = store().await;

    let outcome = store
        .create_node(&NodeCreateRequest {
            label: "NeogateLiveTest".to_string(),
            properties: props(&[("name", json!("dangling"))]),
            relationships: vec![RelationshipSpec {
                target_id: -1,
                attributes: Map::new(),
            }],
        })
        .await
        .unwrap();

    // The node commits; the relationship does not.
    assert_eq!(outcome.relationships_created, 0);
    assert_eq!(outcome.relationships_skipped, 1);

    let edges = store
        .node_with_relationships(outcome.node_id)
        .await
        .unwrap()
        .expect("node exists");
    assert!(edges.is_empty());

    store.delete_node(outcome.node_id).await.unwrap();
}
