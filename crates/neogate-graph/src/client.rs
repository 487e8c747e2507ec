//! Neo4j connection client.

use std::time::Duration;

use anyhow::{Context, Result};
use neo4rs::{ConfigBuilder, Graph, Query};
use serde::Deserialize;

/// How long the startup ping may take before the store counts as down.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "neo4j".to_string(),
        }
    }
}

/// Client owning the Neo4j connection pool.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Create a new GraphClient from config.
    ///
    /// neo4rs uses a lazy pool: `Graph::connect` only creates the pool
    /// object and does NOT establish a real bolt connection yet. A cheap
    /// `RETURN 1` ping, bounded by [`CONNECT_TIMEOUT`], forces the TCP+bolt
    /// handshake so an unreachable store fails startup immediately instead
    /// of on the first request.
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db("neo4j")
            .max_connections(8)
            .fetch_size(200)
            .build()
            .context("Failed to build Neo4j config")?;

        let graph = Graph::connect(neo4j_config)
            .await
            .context("Failed to create Neo4j connection pool")?;

        tokio::time::timeout(CONNECT_TIMEOUT, graph.run(Query::new("RETURN 1".to_string())))
            .await
            .context("Neo4j did not respond within the connect timeout")?
            .context("Neo4j is not responding to queries")?;

        Ok(Self { graph })
    }

    /// Execute a Cypher query that returns no results.
    pub async fn execute(&self, query: Query) -> Result<()> {
        self.graph
            .run(query)
            .await
            .context("Neo4j query execution failed")?;
        Ok(())
    }

    /// Execute a Cypher query and collect all result rows.
    pub async fn query(&self, query: Query) -> Result<Vec<neo4rs::Row>> {
        let mut result = self
            .graph
            .execute(query)
            .await
            .context("Neo4j query failed")?;

        let mut rows = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .context("Neo4j result stream failed")?
        {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Get a reference to the underlying neo4rs Graph.
    pub fn inner(&self) -> &Graph {
        &self.graph
    }
}
