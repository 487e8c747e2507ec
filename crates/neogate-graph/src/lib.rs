//! # Neogate Graph
//!
//! Neo4j store adapter: connection client, Bolt value conversion, and the
//! store operations behind the HTTP façade.

pub mod client;
pub mod convert;
pub mod store;

pub use client::{GraphClient, GraphConfig};
pub use store::{CreateOutcome, GraphStore};
