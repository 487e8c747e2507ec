//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use neogate_graph::{GraphClient, GraphConfig, GraphStore};
use neogate_web::{AppState, AuthToken};

#[derive(Args)]
pub struct ServeArgs {
    /// Bolt URI of the Neo4j instance
    #[arg(long, env = "DB_URI", default_value = "bolt://localhost:7687")]
    pub uri: String,

    /// Database user
    #[arg(long, env = "DB_USERNAME", default_value = "neo4j")]
    pub user: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", default_value = "neo4j", hide_env_values = true)]
    pub password: String,

    /// Shared bearer secret gating the mutating routes
    #[arg(long, env = "API_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value = "3000")]
    pub port: u16,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = GraphConfig {
        uri: args.uri,
        user: args.user,
        password: args.password,
    };

    // Fail fast: an unreachable store aborts startup, not the first request.
    let client = GraphClient::connect(&config).await?;
    let state = AppState::new(GraphStore::new(client), AuthToken::new(args.token));

    println!();
    println!("  {} {}", "Neogate".cyan().bold(), "Graph Façade".bold());
    println!();
    println!(
        "  {}    http://{}:{}/nodes",
        "API".green(),
        args.host,
        args.port
    );
    println!("  {}  {}", "Store".green(), config.uri);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    neogate_web::run_server(state, &args.host, args.port).await
}
