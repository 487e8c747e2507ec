//! Neogate Web Server
//!
//! Axum router for the graph façade: five REST routes plus a health
//! probe, with CORS, request tracing, and a request timeout.

pub mod auth;
pub mod error;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub use auth::AuthToken;
pub use state::AppState;

/// Upper bound on a single request, store round trips included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/nodes",
            get(routes::nodes::list_nodes).post(routes::nodes::create_node),
        )
        .route(
            "/nodes/{id}",
            get(routes::nodes::get_node).delete(routes::nodes::delete_node),
        )
        .route("/graph", get(routes::graph::dump_graph))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state)
}

/// Run the web server until a shutdown signal arrives.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    tracing::info!("HTTP server listening on http://{}:{}", host, port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped; releasing store connections");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
