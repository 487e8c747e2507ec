//! Application state.

use axum::extract::FromRef;
use neogate_graph::GraphStore;

use crate::auth::AuthToken;

/// Application state shared across handlers.
///
/// The store adapter is owned here and cloned into handlers; nothing is
/// stashed in process-global state.
#[derive(Clone)]
pub struct AppState {
    pub store: GraphStore,
    pub auth: AuthToken,
}

impl AppState {
    pub fn new(store: GraphStore, auth: AuthToken) -> Self {
        Self { store, auth }
    }
}

impl FromRef<AppState> for AuthToken {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
