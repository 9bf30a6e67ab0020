// src/server.rs

//! REST server using Axum.

use crate::config::LocalFailurePolicy;
use crate::facade::{NodeFacade, TransactionLookup};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use raftscope_core::{AdminPeers, BlockDetailsResponse};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Server state
#[derive(Clone)]
pub struct AppState {
    /// Facade shared by all handlers
    pub facade: Arc<NodeFacade>,

    /// Handling of node-local file failures
    pub local_failure: LocalFailurePolicy,
}

/// REST server
pub struct HttpServer {
    /// Listen address
    listen_addr: SocketAddr,

    /// Server state
    state: AppState,
}

impl HttpServer {
    /// Creates a new REST server
    pub fn new(listen_addr: SocketAddr, state: AppState) -> Self {
        Self { listen_addr, state }
    }

    /// Starts the REST server
    pub async fn start(self) -> crate::Result<()> {
        let app = router(self.state);

        let listener = tokio::net::TcpListener::bind(self.listen_addr)
            .await
            .map_err(|e| crate::NodeError::ServerError(format!("Failed to bind {}: {}", self.listen_addr, e)))?;

        tracing::info!("REST server listening on {}", self.listen_addr);

        axum::serve(listener, app)
            .await
            .map_err(|e| crate::NodeError::ServerError(format!("{}", e)))?;

        Ok(())
    }
}

/// Builds the facade's routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/transaction/:id", get(get_transaction))
        .route("/block/:id", get(get_block))
        .route("/peer/:id", get(get_peer))
        .route("/node", get(get_node))
        .with_state(state)
}

// Handlers

async fn root() -> String {
    format!("Raftscope Node Facade v{}", crate::NODE_VERSION)
}

async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<TransactionLookup> {
    Json(state.facade.fetch_transaction(&id).await)
}

async fn get_block(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<BlockDetailsResponse> {
    // An unparsable number falls back to block 0.
    let number = id.parse::<u64>().unwrap_or_else(|e| {
        warn!(id = %id, error = %e, "invalid block number, using 0");
        0
    });

    let block = state.facade.fetch_block(number).await;
    debug!(number, hash = %block.hash, "block fetched");
    Json(block)
}

async fn get_peer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<AdminPeers> {
    Json(state.facade.fetch_peer(&id).await)
}

async fn get_node(State(state): State<AppState>) -> Response {
    match state.facade.fetch_current_node_status().await {
        Ok(info) => Json(info).into_response(),
        Err(e) => {
            error!("Node status failed: {}", e);

            if state.local_failure == LocalFailurePolicy::Abort {
                error!("Local failure policy is abort, terminating");
                std::process::exit(1);
            }

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("{}", e) })),
            )
                .into_response()
        }
    }
}
