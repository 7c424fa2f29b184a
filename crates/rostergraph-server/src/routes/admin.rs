//! Health and snapshot reload routes.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use super::error_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(get_health))
        .route("/admin/reload", post(reload_snapshot))
}

/// GET /health - liveness plus current snapshot statistics.
async fn get_health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let service = state.service();
    let stats = service.graph().stats();
    Json(serde_json::json!({
        "status": "healthy",
        "service": "rostergraph",
        "players": stats.players,
        "clubs": stats.clubs,
        "tenures": stats.tenures,
        "teammateEdges": stats.teammate_edges,
    }))
}

/// POST /admin/reload - rebuild the snapshot from disk and swap it in.
async fn reload_snapshot(State(state): State<Arc<AppState>>) -> Response {
    let result = tokio::task::spawn_blocking(move || state.reload()).await;
    match result {
        Ok(Ok(stats)) => Json(serde_json::json!({
            "status": "reloaded",
            "players": stats.players,
            "clubs": stats.clubs,
            "tenures": stats.tenures,
            "teammateEdges": stats.teammate_edges,
        }))
        .into_response(),
        Ok(Err(e)) => {
            tracing::warn!("Snapshot reload failed: {}", e);
            error_response(&e).into_response()
        }
        Err(e) => error_response(&rostergraph_core::Error::Io(std::io::Error::other(
            e.to_string(),
        )))
        .into_response(),
    }
}
