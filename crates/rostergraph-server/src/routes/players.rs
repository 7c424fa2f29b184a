//! Player lookup, search and club history routes.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use super::respond;
use crate::state::AppState;
use rostergraph_query::search::DEFAULT_SEARCH_LIMIT;
use rostergraph_query::PlayerMatch;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/player/id", get(get_player_by_id))
        .route("/player/name", get(search_players))
        .route("/player/history/id", get(get_player_history_by_id))
        .route("/player/history/name", get(get_player_history_by_name))
}

#[derive(Deserialize)]
struct PlayerIdQuery {
    player_id: String,
}

#[derive(Deserialize)]
struct PlayerNameQuery {
    name: String,
    limit: Option<usize>,
}

/// GET /soccer/player/id - a player's basic information.
async fn get_player_by_id(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PlayerIdQuery>,
) -> Response {
    respond(state.service().get_player(&query.player_id))
}

/// GET /soccer/player/name - ranked partial-name search.
async fn search_players(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PlayerNameQuery>,
) -> Json<Vec<PlayerMatch>> {
    let limit = query.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    Json(state.service().search_players(&query.name, limit))
}

/// GET /soccer/player/history/id - club history by player id.
async fn get_player_history_by_id(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PlayerIdQuery>,
) -> Response {
    respond(state.service().club_history(&query.player_id))
}

/// GET /soccer/player/history/name - club history of the best name match.
async fn get_player_history_by_name(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PlayerNameQuery>,
) -> Response {
    respond(state.service().club_history_by_name(&query.name))
}
