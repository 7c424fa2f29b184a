//! Club roster routes.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::state::AppState;
use rostergraph_query::{RosterEntry, RosterFilters};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/club/players", get(get_club_players))
}

#[derive(Deserialize)]
struct ClubPlayersQuery {
    club_name: String,
    min_apps: Option<i64>,
    max_apps: Option<i64>,
    season_from: Option<i32>,
    season_to: Option<i32>,
    #[serde(default = "default_order_by")]
    order_by: String,
    #[serde(default = "default_order_dir")]
    order_dir: String,
}

fn default_order_by() -> String {
    "appearances".to_string()
}

fn default_order_dir() -> String {
    "desc".to_string()
}

/// GET /soccer/club/players - everyone who played for a club, filterable.
async fn get_club_players(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ClubPlayersQuery>,
) -> Json<Vec<RosterEntry>> {
    let filters = RosterFilters {
        min_apps: query.min_apps,
        max_apps: query.max_apps,
        season_from: query.season_from,
        season_to: query.season_to,
    };
    Json(state.service().club_roster(
        &query.club_name,
        &filters,
        &query.order_by,
        &query.order_dir,
    ))
}
