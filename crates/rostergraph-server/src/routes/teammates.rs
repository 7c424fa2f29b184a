//! Teammate chain question and shortest path routes.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

use super::{bad_request, respond};
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/teammates/question", get(get_n_step_question))
        .route("/teammates/shortest/id", get(get_shortest_path_by_id))
        .route("/teammates/shortest/name", get(get_shortest_path_by_name))
}

#[derive(Deserialize)]
struct QuestionQuery {
    #[serde(default = "default_steps")]
    steps: usize,
    #[serde(default = "default_num_questions")]
    num_questions: usize,
    #[serde(default = "default_num_options")]
    num_options: usize,
}

fn default_steps() -> usize {
    2
}

fn default_num_questions() -> usize {
    10
}

fn default_num_options() -> usize {
    4
}

#[derive(Deserialize)]
struct PlayerPairQuery {
    player_a: String,
    player_b: String,
}

/// GET /soccer/teammates/question - N-step multiple-choice questions.
async fn get_n_step_question(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuestionQuery>,
) -> Response {
    let service = state.service();
    let max_steps = service.chain_budget().max_steps;
    if query.steps == 0 || query.steps > max_steps {
        return bad_request(format!("steps must be between 1 and {}", max_steps));
    }

    let result = tokio::task::spawn_blocking(move || {
        let mut rng = StdRng::from_entropy();
        service.n_step_chains(query.steps, query.num_questions, query.num_options, &mut rng)
    })
    .await;

    match result {
        Ok(questions) => Json(questions).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": format!("Question generation failed: {}", e) })),
        )
            .into_response(),
    }
}

/// GET /soccer/teammates/shortest/id - shortest teammate path by ids.
async fn get_shortest_path_by_id(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PlayerPairQuery>,
) -> Response {
    respond(
        state
            .service()
            .shortest_path(&query.player_a, &query.player_b),
    )
}

/// GET /soccer/teammates/shortest/name - shortest teammate path by names.
async fn get_shortest_path_by_name(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PlayerPairQuery>,
) -> Response {
    respond(
        state
            .service()
            .shortest_path_by_name(&query.player_a, &query.player_b),
    )
}
