//! RosterGraph server - axum transport over the roster query API.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
