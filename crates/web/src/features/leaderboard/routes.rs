use axum::{Router, routing::get};

use super::handlers::get_leaderboard;
use crate::state::AppState;

/// Leaderboard view mounted under `/api/competitions`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/:id/leaderboard", get(get_leaderboard))
}
