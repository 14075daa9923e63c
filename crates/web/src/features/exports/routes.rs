use axum::{Router, routing::get};

use super::handlers::export_results;
use crate::state::AppState;

/// CSV downloads mounted under `/api/competitions`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/:id/export/:kind", get(export_results))
}
