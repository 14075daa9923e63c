use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    create_routine, delete_routine, get_routine, list_for_competition, list_scores,
    update_routine,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_routine))
        .route("/:id", put(update_routine))
        .route("/:id", delete(delete_routine))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/:id", get(get_routine))
        .route("/:id/scores", get(list_scores))
        .merge(protected)
}

/// Routine listing mounted under `/api/competitions`.
pub fn competition_routes() -> Router<AppState> {
    Router::new().route("/:id/routines", get(list_for_competition))
}
