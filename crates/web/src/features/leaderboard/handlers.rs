use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::dto::leaderboard::LeaderboardResponse;
use uuid::Uuid;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/competitions/{id}/leaderboard",
    params(
        ("id" = Uuid, Path, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Leaderboard grouped by gender, level and age-group", body = LeaderboardResponse),
        (status = 404, description = "Competition not found")
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(competition_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let leaderboard = services::get_leaderboard(state.db.pool(), competition_id).await?;

    Ok(Json(leaderboard).into_response())
}
