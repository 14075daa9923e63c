use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::routine::{
    CreateRoutineRequest, RoutineResponse, RoutineWithRelations, UpdateRoutineRequest,
};
use storage::models::Score;
use uuid::Uuid;
use validator::Validate;

use crate::cache;
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/competitions/{id}/routines",
    params(
        ("id" = Uuid, Path, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Competition routines with athlete and event attached", body = Vec<RoutineWithRelations>)
    ),
    tag = "routines"
)]
pub async fn list_for_competition(
    State(state): State<AppState>,
    Path(competition_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let cache_key = cache::key("routines", &[&competition_id.to_string()]);
    if let Some(cached) = state.cache.get(&cache_key) {
        return Ok(Json(cached).into_response());
    }

    let routines = services::list_for_competition(state.db.pool(), competition_id).await?;

    let payload = serde_json::to_value(&routines)
        .map_err(|e| WebError::InternalServerError(e.to_string()))?;
    state.cache.put(&cache_key, payload.clone());

    Ok(Json(payload).into_response())
}

#[utoipa::path(
    get,
    path = "/api/routines/{id}",
    params(
        ("id" = Uuid, Path, description = "Routine ID")
    ),
    responses(
        (status = 200, description = "Routine found", body = RoutineResponse),
        (status = 404, description = "Routine not found")
    ),
    tag = "routines"
)]
pub async fn get_routine(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let routine = services::get_routine(state.db.pool(), id).await?;

    Ok(Json(RoutineResponse::from(routine)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/routines/{id}/scores",
    params(
        ("id" = Uuid, Path, description = "Routine ID")
    ),
    responses(
        (status = 200, description = "Per-judge sub-scores of the routine", body = Vec<Score>),
        (status = 404, description = "Routine not found")
    ),
    tag = "routines"
)]
pub async fn list_scores(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let scores = services::list_scores(state.db.pool(), id).await?;

    Ok(Json(scores).into_response())
}

#[utoipa::path(
    post,
    path = "/api/routines",
    request_body = CreateRoutineRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Routine recorded successfully", body = RoutineResponse),
        (status = 400, description = "Validation error or score above the event max"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Referenced record does not exist")
    ),
    tag = "routines"
)]
pub async fn create_routine(
    State(state): State<AppState>,
    Json(req): Json<CreateRoutineRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let routine = services::create_routine(state.db.pool(), &req).await?;
    state.cache.invalidate("routines");

    Ok((StatusCode::CREATED, Json(RoutineResponse::from(routine))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/routines/{id}",
    params(
        ("id" = Uuid, Path, description = "Routine ID")
    ),
    request_body = UpdateRoutineRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Routine corrected successfully", body = RoutineResponse),
        (status = 400, description = "Validation error or score above the event max"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Routine not found")
    ),
    tag = "routines"
)]
pub async fn update_routine(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateRoutineRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_routine(state.db.pool(), id, &update_req).await?;
    state.cache.invalidate("routines");

    Ok(Json(RoutineResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/routines/{id}",
    params(
        ("id" = Uuid, Path, description = "Routine ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Routine deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Routine not found")
    ),
    tag = "routines"
)]
pub async fn delete_routine(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_routine(state.db.pool(), id).await?;
    state.cache.invalidate("routines");

    Ok(StatusCode::NO_CONTENT.into_response())
}
