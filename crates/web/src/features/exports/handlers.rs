use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use storage::services::export::ExportKind;
use uuid::Uuid;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/competitions/{id}/export/{kind}",
    params(
        ("id" = Uuid, Path, description = "Competition ID"),
        ("kind" = String, Path, description = "Export kind: detailed, summary or leaderboard")
    ),
    responses(
        (status = 200, description = "CSV file download", content_type = "text/csv"),
        (status = 400, description = "Unknown export kind"),
        (status = 404, description = "Competition not found"),
        (status = 412, description = "Competition has no routines to export")
    ),
    tag = "exports"
)]
pub async fn export_results(
    State(state): State<AppState>,
    Path((competition_id, kind)): Path<(Uuid, String)>,
) -> Result<Response, WebError> {
    let kind: ExportKind = kind.parse().map_err(WebError::BadRequest)?;

    let file = services::generate(state.db.pool(), competition_id, kind).await?;

    tracing::info!(
        "Exported {} ({} bytes)",
        file.filename,
        file.bytes.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.filename),
            ),
        ],
        file.bytes,
    )
        .into_response())
}
