use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Per-judge sub-score attached to a routine. Written alongside the routine
/// whenever a judge reference is present on the recording.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Score {
    pub score_id: Uuid,
    pub routine_id: Uuid,
    pub judge_id: Uuid,
    pub score_type: String,
    pub value: Decimal,
    pub notes: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
