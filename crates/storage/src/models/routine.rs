use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One athlete's single performance on one event within one competition.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Routine {
    pub routine_id: Uuid,
    pub competition_id: Uuid,
    pub athlete_id: Uuid,
    pub event_id: Uuid,
    pub judge_id: Option<Uuid>,
    pub difficulty_score: Decimal,
    pub execution_score: Decimal,
    pub neutral_deductions: Decimal,
    /// Always derived server-side: max(0, difficulty + execution - deductions).
    pub final_score: Decimal,
    pub status: String,
    pub notes: Option<String>,
    pub performed_at: chrono::NaiveDateTime,
    pub created_at: chrono::NaiveDateTime,
}
