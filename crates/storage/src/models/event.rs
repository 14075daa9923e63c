use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub name: String,
    /// Short code used as a column key in summaries, e.g. "VT" or "FX".
    pub code: String,
    pub gender: String,
    pub display_order: i32,
    pub max_score: Decimal,
}
