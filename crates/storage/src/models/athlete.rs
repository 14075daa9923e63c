use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub club: Option<String>,
    pub level: Option<String>,
    /// One of the fixed age-group labels, e.g. "12 years" or "14+ years".
    /// Stored as text; never a numeric age.
    pub age_group: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

impl Athlete {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
