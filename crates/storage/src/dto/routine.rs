use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Routine;

/// Request payload for recording a routine. Score components default to zero
/// when absent; the final score is always derived server-side.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRoutineRequest {
    pub competition_id: Uuid,
    pub athlete_id: Uuid,
    pub event_id: Uuid,

    pub judge_id: Option<Uuid>,

    #[validate(custom(function = "validate_non_negative"))]
    #[serde(default)]
    pub difficulty_score: Decimal,

    #[validate(custom(function = "validate_non_negative"))]
    #[serde(default)]
    pub execution_score: Decimal,

    #[validate(custom(function = "validate_non_negative"))]
    #[serde(default)]
    pub neutral_deductions: Decimal,

    #[validate(custom(function = "validate_status"))]
    #[serde(default = "default_status")]
    pub status: String,

    pub notes: Option<String>,
}

/// Request payload for correcting an already-recorded routine
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRoutineRequest {
    pub judge_id: Option<Uuid>,

    #[validate(custom(function = "validate_non_negative"))]
    pub difficulty_score: Option<Decimal>,

    #[validate(custom(function = "validate_non_negative"))]
    pub execution_score: Option<Decimal>,

    #[validate(custom(function = "validate_non_negative"))]
    pub neutral_deductions: Option<Decimal>,

    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,

    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoutineResponse {
    pub routine_id: Uuid,
    pub competition_id: Uuid,
    pub athlete_id: Uuid,
    pub event_id: Uuid,
    pub judge_id: Option<Uuid>,
    pub difficulty_score: Decimal,
    pub execution_score: Decimal,
    pub neutral_deductions: Decimal,
    pub final_score: Decimal,
    pub status: String,
    pub notes: Option<String>,
    pub performed_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

/// Athlete fields carried on a denormalized routine
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoutineAthlete {
    pub athlete_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub club: Option<String>,
    pub level: Option<String>,
    pub age_group: Option<String>,
}

/// Event fields carried on a denormalized routine
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoutineEvent {
    pub event_id: Uuid,
    pub name: String,
    pub code: String,
    pub gender: String,
    pub display_order: i32,
    pub max_score: Decimal,
}

/// A routine joined with its athlete and event, as consumed by the
/// leaderboard and export pipelines. Assembled once at the repository
/// boundary so downstream code never re-resolves relations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoutineWithRelations {
    #[serde(flatten)]
    pub routine: Routine,
    pub athlete: RoutineAthlete,
    pub event: RoutineEvent,
}

impl RoutineAthlete {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// Validation helpers
fn default_status() -> String {
    "completed".to_string()
}

fn validate_status(status: &str) -> Result<(), validator::ValidationError> {
    const VALID_STATUSES: &[&str] = &["pending", "in_progress", "completed"];

    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_status"))
    }
}

fn validate_non_negative(value: &Decimal) -> Result<(), validator::ValidationError> {
    if value.is_sign_negative() {
        Err(validator::ValidationError::new("negative_score"))
    } else {
        Ok(())
    }
}

impl From<Routine> for RoutineResponse {
    fn from(routine: Routine) -> Self {
        Self {
            routine_id: routine.routine_id,
            competition_id: routine.competition_id,
            athlete_id: routine.athlete_id,
            event_id: routine.event_id,
            judge_id: routine.judge_id,
            difficulty_score: routine.difficulty_score,
            execution_score: routine.execution_score,
            neutral_deductions: routine.neutral_deductions,
            final_score: routine.final_score,
            status: routine.status,
            notes: routine.notes,
            performed_at: routine.performed_at,
            created_at: routine.created_at,
        }
    }
}
