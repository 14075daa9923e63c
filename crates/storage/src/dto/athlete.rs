use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::is_valid_age_group;

/// Response containing basic athlete information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub athlete_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub club: Option<String>,
    pub level: Option<String>,
    pub age_group: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "First name must be between 1 and 255 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Last name must be between 1 and 255 characters"
    ))]
    pub last_name: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    #[validate(length(max = 255))]
    pub club: Option<String>,

    #[validate(length(max = 255))]
    pub level: Option<String>,

    #[validate(custom(function = "validate_age_group"))]
    pub age_group: Option<String>,
}

/// Request payload for updating an existing athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,

    #[validate(custom(function = "validate_gender"))]
    pub gender: Option<String>,

    #[validate(length(max = 255))]
    pub club: Option<String>,

    #[validate(length(max = 255))]
    pub level: Option<String>,

    #[validate(custom(function = "validate_age_group"))]
    pub age_group: Option<String>,
}

// Validation helpers
fn validate_gender(gender: &str) -> Result<(), validator::ValidationError> {
    const VALID_GENDERS: &[&str] = &["male", "female"];

    if VALID_GENDERS.contains(&gender) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_gender"))
    }
}

fn validate_age_group(age_group: &str) -> Result<(), validator::ValidationError> {
    if is_valid_age_group(age_group) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_age_group"))
    }
}

impl From<crate::models::Athlete> for AthleteResponse {
    fn from(athlete: crate::models::Athlete) -> Self {
        Self {
            athlete_id: athlete.athlete_id,
            first_name: athlete.first_name,
            last_name: athlete.last_name,
            gender: athlete.gender,
            club: athlete.club,
            level: athlete.level,
            age_group: athlete.age_group,
            created_at: athlete.created_at,
        }
    }
}
