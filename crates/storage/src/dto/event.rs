use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(min = 1, max = 16, message = "Code must be between 1 and 16 characters"))]
    pub code: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    #[serde(default)]
    pub display_order: i32,

    #[validate(custom(function = "validate_non_negative"))]
    pub max_score: Decimal,
}

/// Request payload for updating an existing event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 16))]
    pub code: Option<String>,

    #[validate(custom(function = "validate_gender"))]
    pub gender: Option<String>,

    pub display_order: Option<i32>,

    #[validate(custom(function = "validate_non_negative"))]
    pub max_score: Option<Decimal>,
}

/// Query filter for listing events
#[derive(Debug, Deserialize, IntoParams)]
pub struct EventFilter {
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub event_id: Uuid,
    pub name: String,
    pub code: String,
    pub gender: String,
    pub display_order: i32,
    pub max_score: Decimal,
}

fn validate_gender(gender: &str) -> Result<(), validator::ValidationError> {
    const VALID_GENDERS: &[&str] = &["male", "female"];

    if VALID_GENDERS.contains(&gender) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_gender"))
    }
}

fn validate_non_negative(value: &Decimal) -> Result<(), validator::ValidationError> {
    if value.is_sign_negative() {
        Err(validator::ValidationError::new("negative_score"))
    } else {
        Ok(())
    }
}

impl From<crate::models::Event> for EventResponse {
    fn from(event: crate::models::Event) -> Self {
        Self {
            event_id: event.event_id,
            name: event.name,
            code: event.code,
            gender: event.gender,
            display_order: event.display_order,
            max_score: event.max_score,
        }
    }
}
