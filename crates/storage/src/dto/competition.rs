use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a new competition
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCompetitionRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    pub start_date: NaiveDate,

    pub end_date: Option<NaiveDate>,

    #[validate(custom(function = "validate_status"))]
    #[serde(default = "default_status")]
    pub status: String,

    pub owner_id: Option<Uuid>,
}

/// Request payload for updating an existing competition
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCompetitionRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

/// Response containing competition details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompetitionResponse {
    pub competition_id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub owner_id: Option<Uuid>,
    pub created_at: chrono::NaiveDateTime,
}

// Validation helpers
fn default_status() -> String {
    "upcoming".to_string()
}

fn validate_status(status: &str) -> Result<(), validator::ValidationError> {
    const VALID_STATUSES: &[&str] = &["upcoming", "active", "completed", "cancelled"];

    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_status"))
    }
}

impl CreateCompetitionRequest {
    /// Additional validation that requires multiple fields
    pub fn validate_dates(&self) -> Result<(), &'static str> {
        if let Some(end) = self.end_date
            && end < self.start_date
        {
            return Err("End date must be on or after start date");
        }

        Ok(())
    }
}

impl From<crate::models::Competition> for CompetitionResponse {
    fn from(comp: crate::models::Competition) -> Self {
        Self {
            competition_id: comp.competition_id,
            name: comp.name,
            location: comp.location,
            start_date: comp.start_date,
            end_date: comp.end_date,
            status: comp.status,
            owner_id: comp.owner_id,
            created_at: comp.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start: &str, end: Option<&str>) -> CreateCompetitionRequest {
        CreateCompetitionRequest {
            name: "Spring Invitational".to_string(),
            location: None,
            start_date: start.parse().unwrap(),
            end_date: end.map(|d| d.parse().unwrap()),
            status: default_status(),
            owner_id: None,
        }
    }

    #[test]
    fn test_end_date_before_start_date_rejected() {
        assert!(request("2026-05-10", Some("2026-05-09")).validate_dates().is_err());
    }

    #[test]
    fn test_end_date_on_or_after_start_date_accepted() {
        assert!(request("2026-05-10", Some("2026-05-10")).validate_dates().is_ok());
        assert!(request("2026-05-10", Some("2026-05-11")).validate_dates().is_ok());
        assert!(request("2026-05-10", None).validate_dates().is_ok());
    }
}
