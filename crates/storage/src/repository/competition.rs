use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::competition::{CreateCompetitionRequest, UpdateCompetitionRequest};
use crate::error::{Result, StorageError};
use crate::models::Competition;

/// Repository for Competition database operations
pub struct CompetitionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CompetitionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all competitions, soonest first
    pub async fn list(&self) -> Result<Vec<Competition>> {
        let competitions = sqlx::query_as::<_, Competition>(
            r#"
            SELECT competition_id, name, location, start_date, end_date,
                   status, owner_id, created_at
            FROM competitions
            ORDER BY start_date ASC, created_at ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(competitions)
    }

    /// Find competition by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            SELECT competition_id, name, location, start_date, end_date,
                   status, owner_id, created_at
            FROM competitions
            WHERE competition_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(competition)
    }

    /// Create a new competition
    pub async fn create(&self, req: &CreateCompetitionRequest) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            INSERT INTO competitions (name, location, start_date, end_date, status, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING competition_id, name, location, start_date, end_date,
                      status, owner_id, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.location)
        .bind(req.start_date)
        .bind(req.end_date)
        .bind(&req.status)
        .bind(req.owner_id)
        .fetch_one(self.pool)
        .await?;

        Ok(competition)
    }

    /// Update an existing competition, keeping unspecified fields
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Competition,
        req: &UpdateCompetitionRequest,
    ) -> Result<Competition> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let location = req.location.as_ref().or(existing.location.as_ref());
        let start_date = req.start_date.unwrap_or(existing.start_date);
        let end_date = req.end_date.or(existing.end_date);
        let status = req.status.as_ref().unwrap_or(&existing.status);

        if let Some(end) = end_date
            && end < start_date
        {
            return Err(StorageError::ConstraintViolation(
                "End date must be on or after start date".to_string(),
            ));
        }

        let competition = sqlx::query_as::<_, Competition>(
            r#"
            UPDATE competitions
            SET name = $2,
                location = $3,
                start_date = $4,
                end_date = $5,
                status = $6
            WHERE competition_id = $1
            RETURNING competition_id, name, location, start_date, end_date,
                      status, owner_id, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(location)
        .bind(start_date)
        .bind(end_date)
        .bind(status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(competition)
    }

    /// Delete a competition by ID. Dependent routines cascade at the schema level.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM competitions WHERE competition_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
