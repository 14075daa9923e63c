use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest};
use crate::error::{Result, StorageError};
use crate::models::Athlete;

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all athletes, ordered by last name then first name
    pub async fn list(&self) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT athlete_id, first_name, last_name, gender, club, level,
                   age_group, created_at
            FROM athletes
            ORDER BY last_name, first_name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT athlete_id, first_name, last_name, gender, club, level,
                   age_group, created_at
            FROM athletes
            WHERE athlete_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Create a new athlete
    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            INSERT INTO athletes (first_name, last_name, gender, club, level, age_group)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING athlete_id, first_name, last_name, gender, club, level,
                      age_group, created_at
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.gender)
        .bind(&req.club)
        .bind(&req.level)
        .bind(&req.age_group)
        .fetch_one(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Update an existing athlete, keeping unspecified fields
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Athlete,
        req: &UpdateAthleteRequest,
    ) -> Result<Athlete> {
        let first_name = req.first_name.as_ref().unwrap_or(&existing.first_name);
        let last_name = req.last_name.as_ref().unwrap_or(&existing.last_name);
        let gender = req.gender.as_ref().unwrap_or(&existing.gender);
        let club = req.club.as_ref().or(existing.club.as_ref());
        let level = req.level.as_ref().or(existing.level.as_ref());
        let age_group = req.age_group.as_ref().or(existing.age_group.as_ref());

        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            UPDATE athletes
            SET first_name = $2,
                last_name = $3,
                gender = $4,
                club = $5,
                level = $6,
                age_group = $7
            WHERE athlete_id = $1
            RETURNING athlete_id, first_name, last_name, gender, club, level,
                      age_group, created_at
            "#,
        )
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(gender)
        .bind(club)
        .bind(level)
        .bind(age_group)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Delete an athlete by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE athlete_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
