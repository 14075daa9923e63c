use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::{CreateEventRequest, UpdateEventRequest};
use crate::error::{Result, StorageError};
use crate::models::Event;

pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all events. Display order drives column ordering in summaries.
    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, name, code, gender, display_order, max_score
            FROM events
            ORDER BY gender, display_order
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// List events for one gender
    pub async fn list_by_gender(&self, gender: &str) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, name, code, gender, display_order, max_score
            FROM events
            WHERE gender = $1
            ORDER BY display_order
            "#,
        )
        .bind(gender)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, name, code, gender, display_order, max_score
            FROM events
            WHERE event_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Create a new event
    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (name, code, gender, display_order, max_score)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING event_id, name, code, gender, display_order, max_score
            "#,
        )
        .bind(&req.name)
        .bind(&req.code)
        .bind(&req.gender)
        .bind(req.display_order)
        .bind(req.max_score)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.code().as_deref() == Some("23505")
            {
                return StorageError::ConstraintViolation("Event code already exists".to_string());
            }
            StorageError::from(e)
        })?;

        Ok(event)
    }

    /// Update an existing event, keeping unspecified fields
    pub async fn update(&self, id: Uuid, existing: &Event, req: &UpdateEventRequest) -> Result<Event> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let code = req.code.as_ref().unwrap_or(&existing.code);
        let gender = req.gender.as_ref().unwrap_or(&existing.gender);
        let display_order = req.display_order.unwrap_or(existing.display_order);
        let max_score = req.max_score.unwrap_or(existing.max_score);

        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET name = $2,
                code = $3,
                gender = $4,
                display_order = $5,
                max_score = $6
            WHERE event_id = $1
            RETURNING event_id, name, code, gender, display_order, max_score
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(code)
        .bind(gender)
        .bind(display_order)
        .bind(max_score)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Delete an event by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
