use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::routine::{
    CreateRoutineRequest, RoutineAthlete, RoutineEvent, RoutineWithRelations,
    UpdateRoutineRequest,
};
use crate::error::{Result, StorageError};
use crate::models::Routine;
use crate::services::scoring;

/// Flat join row; reassembled into the nested view before leaving the repository.
#[derive(FromRow)]
struct RoutineRelationsRow {
    routine_id: Uuid,
    competition_id: Uuid,
    athlete_id: Uuid,
    event_id: Uuid,
    judge_id: Option<Uuid>,
    difficulty_score: Decimal,
    execution_score: Decimal,
    neutral_deductions: Decimal,
    final_score: Decimal,
    status: String,
    notes: Option<String>,
    performed_at: NaiveDateTime,
    created_at: NaiveDateTime,
    athlete_first_name: String,
    athlete_last_name: String,
    athlete_gender: String,
    athlete_club: Option<String>,
    athlete_level: Option<String>,
    athlete_age_group: Option<String>,
    event_name: String,
    event_code: String,
    event_gender: String,
    event_display_order: i32,
    event_max_score: Decimal,
}

impl From<RoutineRelationsRow> for RoutineWithRelations {
    fn from(row: RoutineRelationsRow) -> Self {
        Self {
            routine: Routine {
                routine_id: row.routine_id,
                competition_id: row.competition_id,
                athlete_id: row.athlete_id,
                event_id: row.event_id,
                judge_id: row.judge_id,
                difficulty_score: row.difficulty_score,
                execution_score: row.execution_score,
                neutral_deductions: row.neutral_deductions,
                final_score: row.final_score,
                status: row.status,
                notes: row.notes,
                performed_at: row.performed_at,
                created_at: row.created_at,
            },
            athlete: RoutineAthlete {
                athlete_id: row.athlete_id,
                first_name: row.athlete_first_name,
                last_name: row.athlete_last_name,
                gender: row.athlete_gender,
                club: row.athlete_club,
                level: row.athlete_level,
                age_group: row.athlete_age_group,
            },
            event: RoutineEvent {
                event_id: row.event_id,
                name: row.event_name,
                code: row.event_code,
                gender: row.event_gender,
                display_order: row.event_display_order,
                max_score: row.event_max_score,
            },
        }
    }
}

pub struct RoutineRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RoutineRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a competition's routines with athlete and event attached, most
    /// recent first. This fetch order is also the fold order for the
    /// leaderboard, which keeps tie ordering deterministic.
    pub async fn list_for_competition(
        &self,
        competition_id: Uuid,
    ) -> Result<Vec<RoutineWithRelations>> {
        let rows = sqlx::query_as::<_, RoutineRelationsRow>(
            r#"
            SELECT r.routine_id, r.competition_id, r.athlete_id, r.event_id,
                   r.judge_id, r.difficulty_score, r.execution_score,
                   r.neutral_deductions, r.final_score, r.status, r.notes,
                   r.performed_at, r.created_at,
                   a.first_name AS athlete_first_name,
                   a.last_name AS athlete_last_name,
                   a.gender AS athlete_gender,
                   a.club AS athlete_club,
                   a.level AS athlete_level,
                   a.age_group AS athlete_age_group,
                   e.name AS event_name,
                   e.code AS event_code,
                   e.gender AS event_gender,
                   e.display_order AS event_display_order,
                   e.max_score AS event_max_score
            FROM routines r
            INNER JOIN athletes a ON r.athlete_id = a.athlete_id
            INNER JOIN events e ON r.event_id = e.event_id
            WHERE r.competition_id = $1
            ORDER BY r.performed_at DESC, r.created_at DESC
            "#,
        )
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(RoutineWithRelations::from).collect())
    }

    /// Find routine by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Routine> {
        let routine = sqlx::query_as::<_, Routine>(
            r#"
            SELECT routine_id, competition_id, athlete_id, event_id, judge_id,
                   difficulty_score, execution_score, neutral_deductions,
                   final_score, status, notes, performed_at, created_at
            FROM routines
            WHERE routine_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(routine)
    }

    /// Record a new routine. The final score is derived here; clients never
    /// supply it.
    pub async fn create(&self, req: &CreateRoutineRequest) -> Result<Routine> {
        let final_score = scoring::final_score(
            req.difficulty_score,
            req.execution_score,
            req.neutral_deductions,
        );

        let routine = sqlx::query_as::<_, Routine>(
            r#"
            INSERT INTO routines (competition_id, athlete_id, event_id, judge_id,
                                  difficulty_score, execution_score,
                                  neutral_deductions, final_score, status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING routine_id, competition_id, athlete_id, event_id, judge_id,
                      difficulty_score, execution_score, neutral_deductions,
                      final_score, status, notes, performed_at, created_at
            "#,
        )
        .bind(req.competition_id)
        .bind(req.athlete_id)
        .bind(req.event_id)
        .bind(req.judge_id)
        .bind(req.difficulty_score)
        .bind(req.execution_score)
        .bind(req.neutral_deductions)
        .bind(final_score)
        .bind(&req.status)
        .bind(&req.notes)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.code().as_deref() == Some("23503")
            {
                return StorageError::ConstraintViolation(
                    "Referenced competition, athlete or event does not exist".to_string(),
                );
            }
            StorageError::from(e)
        })?;

        Ok(routine)
    }

    /// Correct an existing routine, keeping unspecified fields and
    /// re-deriving the final score from the merged components.
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Routine,
        req: &UpdateRoutineRequest,
    ) -> Result<Routine> {
        let judge_id = req.judge_id.or(existing.judge_id);
        let difficulty = req.difficulty_score.unwrap_or(existing.difficulty_score);
        let execution = req.execution_score.unwrap_or(existing.execution_score);
        let deductions = req.neutral_deductions.unwrap_or(existing.neutral_deductions);
        let status = req.status.as_ref().unwrap_or(&existing.status);
        let notes = req.notes.as_ref().or(existing.notes.as_ref());

        let final_score = scoring::final_score(difficulty, execution, deductions);

        let routine = sqlx::query_as::<_, Routine>(
            r#"
            UPDATE routines
            SET judge_id = $2,
                difficulty_score = $3,
                execution_score = $4,
                neutral_deductions = $5,
                final_score = $6,
                status = $7,
                notes = $8
            WHERE routine_id = $1
            RETURNING routine_id, competition_id, athlete_id, event_id, judge_id,
                      difficulty_score, execution_score, neutral_deductions,
                      final_score, status, notes, performed_at, created_at
            "#,
        )
        .bind(id)
        .bind(judge_id)
        .bind(difficulty)
        .bind(execution)
        .bind(deductions)
        .bind(final_score)
        .bind(status)
        .bind(notes)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(routine)
    }

    /// Delete a routine by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM routines WHERE routine_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
