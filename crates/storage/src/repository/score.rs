use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Routine, Score};

pub struct ScoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the per-judge sub-scores of a routine, oldest first
    pub async fn list_for_routine(&self, routine_id: Uuid) -> Result<Vec<Score>> {
        let scores = sqlx::query_as::<_, Score>(
            r#"
            SELECT score_id, routine_id, judge_id, score_type, value, notes, created_at
            FROM scores
            WHERE routine_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(routine_id)
        .fetch_all(self.pool)
        .await?;

        Ok(scores)
    }

    /// Record the three per-judge sub-score rows for a routine. Called when a
    /// routine is recorded or corrected with a judge reference; previous rows
    /// for the same judge are replaced.
    pub async fn record_judge_breakdown(&self, routine: &Routine, judge_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM scores WHERE routine_id = $1 AND judge_id = $2")
            .bind(routine.routine_id)
            .bind(judge_id)
            .execute(self.pool)
            .await?;

        let components = [
            ("difficulty", routine.difficulty_score),
            ("execution", routine.execution_score),
            ("neutral_deduction", routine.neutral_deductions),
        ];

        for (score_type, value) in components {
            sqlx::query(
                r#"
                INSERT INTO scores (routine_id, judge_id, score_type, value)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(routine.routine_id)
            .bind(judge_id)
            .bind(score_type)
            .bind(value)
            .execute(self.pool)
            .await?;
        }

        Ok(())
    }
}
