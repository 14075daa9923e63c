use rust_decimal::Decimal;
use sqlx::PgPool;
use storage::{
    dto::routine::{CreateRoutineRequest, RoutineWithRelations, UpdateRoutineRequest},
    error::Result,
    models::{Routine, Score},
    repository::{event::EventRepository, routine::RoutineRepository, score::ScoreRepository},
};
use uuid::Uuid;

use crate::error::WebError;

/// List a competition's routines with athlete and event attached
pub async fn list_for_competition(
    pool: &PgPool,
    competition_id: Uuid,
) -> Result<Vec<RoutineWithRelations>> {
    let repo = RoutineRepository::new(pool);
    repo.list_for_competition(competition_id).await
}

/// Get routine by ID
pub async fn get_routine(pool: &PgPool, id: Uuid) -> Result<Routine> {
    let repo = RoutineRepository::new(pool);
    repo.find_by_id(id).await
}

/// List a routine's per-judge sub-scores
pub async fn list_scores(pool: &PgPool, routine_id: Uuid) -> Result<Vec<Score>> {
    // Surface 404 for an unknown routine rather than an empty list.
    let routines = RoutineRepository::new(pool);
    routines.find_by_id(routine_id).await?;

    let repo = ScoreRepository::new(pool);
    repo.list_for_routine(routine_id).await
}

/// Record a routine. Checks the entered components against the event's max
/// score, then writes the routine and, when a judge is referenced, its
/// per-judge sub-score rows.
pub async fn create_routine(
    pool: &PgPool,
    req: &CreateRoutineRequest,
) -> std::result::Result<Routine, WebError> {
    let events = EventRepository::new(pool);
    let event = events.find_by_id(req.event_id).await?;
    check_score_ceiling(req.difficulty_score, req.execution_score, event.max_score)?;

    let repo = RoutineRepository::new(pool);
    let routine = repo.create(req).await?;

    if let Some(judge_id) = routine.judge_id {
        let scores = ScoreRepository::new(pool);
        scores.record_judge_breakdown(&routine, judge_id).await?;
    }

    Ok(routine)
}

/// Correct a routine, re-checking the merged components against the event's
/// max score and refreshing any per-judge sub-scores.
pub async fn update_routine(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateRoutineRequest,
) -> std::result::Result<Routine, WebError> {
    let repo = RoutineRepository::new(pool);
    let existing = repo.find_by_id(id).await?;

    let events = EventRepository::new(pool);
    let event = events.find_by_id(existing.event_id).await?;

    let difficulty = req.difficulty_score.unwrap_or(existing.difficulty_score);
    let execution = req.execution_score.unwrap_or(existing.execution_score);
    check_score_ceiling(difficulty, execution, event.max_score)?;

    let routine = repo.update(id, &existing, req).await?;

    if let Some(judge_id) = routine.judge_id {
        let scores = ScoreRepository::new(pool);
        scores.record_judge_breakdown(&routine, judge_id).await?;
    }

    Ok(routine)
}

/// Delete a routine
pub async fn delete_routine(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = RoutineRepository::new(pool);
    repo.delete(id).await
}

fn check_score_ceiling(
    difficulty: Decimal,
    execution: Decimal,
    max_score: Decimal,
) -> std::result::Result<(), WebError> {
    if difficulty > max_score {
        return Err(WebError::BadRequest(format!(
            "Difficulty score {} exceeds the event max score {}",
            difficulty, max_score
        )));
    }
    if execution > max_score {
        return Err(WebError::BadRequest(format!(
            "Execution score {} exceeds the event max score {}",
            execution, max_score
        )));
    }
    Ok(())
}
