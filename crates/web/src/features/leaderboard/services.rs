use sqlx::PgPool;
use storage::{
    dto::leaderboard::LeaderboardResponse,
    error::Result,
    repository::{competition::CompetitionRepository, routine::RoutineRepository},
    services::leaderboard,
};
use uuid::Uuid;

/// Build the grouped leaderboard for a competition
pub async fn get_leaderboard(pool: &PgPool, competition_id: Uuid) -> Result<LeaderboardResponse> {
    // 404 for an unknown competition rather than an empty board.
    let competitions = CompetitionRepository::new(pool);
    competitions.find_by_id(competition_id).await?;

    let repo = RoutineRepository::new(pool);
    let routines = repo.list_for_competition(competition_id).await?;

    Ok(leaderboard::build_leaderboard(competition_id, &routines))
}
