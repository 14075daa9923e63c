use sqlx::PgPool;
use storage::{
    repository::{
        competition::CompetitionRepository, event::EventRepository, routine::RoutineRepository,
    },
    services::export::{self, ExportKind, ExportTable},
};
use uuid::Uuid;

use crate::error::WebError;

/// A finished export: CSV bytes plus the download filename.
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Shape and serialize one export kind for a competition. Refuses with a
/// precondition error before producing any bytes when the competition has no
/// routines.
pub async fn generate(
    pool: &PgPool,
    competition_id: Uuid,
    kind: ExportKind,
) -> Result<ExportFile, WebError> {
    let competitions = CompetitionRepository::new(pool);
    let competition = competitions.find_by_id(competition_id).await?;

    let routines = RoutineRepository::new(pool)
        .list_for_competition(competition_id)
        .await?;

    let table = match kind {
        ExportKind::Detailed => export::detailed_results(&competition, &routines)?,
        ExportKind::Summary => {
            let events = EventRepository::new(pool).list().await?;
            export::summary_results(&competition, &routines, &events)?
        }
        ExportKind::Leaderboard => export::leaderboard_results(&competition, &routines)?,
    };

    Ok(ExportFile {
        filename: export::export_filename(&competition.name, kind),
        bytes: to_csv_bytes(&table)?,
    })
}

fn to_csv_bytes(table: &ExportTable) -> Result<Vec<u8>, WebError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(&table.headers)
        .map_err(|e| WebError::InternalServerError(e.to_string()))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .map_err(|e| WebError::InternalServerError(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| WebError::InternalServerError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_bytes_have_header_row_and_quoting() {
        let table = ExportTable {
            headers: vec!["athlete_name".to_string(), "total_score".to_string()],
            rows: vec![vec!["Berg, Anna".to_string(), "26.100".to_string()]],
        };

        let bytes = to_csv_bytes(&table).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("athlete_name,total_score"));
        assert_eq!(lines.next(), Some("\"Berg, Anna\",26.100"));
        assert_eq!(lines.next(), None);
    }
}
