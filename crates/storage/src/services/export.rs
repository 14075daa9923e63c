use rust_decimal::Decimal;

use crate::dto::routine::RoutineWithRelations;
use crate::error::{Result, StorageError};
use crate::models::{Competition, Event};
use crate::services::leaderboard::{accumulate_standings, rank_descending};

/// A shaped tabular view ready for CSV serialization: a header row plus data
/// rows, every cell display-formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Detailed,
    Summary,
    Leaderboard,
}

impl ExportKind {
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Self::Detailed => "detailed_results",
            Self::Summary => "summary_results",
            Self::Leaderboard => "leaderboard",
        }
    }
}

impl std::str::FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "detailed" => Ok(Self::Detailed),
            "summary" => Ok(Self::Summary),
            "leaderboard" => Ok(Self::Leaderboard),
            other => Err(format!("Unknown export kind: {}", other)),
        }
    }
}

/// Download filename: competition name with whitespace collapsed to
/// underscores, plus the export kind.
pub fn export_filename(competition_name: &str, kind: ExportKind) -> String {
    let base = competition_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("{}_{}.csv", base, kind.file_suffix())
}

/// One row per routine, every field flattened to a display string.
pub fn detailed_results(
    competition: &Competition,
    routines: &[RoutineWithRelations],
) -> Result<ExportTable> {
    require_data(routines)?;

    let headers = vec![
        "competition_name",
        "competition_date",
        "athlete_name",
        "athlete_gender",
        "athlete_club",
        "athlete_level",
        "event_name",
        "event_code",
        "difficulty_score",
        "execution_score",
        "neutral_deductions",
        "final_score",
        "status",
        "performed_at",
        "notes",
    ];

    let rows = routines
        .iter()
        .map(|r| {
            vec![
                competition.name.clone(),
                format_date(competition),
                r.athlete.full_name(),
                r.athlete.gender.clone(),
                r.athlete.club.clone().unwrap_or_default(),
                r.athlete.level.clone().unwrap_or_default(),
                r.event.name.clone(),
                r.event.code.clone(),
                format_score(r.routine.difficulty_score),
                format_score(r.routine.execution_score),
                format_score(r.routine.neutral_deductions),
                format_score(r.routine.final_score),
                r.routine.status.clone(),
                r.routine.performed_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                r.routine.notes.clone().unwrap_or_default(),
            ]
        })
        .collect();

    Ok(ExportTable {
        headers: owned(&headers),
        rows,
    })
}

/// One row per athlete: identity columns, running total and event count,
/// plus one `<CODE>_score` column per known event, blank where the athlete
/// has no score for that event.
pub fn summary_results(
    competition: &Competition,
    routines: &[RoutineWithRelations],
    events: &[Event],
) -> Result<ExportTable> {
    require_data(routines)?;

    let mut headers = vec![
        "competition_name".to_string(),
        "competition_date".to_string(),
        "athlete_name".to_string(),
        "athlete_gender".to_string(),
        "athlete_club".to_string(),
        "athlete_level".to_string(),
        "total_score".to_string(),
        "event_count".to_string(),
    ];
    headers.extend(events.iter().map(|e| format!("{}_score", e.code)));

    let rows = accumulate_standings(routines)
        .into_iter()
        .map(|standing| {
            let mut row = vec![
                competition.name.clone(),
                format_date(competition),
                standing.name.clone(),
                standing.gender.clone(),
                standing.club.clone().unwrap_or_default(),
                standing.level.clone().unwrap_or_default(),
                format_score(standing.total_score),
                standing.event_count.to_string(),
            ];
            row.extend(events.iter().map(|e| {
                standing
                    .scores
                    .get(&e.code)
                    .map(|score| format_score(*score))
                    .unwrap_or_default()
            }));
            row
        })
        .collect();

    Ok(ExportTable { headers, rows })
}

/// Final rankings, grouped by gender only. This intentionally differs from
/// the on-screen leaderboard, which further partitions by level and
/// age-group; the flat file is the hand-out format.
pub fn leaderboard_results(
    competition: &Competition,
    routines: &[RoutineWithRelations],
) -> Result<ExportTable> {
    require_data(routines)?;

    let headers = vec![
        "competition_name",
        "competition_date",
        "division",
        "rank",
        "athlete_name",
        "athlete_club",
        "athlete_level",
        "total_score",
        "event_count",
    ];

    let standings = accumulate_standings(routines);
    let mut rows = Vec::new();

    for gender in ["male", "female"] {
        let mut members: Vec<_> = standings
            .iter()
            .filter(|s| s.gender == gender)
            .cloned()
            .collect();
        rank_descending(&mut members);

        let division = format!("{}'s All-Around", capitalize(gender));
        for standing in members {
            rows.push(vec![
                competition.name.clone(),
                format_date(competition),
                division.clone(),
                standing.rank.to_string(),
                standing.name.clone(),
                standing.club.clone().unwrap_or_default(),
                standing.level.clone().unwrap_or_default(),
                format_score(standing.total_score),
                standing.event_count.to_string(),
            ]);
        }
    }

    Ok(ExportTable {
        headers: owned(&headers),
        rows,
    })
}

fn require_data(routines: &[RoutineWithRelations]) -> Result<()> {
    if routines.is_empty() {
        return Err(StorageError::NoExportData);
    }
    Ok(())
}

fn format_score(score: Decimal) -> String {
    format!("{:.3}", score.round_dp(3))
}

fn format_date(competition: &Competition) -> String {
    competition.start_date.format("%Y-%m-%d").to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn owned(headers: &[&str]) -> Vec<String> {
    headers.iter().map(|h| h.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::dto::routine::{RoutineAthlete, RoutineEvent};
    use crate::models::Routine;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn competition() -> Competition {
        Competition {
            competition_id: Uuid::nil(),
            name: "Spring Invitational 2026".to_string(),
            location: Some("City Arena".to_string()),
            start_date: NaiveDate::from_ymd_opt(2026, 5, 10).unwrap(),
            end_date: None,
            status: "active".to_string(),
            owner_id: None,
            created_at: NaiveDate::from_ymd_opt(2026, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    fn event(code: &str, order: i32) -> Event {
        Event {
            event_id: Uuid::new_v4(),
            name: code.to_string(),
            code: code.to_string(),
            gender: "female".to_string(),
            display_order: order,
            max_score: dec("20.000"),
        }
    }

    fn routine(athlete_id: Uuid, name: &str, event_code: &str, final_score: &str) -> RoutineWithRelations {
        let (first, last) = name.split_once(' ').unwrap();
        let performed_at = NaiveDate::from_ymd_opt(2026, 5, 10)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();

        RoutineWithRelations {
            routine: Routine {
                routine_id: Uuid::new_v4(),
                competition_id: Uuid::nil(),
                athlete_id,
                event_id: Uuid::new_v4(),
                judge_id: None,
                difficulty_score: dec("5.0"),
                execution_score: dec(final_score) - dec("5.0"),
                neutral_deductions: Decimal::ZERO,
                final_score: dec(final_score),
                status: "completed".to_string(),
                notes: None,
                performed_at,
                created_at: performed_at,
            },
            athlete: RoutineAthlete {
                athlete_id,
                first_name: first.to_string(),
                last_name: last.to_string(),
                gender: "female".to_string(),
                club: Some("City Gymnastics".to_string()),
                level: Some("Level 9".to_string()),
                age_group: Some("12 years".to_string()),
            },
            event: RoutineEvent {
                event_id: Uuid::new_v4(),
                name: event_code.to_string(),
                code: event_code.to_string(),
                gender: "female".to_string(),
                display_order: 0,
                max_score: dec("20.000"),
            },
        }
    }

    #[test]
    fn test_empty_routine_set_refuses_export() {
        let comp = competition();

        assert!(matches!(
            detailed_results(&comp, &[]),
            Err(StorageError::NoExportData)
        ));
        assert!(matches!(
            summary_results(&comp, &[], &[]),
            Err(StorageError::NoExportData)
        ));
        assert!(matches!(
            leaderboard_results(&comp, &[]),
            Err(StorageError::NoExportData)
        ));
    }

    #[test]
    fn test_detailed_has_one_row_per_routine() {
        let comp = competition();
        let anna = Uuid::new_v4();
        let routines = vec![
            routine(anna, "Anna Berg", "VT", "13.3"),
            routine(anna, "Anna Berg", "FX", "12.8"),
        ];

        let table = detailed_results(&comp, &routines).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.headers[0], "competition_name");
        assert_eq!(table.rows[0][0], "Spring Invitational 2026");
        assert_eq!(table.rows[0][1], "2026-05-10");
        assert_eq!(table.rows[0][2], "Anna Berg");
        assert_eq!(table.rows[0][11], "13.300");
        assert_eq!(table.rows[0][13], "2026-05-10 14:30:00");
    }

    #[test]
    fn test_summary_has_one_column_per_event_code() {
        let comp = competition();
        let events = vec![event("VT", 1), event("UB", 2), event("FX", 3)];
        let anna = Uuid::new_v4();
        let bea = Uuid::new_v4();
        let routines = vec![
            routine(anna, "Anna Berg", "VT", "13.3"),
            routine(anna, "Anna Berg", "FX", "12.8"),
            routine(bea, "Bea Holm", "UB", "11.5"),
        ];

        let table = summary_results(&comp, &routines, &events).unwrap();

        assert_eq!(
            &table.headers[8..],
            &["VT_score", "UB_score", "FX_score"]
        );
        assert_eq!(table.rows.len(), 2);

        // Anna: VT and FX filled, UB blank, total 26.1 across 2 events.
        assert_eq!(table.rows[0][2], "Anna Berg");
        assert_eq!(table.rows[0][6], "26.100");
        assert_eq!(table.rows[0][7], "2");
        assert_eq!(table.rows[0][8], "13.300");
        assert_eq!(table.rows[0][9], "");
        assert_eq!(table.rows[0][10], "12.800");

        // Bea: only UB filled.
        assert_eq!(table.rows[1][2], "Bea Holm");
        assert_eq!(table.rows[1][8], "");
        assert_eq!(table.rows[1][9], "11.500");
        assert_eq!(table.rows[1][10], "");
    }

    #[test]
    fn test_leaderboard_ranks_within_gender() {
        let comp = competition();
        let routines = vec![
            routine(Uuid::new_v4(), "Anna Berg", "VT", "12.0"),
            routine(Uuid::new_v4(), "Bea Holm", "VT", "14.0"),
        ];

        let table = leaderboard_results(&comp, &routines).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][2], "Female's All-Around");
        assert_eq!(table.rows[0][3], "1");
        assert_eq!(table.rows[0][4], "Bea Holm");
        assert_eq!(table.rows[1][3], "2");
        assert_eq!(table.rows[1][4], "Anna Berg");
    }

    #[test]
    fn test_export_filename_replaces_whitespace() {
        assert_eq!(
            export_filename("Spring Invitational 2026", ExportKind::Detailed),
            "Spring_Invitational_2026_detailed_results.csv"
        );
        assert_eq!(
            export_filename("Cup  Final", ExportKind::Leaderboard),
            "Cup_Final_leaderboard.csv"
        );
    }
}
