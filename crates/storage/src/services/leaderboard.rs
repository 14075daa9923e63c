use std::collections::HashMap;

use uuid::Uuid;

use crate::dto::leaderboard::{
    AgeGroupStandings, AthleteStanding, GenderDivision, LeaderboardResponse, LevelGroup,
};
use crate::dto::routine::RoutineWithRelations;
use crate::models::{NO_AGE_GROUP, NO_LEVEL, age_group_sort_key, level_sort_key};

const GENDER_ORDER: &[&str] = &["male", "female"];

/// Fold routines into one accumulator per athlete, in routine order. An
/// athlete with two routines for the same event keeps the later write in
/// `scores` while both still count toward the total; that matches the
/// recording flow, which corrects a routine in place rather than adding a
/// second one.
pub fn accumulate_standings(routines: &[RoutineWithRelations]) -> Vec<AthleteStanding> {
    let mut standings: Vec<AthleteStanding> = Vec::new();
    let mut index: HashMap<Uuid, usize> = HashMap::new();

    for routine in routines {
        let athlete_id = routine.athlete.athlete_id;
        let slot = *index.entry(athlete_id).or_insert_with(|| {
            standings.push(AthleteStanding {
                rank: 0,
                athlete_id,
                name: routine.athlete.full_name(),
                gender: routine.athlete.gender.clone(),
                club: routine.athlete.club.clone(),
                level: routine.athlete.level.clone(),
                age_group: routine.athlete.age_group.clone(),
                scores: Default::default(),
                total_score: Default::default(),
                event_count: 0,
            });
            standings.len() - 1
        });

        let standing = &mut standings[slot];
        standing
            .scores
            .insert(routine.event.code.clone(), routine.routine.final_score);
        standing.total_score += routine.routine.final_score;
        standing.event_count += 1;
    }

    standings
}

/// Build the on-screen leaderboard: gender, then level, then age-group, each
/// leaf sorted by descending total score with dense 1-based ranks. Buckets
/// with no athletes are omitted entirely.
pub fn build_leaderboard(
    competition_id: Uuid,
    routines: &[RoutineWithRelations],
) -> LeaderboardResponse {
    let standings = accumulate_standings(routines);

    let divisions = GENDER_ORDER
        .iter()
        .filter_map(|gender| {
            let members: Vec<AthleteStanding> = standings
                .iter()
                .filter(|s| s.gender == *gender)
                .cloned()
                .collect();

            if members.is_empty() {
                return None;
            }

            Some(GenderDivision {
                gender: gender.to_string(),
                label: division_label(gender),
                levels: group_by_level(members),
            })
        })
        .collect();

    LeaderboardResponse {
        competition_id,
        divisions,
    }
}

fn division_label(gender: &str) -> String {
    match gender {
        "male" => "Men's All-Around".to_string(),
        "female" => "Women's All-Around".to_string(),
        other => format!("{}'s All-Around", other),
    }
}

fn group_by_level(members: Vec<AthleteStanding>) -> Vec<LevelGroup> {
    let mut by_level: HashMap<String, Vec<AthleteStanding>> = HashMap::new();
    for standing in members {
        let level = standing.level.clone().unwrap_or_else(|| NO_LEVEL.to_string());
        by_level.entry(level).or_default().push(standing);
    }

    let mut levels: Vec<LevelGroup> = by_level
        .into_iter()
        .map(|(level, members)| LevelGroup {
            level,
            age_groups: group_by_age(members),
        })
        .collect();

    levels.sort_by_key(|g| level_sort_key(&g.level));
    levels
}

fn group_by_age(members: Vec<AthleteStanding>) -> Vec<AgeGroupStandings> {
    let mut by_age: HashMap<String, Vec<AthleteStanding>> = HashMap::new();
    for standing in members {
        let age_group = standing
            .age_group
            .clone()
            .unwrap_or_else(|| NO_AGE_GROUP.to_string());
        by_age.entry(age_group).or_default().push(standing);
    }

    let mut groups: Vec<AgeGroupStandings> = by_age
        .into_iter()
        .map(|(age_group, mut standings)| {
            rank_descending(&mut standings);
            AgeGroupStandings {
                age_group,
                standings,
            }
        })
        .collect();

    groups.sort_by_key(|g| age_group_sort_key(&g.age_group));
    groups
}

/// Stable sort by total score descending, then assign 1-based positional
/// ranks. Ties keep their fold order and still get distinct ranks.
pub fn rank_descending(standings: &mut [AthleteStanding]) {
    standings.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    for (idx, standing) in standings.iter_mut().enumerate() {
        standing.rank = (idx + 1) as u32;
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::dto::routine::{RoutineAthlete, RoutineEvent};
    use crate::models::Routine;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    struct AthleteFixture {
        id: Uuid,
        name: &'static str,
        gender: &'static str,
        level: Option<&'static str>,
        age_group: Option<&'static str>,
    }

    fn athlete(
        name: &'static str,
        gender: &'static str,
        level: Option<&'static str>,
        age_group: Option<&'static str>,
    ) -> AthleteFixture {
        AthleteFixture {
            id: Uuid::new_v4(),
            name,
            gender,
            level,
            age_group,
        }
    }

    fn routine(fixture: &AthleteFixture, event_code: &str, final_score: &str) -> RoutineWithRelations {
        let (first, last) = fixture.name.split_once(' ').unwrap();
        let performed_at = NaiveDate::from_ymd_opt(2026, 5, 10)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();

        RoutineWithRelations {
            routine: Routine {
                routine_id: Uuid::new_v4(),
                competition_id: Uuid::nil(),
                athlete_id: fixture.id,
                event_id: Uuid::new_v4(),
                judge_id: None,
                difficulty_score: Decimal::ZERO,
                execution_score: dec(final_score),
                neutral_deductions: Decimal::ZERO,
                final_score: dec(final_score),
                status: "completed".to_string(),
                notes: None,
                performed_at,
                created_at: performed_at,
            },
            athlete: RoutineAthlete {
                athlete_id: fixture.id,
                first_name: first.to_string(),
                last_name: last.to_string(),
                gender: fixture.gender.to_string(),
                club: None,
                level: fixture.level.map(String::from),
                age_group: fixture.age_group.map(String::from),
            },
            event: RoutineEvent {
                event_id: Uuid::new_v4(),
                name: event_code.to_string(),
                code: event_code.to_string(),
                gender: fixture.gender.to_string(),
                display_order: 0,
                max_score: dec("20.000"),
            },
        }
    }

    #[test]
    fn test_accumulation_sums_totals_and_counts_events() {
        let anna = athlete("Anna Berg", "female", None, None);
        let routines = vec![routine(&anna, "VT", "13.3"), routine(&anna, "FX", "12.8")];

        let standings = accumulate_standings(&routines);

        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].total_score, dec("26.1"));
        assert_eq!(standings[0].event_count, 2);
        assert_eq!(standings[0].scores["VT"], dec("13.3"));
        assert_eq!(standings[0].scores["FX"], dec("12.8"));
    }

    #[test]
    fn test_duplicate_event_keeps_last_score_but_counts_both() {
        let anna = athlete("Anna Berg", "female", None, None);
        let routines = vec![routine(&anna, "VT", "13.0"), routine(&anna, "VT", "13.5")];

        let standings = accumulate_standings(&routines);

        assert_eq!(standings[0].scores["VT"], dec("13.5"));
        assert_eq!(standings[0].total_score, dec("26.5"));
        assert_eq!(standings[0].event_count, 2);
    }

    #[test]
    fn test_ranks_are_descending_and_consecutive() {
        let anna = athlete("Anna Berg", "female", Some("Level 9"), Some("12 years"));
        let bea = athlete("Bea Holm", "female", Some("Level 9"), Some("12 years"));
        let cleo = athlete("Cleo Falk", "female", Some("Level 9"), Some("12 years"));
        let routines = vec![
            routine(&anna, "VT", "12.0"),
            routine(&bea, "VT", "14.0"),
            routine(&cleo, "VT", "13.0"),
        ];

        let board = build_leaderboard(Uuid::nil(), &routines);

        let standings = &board.divisions[0].levels[0].age_groups[0].standings;
        assert_eq!(standings[0].name, "Bea Holm");
        assert_eq!(standings[1].name, "Cleo Falk");
        assert_eq!(standings[2].name, "Anna Berg");
        assert_eq!(
            standings.iter().map(|s| s.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_tied_totals_keep_fold_order_with_distinct_ranks() {
        let anna = athlete("Anna Berg", "female", None, None);
        let bea = athlete("Bea Holm", "female", None, None);
        let routines = vec![routine(&anna, "VT", "13.0"), routine(&bea, "VT", "13.0")];

        let board = build_leaderboard(Uuid::nil(), &routines);

        let standings = &board.divisions[0].levels[0].age_groups[0].standings;
        assert_eq!(standings[0].name, "Anna Berg");
        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[1].name, "Bea Holm");
        assert_eq!(standings[1].rank, 2);
    }

    #[test]
    fn test_divisions_split_by_gender_male_first() {
        let erik = athlete("Erik Dahl", "male", None, None);
        let anna = athlete("Anna Berg", "female", None, None);
        let routines = vec![routine(&anna, "VT", "13.0"), routine(&erik, "PH", "12.0")];

        let board = build_leaderboard(Uuid::nil(), &routines);

        assert_eq!(board.divisions.len(), 2);
        assert_eq!(board.divisions[0].gender, "male");
        assert_eq!(board.divisions[0].label, "Men's All-Around");
        assert_eq!(board.divisions[1].gender, "female");
        assert_eq!(board.divisions[1].label, "Women's All-Around");
    }

    #[test]
    fn test_missing_labels_fall_into_sentinel_buckets_last() {
        let anna = athlete("Anna Berg", "female", Some("Level 9"), Some("12 years"));
        let bea = athlete("Bea Holm", "female", None, None);
        let routines = vec![routine(&bea, "VT", "13.0"), routine(&anna, "VT", "12.0")];

        let board = build_leaderboard(Uuid::nil(), &routines);

        let levels = &board.divisions[0].levels;
        assert_eq!(levels[0].level, "Level 9");
        assert_eq!(levels[1].level, NO_LEVEL);
        assert_eq!(levels[1].age_groups[0].age_group, NO_AGE_GROUP);
    }

    #[test]
    fn test_unknown_labels_are_kept_after_known_ones() {
        let anna = athlete("Anna Berg", "female", Some("Xcel Gold"), None);
        let bea = athlete("Bea Holm", "female", Some("Level 3"), None);
        let routines = vec![routine(&anna, "VT", "13.0"), routine(&bea, "VT", "12.0")];

        let board = build_leaderboard(Uuid::nil(), &routines);

        let levels = &board.divisions[0].levels;
        assert_eq!(levels[0].level, "Level 3");
        assert_eq!(levels[1].level, "Xcel Gold");
    }

    #[test]
    fn test_no_routines_yields_no_divisions() {
        let board = build_leaderboard(Uuid::nil(), &[]);
        assert!(board.divisions.is_empty());
    }
}
