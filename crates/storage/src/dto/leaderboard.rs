use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One athlete's accumulated standing within a leaderboard bucket.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteStanding {
    /// 1-based position after sorting; ties get distinct consecutive ranks.
    pub rank: u32,
    pub athlete_id: Uuid,
    pub name: String,
    pub gender: String,
    pub club: Option<String>,
    pub level: Option<String>,
    pub age_group: Option<String>,
    /// Final score per event code. Last write wins if an athlete has two
    /// routines for the same event.
    pub scores: BTreeMap<String, Decimal>,
    pub total_score: Decimal,
    pub event_count: u32,
}

/// Standings of one age-group bucket, sorted by descending total score.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AgeGroupStandings {
    pub age_group: String,
    pub standings: Vec<AthleteStanding>,
}

/// One level bucket within a gender division.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LevelGroup {
    pub level: String,
    pub age_groups: Vec<AgeGroupStandings>,
}

/// One gender's share of the leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenderDivision {
    pub gender: String,
    /// Display title, e.g. "Men's All-Around".
    pub label: String,
    pub levels: Vec<LevelGroup>,
}

/// The full on-screen leaderboard: gender, then level, then age-group.
/// Empty buckets are omitted; a competition with no routines yields no
/// divisions at all.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardResponse {
    pub competition_id: Uuid,
    pub divisions: Vec<GenderDivision>,
}
