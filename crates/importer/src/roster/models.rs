use serde::Deserialize;
use storage::dto::athlete::CreateAthleteRequest;

/// One CSV line as parsed, before validation. Every field is optional so a
/// sparse or ragged file still parses; the validator decides what survives.
/// Columns outside the known header set are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRosterRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    /// Age-group label; the column is called `age` in the file format.
    pub age: Option<String>,
    pub club: Option<String>,
    pub level: Option<String>,
}

/// A validated, normalized roster row ready for creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub age_group: Option<String>,
    pub club: Option<String>,
    pub level: Option<String>,
}

impl From<RosterRow> for CreateAthleteRequest {
    fn from(row: RosterRow) -> Self {
        Self {
            first_name: row.first_name,
            last_name: row.last_name,
            gender: row.gender,
            club: row.club,
            level: row.level,
            age_group: row.age_group,
        }
    }
}
