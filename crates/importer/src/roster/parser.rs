use std::path::Path;

use crate::error::Result;

use super::models::RawRosterRecord;

/// Read a roster CSV. The first line must be the header row
/// (`first_name,last_name,gender,age,club,level`); empty lines are skipped.
pub fn read_roster(path: &Path) -> Result<Vec<RawRosterRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }

    tracing::info!("Read {} roster row(s) from {}", records.len(), path.display());

    Ok(records)
}
