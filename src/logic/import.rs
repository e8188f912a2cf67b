//! Side import from CSV (header: `name[,id][,noShow][,teamId]`).

use crate::models::{LayoutError, Side, SideId, TeamId};
use serde::Deserialize;
use std::collections::HashSet;
use uuid::Uuid;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SideRecord {
    name: String,
    #[serde(default)]
    id: Option<SideId>,
    #[serde(default)]
    no_show: Option<bool>,
    #[serde(default)]
    team_id: Option<TeamId>,
}

/// Read sides in file order. Rows without an id get a fresh one.
/// Names must be non-empty and unique (case-insensitive).
pub fn import_sides_csv<R: std::io::Read>(reader: R) -> Result<Vec<Side>, LayoutError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut seen_names = HashSet::new();
    let mut sides = Vec::new();

    for result in rdr.deserialize::<SideRecord>() {
        let record = result?;
        let line = sides.len() as u64 + 2;
        if record.name.is_empty() {
            return Err(LayoutError::EmptySideName { line });
        }
        if !seen_names.insert(record.name.to_lowercase()) {
            return Err(LayoutError::DuplicateSideName(record.name));
        }
        sides.push(Side {
            id: Some(record.id.unwrap_or_else(Uuid::new_v4)),
            name: Some(record.name),
            no_show: record.no_show.unwrap_or(false),
            team_id: record.team_id,
        });
    }

    Ok(sides)
}
