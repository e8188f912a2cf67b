//! Side (tournament entrant) and the id-keyed side index.

use crate::models::error::LayoutError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Unique identifier for a side.
pub type SideId = Uuid;

/// Identifier of the team owning a side. Opaque to the layout engine.
pub type TeamId = Uuid;

/// An entrant in a knockout tournament (player, pair or team).
///
/// Two sides are the same entrant iff both carry an id and the ids match.
/// A side without an id is a placeholder whose identity is not yet known.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Side {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SideId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The entrant withdrew.
    #[serde(default)]
    pub no_show: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
}

impl Side {
    /// Create a new identified side with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Some(Uuid::new_v4()),
            name: Some(name.into()),
            no_show: false,
            team_id: None,
        }
    }

    /// Mark the side as withdrawn.
    pub fn withdrawn(mut self) -> Self {
        self.no_show = true;
        self
    }

    pub fn is_same_as(&self, other: &Side) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}

/// Lookup of side records by id, built once per engine call.
#[derive(Clone, Debug, Default)]
pub struct SideIndex {
    sides: HashMap<SideId, Side>,
}

impl SideIndex {
    /// Index every identified side. Later duplicates of an id win.
    pub fn new(sides: &[Side]) -> Self {
        let sides = sides
            .iter()
            .filter_map(|s| s.id.map(|id| (id, s.clone())))
            .collect();
        Self { sides }
    }

    pub fn get(&self, id: &SideId) -> Option<&Side> {
        self.sides.get(id)
    }

    pub fn len(&self) -> usize {
        self.sides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }
}

/// Reject side lists that name the same id twice.
pub fn check_unique_sides(sides: &[Side]) -> Result<(), LayoutError> {
    let mut seen = HashSet::new();
    for id in sides.iter().filter_map(|s| s.id) {
        if !seen.insert(id) {
            return Err(LayoutError::DuplicateSide(id));
        }
    }
    Ok(())
}
