//! Errors raised at the fallible edges (validation, import). The layout engine itself never fails.

use crate::models::side::SideId;

/// Errors that can occur while validating or importing bracket input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LayoutError {
    /// Match options are unusable (e.g. zero legs).
    InvalidMatchOptions(&'static str),
    /// The same side id was supplied more than once.
    DuplicateSide(SideId),
    /// A side with this name already exists (names are unique, case-insensitive).
    DuplicateSideName(String),
    /// An imported row has no side name.
    EmptySideName { line: u64 },
    /// The CSV input could not be read.
    Csv(String),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::InvalidMatchOptions(reason) => write!(f, "Invalid match options: {}", reason),
            LayoutError::DuplicateSide(id) => write!(f, "Side {} was supplied more than once", id),
            LayoutError::DuplicateSideName(name) => write!(f, "A side named '{}' already exists", name),
            LayoutError::EmptySideName { line } => write!(f, "Side on line {} has no name", line),
            LayoutError::Csv(msg) => write!(f, "Could not read sides: {}", msg),
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<csv::Error> for LayoutError {
    fn from(err: csv::Error) -> Self {
        LayoutError::Csv(err.to_string())
    }
}
