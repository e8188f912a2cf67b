//! Data structures for knockout brackets: sides, persisted rounds and the laid-out output.

mod error;
mod layout;
mod round;
mod side;

pub use error::LayoutError;
pub use layout::{LayoutMatch, LayoutRound, LayoutSide};
pub use round::{Match, MatchOptions, MatchSide, Round, RoundIter};
pub use side::{check_unique_sides, Side, SideId, SideIndex, TeamId};
