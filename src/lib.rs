//! Darts knockout bracket layout: projects unplayed brackets, reconciles partially played
//! ones with a projection of the rest, and names the rounds.

pub mod logic;
pub mod models;

pub use logic::{
    import_sides_csv, lay_out_tournament, name_rounds, project_unplayed, project_unplayed_with,
    reconcile, reconcile_with, AlphabeticMnemonics, LayoutContext, MnemonicAccumulator, NoLinks,
    PrefixMnemonics, SideLinker,
};
pub use models::{
    check_unique_sides, LayoutError, LayoutMatch, LayoutRound, LayoutSide, Match, MatchOptions,
    MatchSide, Round, RoundIter, Side, SideId, SideIndex, TeamId,
};
