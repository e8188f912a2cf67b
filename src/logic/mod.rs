//! Bracket layout logic: mnemonics, projection, reconciliation and round naming.

mod context;
mod import;
mod layout;
mod mnemonics;
mod projector;
mod reconciler;
mod round_names;

pub use context::{LayoutContext, NoLinks, SideLinker};
pub use import::import_sides_csv;
pub use layout::lay_out_tournament;
pub use mnemonics::{AlphabeticMnemonics, MnemonicAccumulator, PrefixMnemonics};
pub use projector::{project_unplayed, project_unplayed_with};
pub use reconciler::{reconcile, reconcile_with};
pub use round_names::name_rounds;
