//! The full pipeline: sides and (optional) persisted rounds in, named layout rounds out.

use crate::logic::context::LayoutContext;
use crate::logic::reconciler::reconcile;
use crate::logic::round_names::name_rounds;
use crate::models::{LayoutRound, Round, Side};

/// Reconcile (or project, when nothing is persisted) and name the rounds.
pub fn lay_out_tournament(
    sides: &[Side],
    first_round: Option<&Round>,
    context: &LayoutContext,
) -> Vec<LayoutRound> {
    name_rounds(reconcile(sides, first_round, context))
}
