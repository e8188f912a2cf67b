//! Projection of a bracket that has not been played yet: placeholder rounds down to the final.

use crate::logic::context::LayoutContext;
use crate::logic::mnemonics::{AlphabeticMnemonics, MnemonicAccumulator, PrefixMnemonics};
use crate::models::{LayoutMatch, LayoutRound, LayoutSide, Side};
use log::debug;
use std::collections::VecDeque;

/// Project every round for `sides` with no results, labelling matches "M1", "M2", ...
///
/// Withdrawn sides are left out. Fewer than two remaining sides yields no rounds.
pub fn project_unplayed(sides: &[Side], context: &LayoutContext) -> Vec<LayoutRound> {
    let mut match_mnemonics = PrefixMnemonics::matches();
    project_unplayed_with(sides, context, &mut match_mnemonics)
}

/// As [`project_unplayed`], continuing the caller's match label sequence.
pub fn project_unplayed_with(
    sides: &[Side],
    context: &LayoutContext,
    match_mnemonics: &mut dyn MnemonicAccumulator,
) -> Vec<LayoutRound> {
    let entrants: Vec<Side> = sides.iter().filter(|s| !s.no_show).cloned().collect();
    if entrants.len() <= 1 {
        debug!("Nothing to project for {} side(s)", entrants.len());
        return Vec::new();
    }

    let mut side_mnemonics = AlphabeticMnemonics::new();
    let active = entrants
        .iter()
        .map(|_| LayoutSide::from_mnemonic(side_mnemonics.next_mnemonic()))
        .collect();
    project_rounds(active, Vec::new(), &entrants, context, match_mnemonics, false)
}

/// Pair `active` round after round until the final.
///
/// Sides carried forward as byes (`prior_byes`) are paired first, the rest in label order.
/// Each pair becomes a labelled match whose `winner(..)` placeholder moves on; an odd side
/// out is a bye and moves on unchanged. With `single_round` only the first round is built.
pub(crate) fn project_rounds(
    mut active: Vec<LayoutSide>,
    mut prior_byes: Vec<LayoutSide>,
    possible_sides: &[Side],
    context: &LayoutContext,
    match_mnemonics: &mut dyn MnemonicAccumulator,
    single_round: bool,
) -> Vec<LayoutRound> {
    let mut rounds = Vec::new();
    if active.is_empty() {
        return rounds;
    }
    loop {
        let entering = active.len();
        let mut queue: VecDeque<LayoutSide> = pairing_order(active, &prior_byes).into();
        let mut matches = Vec::new();
        let mut winners = Vec::new();
        let mut byes = Vec::new();

        while let Some(side_a) = queue.pop_front() {
            match queue.pop_front() {
                Some(side_b) => {
                    let mnemonic = match_mnemonics.next_mnemonic();
                    winners.push(LayoutSide::winner_of(&mnemonic));
                    matches.push(LayoutMatch::projected(
                        side_a,
                        side_b,
                        mnemonic,
                        context.match_options,
                    ));
                }
                None => {
                    byes.push(side_a.clone());
                    matches.push(LayoutMatch::bye(side_a, context.match_options));
                }
            }
        }

        let played = winners.len();
        let is_final = played == 1 && byes.is_empty();
        if is_final && !single_round {
            for m in &mut matches {
                m.hide_mnemonic = true;
            }
        }
        debug!(
            "Projected round: {} side(s), {} match(es), {} bye(s)",
            entering,
            played,
            byes.len()
        );
        rounds.push(LayoutRound {
            name: None,
            matches,
            possible_sides: possible_sides.to_vec(),
            already_selected_sides: Vec::new(),
        });

        if is_final || entering <= 1 || single_round {
            return rounds;
        }

        winners.extend(byes.iter().cloned());
        active = winners;
        prior_byes = byes;
    }
}

/// Carried byes first (in the order they were carried), then everything else by label.
fn pairing_order(active: Vec<LayoutSide>, prior_byes: &[LayoutSide]) -> Vec<LayoutSide> {
    let (mut carried, mut rest): (Vec<_>, Vec<_>) =
        active.into_iter().partition(|s| prior_byes.contains(s));
    carried.sort_by_key(|s| prior_byes.iter().position(|b| b == s));
    rest.sort_by_cached_key(LayoutSide::label);
    carried.extend(rest);
    carried
}
