//! Reconciliation of a partially played bracket: real rounds first, then a projection
//! of whatever has not been persisted yet.

use crate::logic::context::LayoutContext;
use crate::logic::mnemonics::{AlphabeticMnemonics, MnemonicAccumulator, PrefixMnemonics};
use crate::logic::projector::{project_rounds, project_unplayed_with};
use crate::models::{LayoutMatch, LayoutRound, LayoutSide, Round, Side, SideId, SideIndex};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};

/// Lay out `sides` against the persisted chain starting at `first_round`, labelling
/// matches "M1", "M2", ... Without a persisted round this is a plain projection.
pub fn reconcile(
    sides: &[Side],
    first_round: Option<&Round>,
    context: &LayoutContext,
) -> Vec<LayoutRound> {
    let mut match_mnemonics = PrefixMnemonics::matches();
    reconcile_with(sides, first_round, context, &mut match_mnemonics)
}

/// As [`reconcile`], continuing the caller's match label sequence.
pub fn reconcile_with(
    sides: &[Side],
    first_round: Option<&Round>,
    context: &LayoutContext,
    match_mnemonics: &mut dyn MnemonicAccumulator,
) -> Vec<LayoutRound> {
    let Some(first_round) = first_round else {
        return project_unplayed_with(sides, context, match_mnemonics);
    };

    let mut reconciler = Reconciler {
        context: *context,
        index: SideIndex::new(sides),
        links: HashMap::new(),
        match_mnemonics,
    };
    let pool = sides
        .iter()
        .filter(|s| !s.no_show)
        .map(|s| reconciler.layout_side(s))
        .collect();
    reconciler.run(first_round, pool)
}

/// What one real round produced, and what it sends on.
struct RoundOutcome {
    layout: LayoutRound,
    /// Winners, or `winner(..)` placeholders for undecided matches.
    advancing: Vec<LayoutSide>,
    /// Sides moving on without playing; they are paired first in the next round.
    byes: Vec<LayoutSide>,
}

struct Reconciler<'a, 'm> {
    context: LayoutContext<'a>,
    index: SideIndex,
    /// Resolved render links, one resolver call per identified side.
    links: HashMap<SideId, Option<String>>,
    match_mnemonics: &'m mut dyn MnemonicAccumulator,
}

impl Reconciler<'_, '_> {
    fn run(&mut self, first_round: &Round, mut pool: Vec<LayoutSide>) -> Vec<LayoutRound> {
        let mut rounds = Vec::new();
        let mut current = first_round;
        loop {
            let outcome = self.lay_out_round(current, &pool);
            rounds.push(outcome.layout);
            let next_pool: Vec<LayoutSide> = outcome
                .advancing
                .into_iter()
                .chain(outcome.byes.iter().cloned())
                .collect();

            match current.next().filter(|r| r.has_matches()) {
                Some(next) => {
                    pool = next_pool;
                    current = next;
                }
                None => {
                    if next_pool.len() >= 2 {
                        debug!("No further results; projecting from {} side(s)", next_pool.len());
                        let possible_sides = self.concrete_sides(&next_pool);
                        rounds.extend(project_rounds(
                            next_pool,
                            outcome.byes,
                            &possible_sides,
                            &self.context,
                            &mut *self.match_mnemonics,
                            false,
                        ));
                    }
                    return rounds;
                }
            }
        }
    }

    fn lay_out_round(&mut self, round: &Round, pool: &[LayoutSide]) -> RoundOutcome {
        let defaults = self.context.match_options;
        let hide_mnemonic = pool.len() <= 2 || round.next().is_some_and(Round::is_fully_resolved);
        let mut side_mnemonics = AlphabeticMnemonics::new();
        let mut already_selected: Vec<Side> = Vec::new();
        let mut matches = Vec::new();
        let mut advancing = Vec::new();
        let mut byes = Vec::new();

        for (index, m) in round.matches.iter().enumerate() {
            let match_options = round.options_for(index, &defaults);
            already_selected.push(m.side_a.clone());
            already_selected.extend(m.side_b.iter().cloned());

            let side_a = self.resolve(&m.side_a, &mut side_mnemonics);
            let side_b = m.side_b.as_ref().map(|s| self.resolve(s, &mut side_mnemonics));
            let (winner, mnemonic) = match side_b {
                Some(_) => (
                    m.winner(&match_options),
                    Some(self.match_mnemonics.next_mnemonic()),
                ),
                None => (None, None),
            };
            let layout = LayoutMatch {
                side_a,
                side_b,
                score_a: score_text(m.score_a),
                score_b: score_text(m.score_b),
                bye: m.is_bye(),
                winner,
                sayg_id: m.sayg_id,
                mnemonic,
                hide_mnemonic,
                match_options,
            };

            let next = layout.advancing_side();
            if in_pool(&next, pool) {
                if layout.bye {
                    byes.push(next);
                } else {
                    advancing.push(next);
                }
            }
            matches.push(layout);
        }

        let played: HashSet<SideId> = already_selected.iter().filter_map(|s| s.id).collect();
        let placed = placed_unidentified(&already_selected, pool);
        let standby: Vec<LayoutSide> = pool
            .iter()
            .enumerate()
            .filter(|(i, s)| !placed[*i] && !s.id.is_some_and(|id| played.contains(&id)))
            .map(|(_, s)| s.clone())
            .collect();
        let unbalanced = round.matches.iter().filter(|m| m.is_bye()).count();

        if standby.len() > unbalanced {
            let bye_rounds = project_rounds(
                standby,
                Vec::new(),
                &[],
                &self.context,
                &mut *self.match_mnemonics,
                true,
            );
            for bye_round in bye_rounds {
                for mut m in bye_round.matches {
                    m.match_options = round.options_for(matches.len(), &defaults);
                    let next = m.advancing_side();
                    if m.bye {
                        byes.push(next);
                    } else {
                        advancing.push(next);
                    }
                    matches.push(m);
                }
            }
        } else {
            byes.extend(standby);
        }

        debug!(
            "Reconciled round {:?}: {} match(es), {} advancing, {} bye(s)",
            round.name,
            matches.len(),
            advancing.len(),
            byes.len()
        );
        RoundOutcome {
            layout: LayoutRound {
                name: round.name.clone(),
                matches,
                possible_sides: self.concrete_sides(pool),
                already_selected_sides: already_selected,
            },
            advancing,
            byes,
        }
    }

    /// Identified sides take their canonical record from the index; unidentified ones
    /// get the next alphabetic mnemonic.
    fn resolve(&mut self, side: &Side, side_mnemonics: &mut AlphabeticMnemonics) -> LayoutSide {
        match side.id {
            Some(id) => {
                let canonical = self.index.get(&id).cloned().unwrap_or_else(|| side.clone());
                self.layout_side(&canonical)
            }
            None => LayoutSide {
                name: side.name.clone(),
                mnemonic: Some(side_mnemonics.next_mnemonic()),
                ..LayoutSide::default()
            },
        }
    }

    /// Layout record for a side as supplied; the link resolver runs once per id.
    fn layout_side(&mut self, side: &Side) -> LayoutSide {
        let link = match side.id {
            Some(id) => {
                let context = self.context;
                self.links
                    .entry(id)
                    .or_insert_with(|| context.link_for(side))
                    .clone()
            }
            None => None,
        };
        LayoutSide::from_side(side, link)
    }

    fn concrete_sides(&self, pool: &[LayoutSide]) -> Vec<Side> {
        pool.iter()
            .filter_map(|s| s.id)
            .filter_map(|id| self.index.get(&id).cloned())
            .collect()
    }
}

/// Marks the unidentified pool entries taken by id-less sides in real matches: an entry
/// with the same name if there is one, otherwise the first free placeholder.
fn placed_unidentified(selected: &[Side], pool: &[LayoutSide]) -> Vec<bool> {
    let mut placed = vec![false; pool.len()];
    for side in selected.iter().filter(|s| s.id.is_none()) {
        let free = |i: &usize| !placed[*i] && !pool[*i].is_resolved();
        let slot = (0..pool.len())
            .filter(free)
            .find(|&i| side.name.is_some() && pool[i].name == side.name)
            .or_else(|| (0..pool.len()).find(free));
        if let Some(i) = slot {
            placed[i] = true;
        }
    }
    placed
}

/// Placeholders always move on; identified sides only if they belong to the candidate pool.
fn in_pool(side: &LayoutSide, pool: &[LayoutSide]) -> bool {
    let Some(id) = side.id else {
        return true;
    };
    if pool.iter().any(|p| p.id == Some(id)) {
        return true;
    }
    warn!(
        "Side {} ({}) is not in the candidate pool; it will not advance",
        id,
        side.label()
    );
    false
}

fn score_text(legs: Option<u32>) -> String {
    legs.unwrap_or(0).to_string()
}
