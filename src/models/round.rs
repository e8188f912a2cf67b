//! Persisted bracket data: MatchOptions, Match and the forward-linked Round chain.

use crate::models::error::LayoutError;
use crate::models::side::Side;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which side of a match won it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchSide {
    SideA,
    SideB,
}

/// Per-match configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOptions {
    /// Odd by convention so a majority is unambiguous.
    pub number_of_legs: u32,
    pub player_count: u32,
    pub starting_score: u32,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            number_of_legs: 5,
            player_count: 1,
            starting_score: 501,
        }
    }
}

impl MatchOptions {
    /// True when `legs` is a strict majority of the legs in the match.
    pub fn is_winning_score(&self, legs: u32) -> bool {
        u64::from(legs) * 2 > u64::from(self.number_of_legs)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.number_of_legs == 0 {
            return Err(LayoutError::InvalidMatchOptions("number of legs must be positive"));
        }
        if self.player_count == 0 {
            return Err(LayoutError::InvalidMatchOptions("player count must be positive"));
        }
        if self.starting_score == 0 {
            return Err(LayoutError::InvalidMatchOptions("starting score must be positive"));
        }
        Ok(())
    }
}

/// A real (persisted) match. `side_b` is None for a bye; scores are None until played.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub side_a: Side,
    #[serde(default)]
    pub side_b: Option<Side>,
    #[serde(default)]
    pub score_a: Option<u32>,
    #[serde(default)]
    pub score_b: Option<u32>,
    /// Reference to detailed scoring data, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sayg_id: Option<Uuid>,
}

impl Match {
    pub fn new(side_a: Side, side_b: Side) -> Self {
        Self {
            side_a,
            side_b: Some(side_b),
            ..Self::default()
        }
    }

    pub fn bye(side_a: Side) -> Self {
        Self {
            side_a,
            ..Self::default()
        }
    }

    /// Record a result (legs won by each side).
    pub fn with_scores(mut self, score_a: u32, score_b: u32) -> Self {
        self.score_a = Some(score_a);
        self.score_b = Some(score_b);
        self
    }

    pub fn is_bye(&self) -> bool {
        self.side_b.is_none()
    }

    /// The winning side under the strict-majority rule. Never set for a bye or an undecided match.
    pub fn winner(&self, options: &MatchOptions) -> Option<MatchSide> {
        if self.is_bye() {
            return None;
        }
        if self.score_a.is_some_and(|legs| options.is_winning_score(legs)) {
            Some(MatchSide::SideA)
        } else if self.score_b.is_some_and(|legs| options.is_winning_score(legs)) {
            Some(MatchSide::SideB)
        } else {
            None
        }
    }

    fn with_side_updated(&self, side: &Side) -> Match {
        let replace = |current: &Side| {
            if current.is_same_as(side) {
                side.clone()
            } else {
                current.clone()
            }
        };
        Match {
            side_a: replace(&self.side_a),
            side_b: self.side_b.as_ref().map(replace),
            ..self.clone()
        }
    }

    fn references(&self, side: &Side) -> bool {
        self.side_a.is_same_as(side) || self.side_b.as_ref().is_some_and(|b| b.is_same_as(side))
    }
}

/// A persisted round. Rounds form a singly linked forward chain through `next_round`,
/// which may stop early when later results have not been entered.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Per-match overrides by match index; missing or null entries use the caller's defaults.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_options: Vec<Option<MatchOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_round: Option<Box<Round>>,
}

impl Round {
    pub fn new(matches: Vec<Match>) -> Self {
        Self {
            matches,
            ..Self::default()
        }
    }

    pub fn with_next(mut self, next: Round) -> Self {
        self.next_round = Some(Box::new(next));
        self
    }

    pub fn next(&self) -> Option<&Round> {
        self.next_round.as_deref()
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Effective options for the match at `index`.
    pub fn options_for(&self, index: usize, defaults: &MatchOptions) -> MatchOptions {
        self.match_options
            .get(index)
            .copied()
            .flatten()
            .unwrap_or(*defaults)
    }

    /// Every side in every match of this round is concretely identified.
    pub fn is_fully_resolved(&self) -> bool {
        self.has_matches()
            && self.matches.iter().all(|m| {
                m.side_a.id.is_some() && m.side_b.as_ref().map_or(true, |b| b.id.is_some())
            })
    }

    /// Walk this round and every round after it.
    pub fn iter(&self) -> RoundIter<'_> {
        RoundIter { next: Some(self) }
    }

    /// Number of rounds in the chain starting here.
    pub fn depth(&self) -> usize {
        self.iter().count()
    }

    /// Rebuild the chain with `side` replacing every record with the same id.
    /// Matches that do not reference the side are cloned as-is.
    pub fn with_side_updated(&self, side: &Side) -> Round {
        let rounds: Vec<&Round> = self.iter().collect();
        let mut rebuilt: Option<Round> = None;
        for round in rounds.into_iter().rev() {
            let matches = round
                .matches
                .iter()
                .map(|m| {
                    if m.references(side) {
                        m.with_side_updated(side)
                    } else {
                        m.clone()
                    }
                })
                .collect();
            rebuilt = Some(Round {
                matches,
                name: round.name.clone(),
                match_options: round.match_options.clone(),
                next_round: rebuilt.map(Box::new),
            });
        }
        rebuilt.unwrap_or_default()
    }
}

/// Iterator over a forward-linked round chain.
pub struct RoundIter<'a> {
    next: Option<&'a Round>,
}

impl<'a> Iterator for RoundIter<'a> {
    type Item = &'a Round;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next();
        Some(current)
    }
}
