//! Engine output: LayoutSide, LayoutMatch and LayoutRound, consumed by the rendering layer.

use crate::models::round::{MatchOptions, MatchSide};
use crate::models::side::{Side, SideId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A side as laid out in the bracket. `mnemonic` is set only while the real identity is unknown.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SideId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Render handle from the caller's link resolver, never inspected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
}

impl LayoutSide {
    pub fn from_side(side: &Side, link: Option<String>) -> Self {
        Self {
            id: side.id,
            name: side.name.clone(),
            link,
            mnemonic: None,
        }
    }

    pub fn from_mnemonic(mnemonic: impl Into<String>) -> Self {
        Self {
            mnemonic: Some(mnemonic.into()),
            ..Self::default()
        }
    }

    /// Placeholder for the winner of the match labelled `match_mnemonic`.
    pub fn winner_of(match_mnemonic: &str) -> Self {
        Self::from_mnemonic(format!("winner({})", match_mnemonic))
    }

    pub fn is_resolved(&self) -> bool {
        self.id.is_some()
    }

    /// Display label, also the ordering key when pairing: mnemonic, else name, else id.
    pub fn label(&self) -> String {
        self.mnemonic
            .clone()
            .or_else(|| self.name.clone())
            .or_else(|| self.id.map(|id| id.to_string()))
            .unwrap_or_default()
    }
}

/// A match as laid out in the bracket (real or projected).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMatch {
    pub side_a: LayoutSide,
    /// None for a bye.
    pub side_b: Option<LayoutSide>,
    /// Leg counts, "0" until played.
    pub score_a: String,
    pub score_b: String,
    pub bye: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<MatchSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sayg_id: Option<Uuid>,
    /// This match's own label, referenced by later rounds as `winner(<mnemonic>)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
    pub hide_mnemonic: bool,
    pub match_options: MatchOptions,
}

impl LayoutMatch {
    /// A not-yet-played match between two (possibly placeholder) sides.
    pub fn projected(
        side_a: LayoutSide,
        side_b: LayoutSide,
        mnemonic: String,
        match_options: MatchOptions,
    ) -> Self {
        Self {
            side_a,
            side_b: Some(side_b),
            score_a: "0".to_string(),
            score_b: "0".to_string(),
            bye: false,
            winner: None,
            sayg_id: None,
            mnemonic: Some(mnemonic),
            hide_mnemonic: false,
            match_options,
        }
    }

    /// A side advancing without a match. Byes carry no match mnemonic.
    pub fn bye(side: LayoutSide, match_options: MatchOptions) -> Self {
        Self {
            side_a: side,
            side_b: None,
            score_a: "0".to_string(),
            score_b: "0".to_string(),
            bye: true,
            winner: None,
            sayg_id: None,
            mnemonic: None,
            hide_mnemonic: false,
            match_options,
        }
    }

    /// The side this match sends into the next round: the winner if known,
    /// the bye side, or a `winner(..)` placeholder.
    pub fn advancing_side(&self) -> LayoutSide {
        match (&self.winner, &self.side_b) {
            (Some(MatchSide::SideA), _) | (_, None) => self.side_a.clone(),
            (Some(MatchSide::SideB), Some(side_b)) => side_b.clone(),
            (None, Some(_)) => match &self.mnemonic {
                Some(mnemonic) => LayoutSide::winner_of(mnemonic),
                None => LayoutSide::default(),
            },
        }
    }

    /// "A vs B", or just "A" for a bye.
    pub fn describe(&self) -> String {
        match &self.side_b {
            Some(side_b) => format!("{} vs {}", self.side_a.label(), side_b.label()),
            None => self.side_a.label(),
        }
    }
}

/// One round of the laid-out bracket.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRound {
    /// Assigned late by `name_rounds` unless the persisted round carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub matches: Vec<LayoutMatch>,
    /// Candidate pool this round was computed against.
    pub possible_sides: Vec<Side>,
    /// Sides consumed by this round's real matches.
    pub already_selected_sides: Vec<Side>,
}

impl LayoutRound {
    /// Matches that are actually played (not byes).
    pub fn played_matches(&self) -> impl Iterator<Item = &LayoutMatch> {
        self.matches.iter().filter(|m| !m.bye)
    }

    pub fn byes(&self) -> impl Iterator<Item = &LayoutMatch> {
        self.matches.iter().filter(|m| m.bye)
    }
}
