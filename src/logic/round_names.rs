//! Round naming, counted back from the final.

use crate::models::LayoutRound;

/// Name every round that has no name yet: "Final", "Semi-Final", "Quarter-Final", and
/// "Round n" before that, where n runs from `len - 3` at the first round down to 1 just
/// before the Quarter-Final. Names already present are kept; order is unchanged.
pub fn name_rounds(rounds: Vec<LayoutRound>) -> Vec<LayoutRound> {
    let total = rounds.len();
    rounds
        .into_iter()
        .enumerate()
        .map(|(index, mut round)| {
            if round.name.is_none() {
                round.name = Some(default_round_name(total - 1 - index));
            }
            round
        })
        .collect()
}

fn default_round_name(rounds_after: usize) -> String {
    match rounds_after {
        0 => "Final".to_string(),
        1 => "Semi-Final".to_string(),
        2 => "Quarter-Final".to_string(),
        n => format!("Round {}", n - 2),
    }
}
