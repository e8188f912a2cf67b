//! Integration tests for projecting unplayed brackets.

use dart_knockout_web::{
    project_unplayed, project_unplayed_with, LayoutContext, LayoutRound, MnemonicAccumulator,
    PrefixMnemonics, Side,
};
use std::collections::HashSet;

fn sides(n: usize) -> Vec<Side> {
    (0..n).map(|i| Side::new(format!("Side {i}"))).collect()
}

fn describe(round: &LayoutRound) -> Vec<String> {
    round.matches.iter().map(|m| m.describe()).collect()
}

fn ceil_log2(n: usize) -> usize {
    (usize::BITS - (n - 1).leading_zeros()) as usize
}

#[test]
fn fewer_than_two_sides_projects_nothing() {
    let context = LayoutContext::default();
    assert!(project_unplayed(&[], &context).is_empty());
    assert!(project_unplayed(&sides(1), &context).is_empty());

    let withdrawn = vec![Side::new("A"), Side::new("B").withdrawn()];
    assert!(project_unplayed(&withdrawn, &context).is_empty());
}

#[test]
fn round_count_is_ceil_log2_and_final_has_one_match() {
    let context = LayoutContext::default();
    for n in 2..=40 {
        let rounds = project_unplayed(&sides(n), &context);
        assert_eq!(rounds.len(), ceil_log2(n), "{n} sides");

        let last = rounds.last().unwrap();
        assert_eq!(last.played_matches().count(), 1, "{n} sides");
        assert_eq!(last.byes().count(), 0, "{n} sides");
    }
}

#[test]
fn first_round_pairs_every_side_once() {
    let context = LayoutContext::default();
    for n in 2..=26 {
        let rounds = project_unplayed(&sides(n), &context);
        let first = &rounds[0];
        assert_eq!(first.played_matches().count(), n / 2, "{n} sides");
        assert_eq!(first.byes().count(), n % 2, "{n} sides");

        let mnemonics: Vec<String> = first
            .matches
            .iter()
            .flat_map(|m| std::iter::once(&m.side_a).chain(m.side_b.iter()))
            .map(|s| s.mnemonic.clone().unwrap())
            .collect();
        let unique: HashSet<&String> = mnemonics.iter().collect();
        assert_eq!(mnemonics.len(), n);
        assert_eq!(unique.len(), n);
    }
}

#[test]
fn every_round_leaves_at_most_one_bye_and_n_minus_one_matches_are_played() {
    let context = LayoutContext::default();
    for n in 2..=33 {
        let rounds = project_unplayed(&sides(n), &context);
        for round in &rounds {
            assert!(round.byes().count() <= 1);
        }
        let played: usize = rounds.iter().map(|r| r.played_matches().count()).sum();
        assert_eq!(played, n - 1, "{n} sides");
    }
}

#[test]
fn five_sides_bracket_shape() {
    let rounds = project_unplayed(&sides(5), &LayoutContext::default());

    assert_eq!(rounds.len(), 3);
    assert_eq!(describe(&rounds[0]), vec!["A vs B", "C vs D", "E"]);
    assert_eq!(describe(&rounds[1]), vec!["E vs winner(M1)", "winner(M2)"]);
    assert_eq!(describe(&rounds[2]), vec!["winner(M2) vs winner(M3)"]);

    let labels: Vec<Option<String>> = rounds
        .iter()
        .flat_map(|r| r.matches.iter().map(|m| m.mnemonic.clone()))
        .collect();
    assert_eq!(
        labels,
        vec![
            Some("M1".to_string()),
            Some("M2".to_string()),
            None,
            Some("M3".to_string()),
            None,
            Some("M4".to_string()),
        ]
    );
}

#[test]
fn byes_carry_no_match_and_no_score() {
    let rounds = project_unplayed(&sides(3), &LayoutContext::default());
    let bye = rounds[0].byes().next().unwrap();
    assert!(bye.side_b.is_none());
    assert!(bye.mnemonic.is_none());
    assert!(bye.winner.is_none());
    assert_eq!(bye.score_a, "0");
}

#[test]
fn only_the_final_hides_its_mnemonic() {
    let rounds = project_unplayed(&sides(8), &LayoutContext::default());
    let (last, earlier) = rounds.split_last().unwrap();
    assert!(last.matches.iter().all(|m| m.hide_mnemonic));
    assert!(earlier
        .iter()
        .flat_map(|r| r.matches.iter())
        .all(|m| !m.hide_mnemonic));
}

#[test]
fn projection_is_deterministic() {
    let input = sides(11);
    let context = LayoutContext::default();
    let first = serde_json::to_string(&project_unplayed(&input, &context)).unwrap();
    let second = serde_json::to_string(&project_unplayed(&input, &context)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn withdrawn_sides_are_not_projected() {
    let mut input = sides(5);
    input[4].no_show = true;
    let rounds = project_unplayed(&input, &LayoutContext::default());

    assert_eq!(rounds.len(), 2);
    assert_eq!(describe(&rounds[0]), vec!["A vs B", "C vs D"]);
    assert_eq!(rounds[0].possible_sides.len(), 4);
}

#[test]
fn shared_accumulator_continues_the_label_sequence() {
    let mut labels = PrefixMnemonics::matches();
    labels.next_mnemonic();
    labels.next_mnemonic();

    let rounds = project_unplayed_with(&sides(4), &LayoutContext::default(), &mut labels);
    assert_eq!(rounds[0].matches[0].mnemonic.as_deref(), Some("M3"));
    assert_eq!(rounds[1].matches[0].mnemonic.as_deref(), Some("M5"));
    assert_eq!(labels.next_mnemonic(), "M6");
}
