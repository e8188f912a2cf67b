//! Integration tests for naming rounds back from the final.

use dart_knockout_web::{name_rounds, LayoutRound};

fn unnamed(n: usize) -> Vec<LayoutRound> {
    (0..n).map(|_| LayoutRound::default()).collect()
}

fn names(rounds: &[LayoutRound]) -> Vec<String> {
    rounds.iter().map(|r| r.name.clone().unwrap()).collect()
}

#[test]
fn names_count_back_from_the_final() {
    assert_eq!(names(&name_rounds(unnamed(1))), vec!["Final"]);
    assert_eq!(names(&name_rounds(unnamed(2))), vec!["Semi-Final", "Final"]);
    assert_eq!(
        names(&name_rounds(unnamed(3))),
        vec!["Quarter-Final", "Semi-Final", "Final"]
    );
    assert_eq!(
        names(&name_rounds(unnamed(4))),
        vec!["Round 1", "Quarter-Final", "Semi-Final", "Final"]
    );
}

#[test]
fn earlier_rounds_count_down_to_one() {
    assert_eq!(
        names(&name_rounds(unnamed(6))),
        vec![
            "Round 3",
            "Round 2",
            "Round 1",
            "Quarter-Final",
            "Semi-Final",
            "Final"
        ]
    );
}

#[test]
fn existing_names_win() {
    let mut rounds = unnamed(3);
    rounds[1].name = Some("Last 4".to_string());
    assert_eq!(
        names(&name_rounds(rounds)),
        vec!["Quarter-Final", "Last 4", "Final"]
    );
}

#[test]
fn naming_twice_changes_nothing() {
    let once = name_rounds(unnamed(5));
    let twice = name_rounds(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn no_rounds_no_names() {
    assert!(name_rounds(Vec::new()).is_empty());
}
