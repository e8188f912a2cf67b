//! Integration tests for mnemonic accumulators.

use dart_knockout_web::{AlphabeticMnemonics, MnemonicAccumulator, PrefixMnemonics};

fn take(acc: &mut dyn MnemonicAccumulator, n: usize) -> Vec<String> {
    (0..n).map(|_| acc.next_mnemonic()).collect()
}

#[test]
fn match_labels_increment_from_one() {
    let mut acc = PrefixMnemonics::matches();
    assert_eq!(take(&mut acc, 3), vec!["M1", "M2", "M3"]);
}

#[test]
fn custom_prefix() {
    let mut acc = PrefixMnemonics::new("R");
    assert_eq!(take(&mut acc, 2), vec!["R1", "R2"]);
}

#[test]
fn alphabetic_labels_run_a_to_z() {
    let labels = take(&mut AlphabeticMnemonics::new(), 26);
    assert_eq!(labels.first().map(String::as_str), Some("A"));
    assert_eq!(labels[1], "B");
    assert_eq!(labels.last().map(String::as_str), Some("Z"));
}

#[test]
fn alphabetic_labels_continue_past_z() {
    let mut acc = AlphabeticMnemonics::new();
    take(&mut acc, 26);
    assert_eq!(take(&mut acc, 3), vec!["AA", "AB", "AC"]);

    let labels = take(&mut AlphabeticMnemonics::new(), 703);
    assert_eq!(labels[701], "ZZ");
    assert_eq!(labels[702], "AAA");
}

#[test]
fn fresh_instances_restart_the_sequence() {
    let mut first = AlphabeticMnemonics::new();
    first.next_mnemonic();
    let mut second = AlphabeticMnemonics::new();
    assert_eq!(second.next_mnemonic(), "A");
}
