//! Placeholder labels for sides and matches whose identity is not yet known.

/// Yields a fresh label per call, in a fixed sequence for a given instance.
pub trait MnemonicAccumulator {
    fn next_mnemonic(&mut self) -> String;
}

/// "M1", "M2", "M3", ... (or any other prefix).
#[derive(Clone, Debug)]
pub struct PrefixMnemonics {
    prefix: String,
    issued: usize,
}

impl PrefixMnemonics {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            issued: 0,
        }
    }

    /// Match labels: "M1", "M2", ...
    pub fn matches() -> Self {
        Self::new("M")
    }
}

impl MnemonicAccumulator for PrefixMnemonics {
    fn next_mnemonic(&mut self) -> String {
        self.issued += 1;
        format!("{}{}", self.prefix, self.issued)
    }
}

/// "A" to "Z", then "AA", "AB", ... like spreadsheet columns.
#[derive(Clone, Debug, Default)]
pub struct AlphabeticMnemonics {
    issued: usize,
}

impl AlphabeticMnemonics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MnemonicAccumulator for AlphabeticMnemonics {
    fn next_mnemonic(&mut self) -> String {
        let label = column_label(self.issued);
        self.issued += 1;
        label
    }
}

fn column_label(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(char::from(b'A' + (index % 26) as u8));
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.iter().rev().collect()
}
