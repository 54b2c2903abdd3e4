// Idiom table: dictionary senses realized as fixed multi-token sequences.
//
// Each idiom is keyed by its head token; the value lists the follow-up
// token sequences that complete it. The corresponding full phrase must be
// present in the dictionary under its joined citation form for the splice
// to produce a result.

use hashbrown::HashMap;

/// Negation particles that may interpose between an idiom head and its
/// companion token ("srung ke si" still realizes "srung si").
pub const NEGATION_PARTICLES: &[&str] = &["ke", "rä'ä"];

/// Negative-polarity words that strengthen an interposed "ke" to a
/// two-token realization ("srung ke kawkrr si", "srung ke kaw'it si").
pub const NEGATION_STRENGTHENERS: &[&str] = &["kawkrr", "kaw'it"];

/// Built-in idiom heads and their follow-up sequences.
const IDIOMS: &[(&str, &[&[&str]])] = &[
    ("srung", &[&["si"]]),
    ("kelku", &[&["si"]]),
    ("tìkangkem", &[&["si"]]),
    ("eltur", &[&["tìtxen", "si"]]),
    ("tìng", &[&["mikyun"], &["nari"]]),
];

/// Mapping from idiom head token to its registered follow-up sequences.
#[derive(Debug, Default)]
pub struct MultiwordTable {
    map: HashMap<String, Vec<Vec<String>>>,
}

impl MultiwordTable {
    /// The standard idiom table.
    pub fn standard() -> Self {
        let mut table = Self::default();
        for (head, seqs) in IDIOMS {
            for seq in *seqs {
                table.register(head, seq.iter().map(|s| s.to_string()).collect());
            }
        }
        table
    }

    /// Register one follow-up sequence for a head token.
    pub fn register(&mut self, head: &str, sequence: Vec<String>) {
        self.map.entry(head.to_string()).or_default().push(sequence);
    }

    /// Follow-up sequences for a head token, if it heads any idiom.
    pub fn sequences(&self, head: &str) -> Option<&[Vec<String>]> {
        self.map.get(head).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_has_si_constructions() {
        let table = MultiwordTable::standard();
        let seqs = table.sequences("srung").unwrap();
        assert_eq!(seqs, &[vec!["si".to_string()]]);
    }

    #[test]
    fn one_head_may_have_several_sequences() {
        let table = MultiwordTable::standard();
        assert_eq!(table.sequences("tìng").unwrap().len(), 2);
    }

    #[test]
    fn non_head_returns_none() {
        let table = MultiwordTable::standard();
        assert!(table.sequences("ikran").is_none());
    }

    #[test]
    fn custom_registration() {
        let mut table = MultiwordTable::standard();
        table.register("oeyk", vec!["lu".into()]);
        assert!(table.sequences("oeyk").is_some());
    }
}
