// Word-initial lenition and its approximate inverse.

use crate::tables::{LENITION, LENITION_DIGRAPH_GUARD};

/// Apply lenition to the start of a word.
///
/// Returns `Some((mutated_word, original, mutated))` when the word begins
/// with a lenitable cluster, `None` otherwise. Only the first occurrence is
/// rewritten and only at the word boundary.
pub fn lenite(word: &str) -> Option<(String, &'static str, &'static str)> {
    for (from, to) in LENITION {
        if let Some(rest) = word.strip_prefix(from) {
            return Some((format!("{to}{rest}"), from, to));
        }
    }
    None
}

/// Enumerate every plausible unlenited spelling of a word.
///
/// Lenition is many-to-one, so the inverse is a guess: `s` may come from
/// `t` or `ts`, a bare initial vowel may hide a deleted glottal stop, and
/// so on. Words beginning with one of the digraphs in
/// [`LENITION_DIGRAPH_GUARD`] are not treated as lenition output of their
/// first letter -- `tsun` is never read as lenited `txsun`.
pub fn unlenite(word: &str) -> Vec<String> {
    let mut out = Vec::new();
    let Some(first) = word.chars().next() else {
        return out;
    };

    for guard in LENITION_DIGRAPH_GUARD {
        if word.starts_with(guard) {
            return out;
        }
    }

    match first {
        'k' => out.push(format!("kx{}", &word[1..])),
        'p' => out.push(format!("px{}", &word[1..])),
        't' => out.push(format!("tx{}", &word[1..])),
        'h' => out.push(format!("k{}", &word[1..])),
        'f' => out.push(format!("p{}", &word[1..])),
        's' => {
            out.push(format!("t{}", &word[1..]));
            out.push(format!("ts{}", &word[1..]));
        }
        'a' | 'e' | 'i' | 'o' | 'u' | 'ä' | 'ì' | 'ù' => out.push(format!("'{word}")),
        _ => {}
    }
    out
}
