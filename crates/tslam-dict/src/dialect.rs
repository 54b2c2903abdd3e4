// Forest/reef dialect normalization: a small set of reversible phonological
// substitutions applied to spellings before dictionary lookup.
//
// Reef Na'vi palatalizes the sibilant clusters (tsy -> ch, sy -> sh),
// merges the ù vowel into u, and voices ejectives between vowels
// (px/tx/kx -> b/d/g). The inverse mapping cannot restore ù; that loss is
// inherent to the dialect and the reef index is built from reef spellings
// so round-trips through lookup are unaffected.

/// Which per-dialect index variant a lookup consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    #[default]
    Forest,
    Reef,
}

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'ä', 'ì', 'ù'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Rewrite a forest spelling into its reef form.
pub fn to_reef(word: &str) -> String {
    let mut out = word.replace("tsy", "ch").replace("sy", "sh").replace('ù', "u");

    let chars: Vec<char> = out.chars().collect();
    let mut result = String::with_capacity(out.len());
    let mut i = 0;
    while i < chars.len() {
        let voiced = if i + 2 < chars.len() && i > 0 && is_vowel(chars[i - 1]) && chars[i + 1] == 'x'
        {
            // intervocalic ejective: the cluster sits between vowels
            match (chars[i], is_vowel(chars[i + 2])) {
                ('p', true) => Some('b'),
                ('t', true) => Some('d'),
                ('k', true) => Some('g'),
                _ => None,
            }
        } else {
            None
        };
        match voiced {
            Some(v) => {
                result.push(v);
                i += 2;
            }
            None => {
                result.push(chars[i]);
                i += 1;
            }
        }
    }
    out = result;
    out
}

/// Rewrite a reef spelling back into forest form. `g` is only restored to
/// `kx` when it is not the second half of the `ng` digraph.
pub fn from_reef(word: &str) -> String {
    let mut out = word.replace("ch", "tsy").replace("sh", "sy");

    let chars: Vec<char> = out.chars().collect();
    let mut result = String::with_capacity(out.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        let between_vowels = i > 0
            && i + 1 < chars.len()
            && is_vowel(chars[i - 1])
            && is_vowel(chars[i + 1]);
        match c {
            'b' if between_vowels => result.push_str("px"),
            'd' if between_vowels => result.push_str("tx"),
            'g' if between_vowels && chars[i - 1] != 'n' => result.push_str("kx"),
            _ => result.push(c),
        }
    }
    out = result;
    out
}
