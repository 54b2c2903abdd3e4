// Fixed morpheme tables.
//
// Everything here is hand-curated language data: recognized affix morphemes
// keyed by slot and part-of-speech class, the ordered lenition table, the
// deconjugation phase tables, and the small lexical exception lists. No
// logic lives in this module beyond table lookup helpers.

use once_cell::sync::Lazy;

/// Ordered word-initial lenition pairs. The first pair whose left side
/// prefixes the word wins, so the ejective digraphs must precede their
/// plain counterparts and `ts` must precede `t`.
pub const LENITION: &[(&str, &str)] = &[
    ("kx", "k"),
    ("px", "p"),
    ("tx", "t"),
    ("k", "h"),
    ("p", "f"),
    ("ts", "s"),
    ("t", "s"),
    ("'", ""),
];

/// Word-initial clusters that look like single lenition outputs but are
/// digraphs in their own right. A word starting with one of these is never
/// treated as the lenited form of its first letter alone.
pub const LENITION_DIGRAPH_GUARD: &[&str] = &["ts", "px", "tx", "kx"];

// ---------------------------------------------------------------------------
// Verbal infixes
// ---------------------------------------------------------------------------

/// Slot 0: reflexive and causative, alone or stacked.
pub const INFIX_SLOT0: &[&str] = &["äpeyk", "äp", "eyk"];

/// Slot 1: tense / aspect / mood. Longest forms first so the pattern
/// alternation cannot shadow a longer morpheme with its own prefix.
pub const INFIX_SLOT1: &[&str] = &[
    "ìyev", "iyev", "asy", "ìsy", "aly", "ìly", "ary", "ìry", "alm", "ìlm", "arm", "ìrm", "imv",
    "ilv", "irv", "awn", "am", "ìm", "ay", "ìy", "ol", "er", "iv", "us",
];

/// Slot 2: affect and evidentiality. `eiy` is the post-stem allomorph of
/// `ei` and is recorded under the short spelling.
pub const INFIX_SLOT2: &[&str] = &["eiy", "ei", "äng", "eng", "uy", "ats"];

/// Slot-1 morphemes that absorb a geminate liquid written in the template
/// (`p<1>lltxe` + `ol` surfaces as `poltxe`, not `polltxe`).
pub const GEMINATE_ABSORBERS: &[&str] = &["ol", "er"];

// ---------------------------------------------------------------------------
// Prefixes
// ---------------------------------------------------------------------------

/// Determiner prefixes that never license lenition.
pub const PLAIN_DETERMINERS: &[&str] = &["fì", "tsa", "fra"];

/// Number prefixes; all of them lenite, as does interrogative `pe`.
pub const LENITING_NUMBER: &[&str] = &["pxe", "me", "ay"];

/// Fused determiner+number spellings. Each expands to the two morphemes it
/// contracts, and each carries the lenition of its number half.
pub const PREFIX_CONTRACTIONS: &[(&str, &str, &str)] = &[
    ("pep", "pe", "pxe"),
    ("pem", "pe", "me"),
    ("pay", "pe", "ay"),
    ("fay", "fì", "ay"),
    ("tsay", "tsa", "ay"),
    ("fray", "fra", "ay"),
];

/// Ability prefixes on verbs; the result behaves like an adjective.
pub const ABILITY_PREFIXES: &[&str] = &["ketsuk", "tsuk"];

/// Lexical prefix exceptions: `(citation form, required prefix, stem as it
/// surfaces under that prefix)`.
pub const PREFIX_STEM_EXCEPTIONS: &[(&str, &str, &str)] = &[("'u", "fne", "u")];

// ---------------------------------------------------------------------------
// Suffixes
// ---------------------------------------------------------------------------

/// Case endings and adposition-like suffixes on nominals, longest first.
pub const CASE_ADPOSITION_SUFFIXES: &[&str] = &[
    "kxamlä", "ftumfa", "nemfa", "luke", "pxel", "teri", "ìlä", "ìri", "sre", "fpi", "ftu", "hu",
    "ka", "mì", "ne", "ro", "ta", "wä", "yä", "ìl", "it", "ti", "ur", "ru", "ri", "l", "t", "r",
    "ä",
];

/// Clause-level enclitic particles that ride on the last word of a phrase.
pub const FINAL_PARTICLES: &[&str] = &["sì", "to"];

/// Determiner suffixes.
pub const DETERMINER_SUFFIXES: &[&str] = &["pe", "o"];

/// Stem-type suffixes (diminutive, state-of).
pub const STEM_SUFFIXES: &[&str] = &["tsyìp", "fkeyk"];

/// Verb-stem derivation suffixes (agentive, ability noun).
pub const DERIVATION_SUFFIXES: &[&str] = &["tswo", "yu", "tu"];

/// Productive verb-stem suffixes recognized by the forward engine.
pub const VERB_SUFFIXES: &[&str] = &["tswo", "yu"];

/// Irregular pronoun stems substituted before the suffix pattern runs.
pub const STEM_OVERRIDES: &[(&str, &str)] = &[("oeng", "oenga"), ("ayoeng", "ayoenga")];

/// Citation forms whose genitive bypasses the general pattern with a literal
/// surface form (`-ia` collapses to `-iä`).
pub const IA_GENITIVES: &[&str] = &["soaia", "meuia", "tìftia"];

// ---------------------------------------------------------------------------
// Deconjugation phase tables
// ---------------------------------------------------------------------------

/// Prefix-removal phase 0: leniting spellings, including the fused
/// determiner+number forms and the non-leniting determiner stacked directly
/// on a leniting number prefix.
pub const DECONJ_PREFIXES_LENITING: &[&str] = &[
    "fìme", "fìpxe", "tsame", "tsapxe", "frame", "frapxe", "tsay", "fray", "fay", "pay", "pem",
    "pep", "pxe", "me", "ay", "pe",
];

/// Prefix-removal phase 1: plain prefixes.
pub const DECONJ_PREFIXES_PLAIN: &[&str] = &["ketsuk", "tsuk", "fra", "tsa", "fì", "a"];

/// Prefix-removal phase 2: the stackable kind-of prefix.
pub const DECONJ_PREFIX_STACKER: &str = "fne";

/// Suffix-removal phase 0: enclitic particles plus the trailing attributive
/// marker of adjectives.
pub const DECONJ_FINAL_SUFFIXES: &[&str] = &["sì", "to", "a"];

/// Suffix-removal phases, outermost morphemes first. A node reached at
/// phase `k` is eligible for all phases `>= k`.
pub const DECONJ_SUFFIX_PHASES: &[&[&str]] = &[
    DECONJ_FINAL_SUFFIXES,
    CASE_ADPOSITION_SUFFIXES,
    DETERMINER_SUFFIXES,
    STEM_SUFFIXES,
    DERIVATION_SUFFIXES,
];

// ---------------------------------------------------------------------------
// Prebuilt pattern fragments
// ---------------------------------------------------------------------------

/// Alternation strings assembled once and reused across every pattern
/// build. None of the morphemes need escaping.
pub static SLOT0_ALTS: Lazy<String> = Lazy::new(|| INFIX_SLOT0.join("|"));
pub static SLOT1_ALTS: Lazy<String> = Lazy::new(|| INFIX_SLOT1.join("|"));
pub static SLOT2_ALTS: Lazy<String> = Lazy::new(|| INFIX_SLOT2.join("|"));
pub static ABSORBER_ALTS: Lazy<String> = Lazy::new(|| GEMINATE_ABSORBERS.join("|"));
pub static CASE_ALTS: Lazy<String> = Lazy::new(|| CASE_ADPOSITION_SUFFIXES.join("|"));
pub static FINAL_ALTS: Lazy<String> = Lazy::new(|| FINAL_PARTICLES.join("|"));

/// Look up a fused prefix spelling, returning the two morphemes it expands to.
pub fn expand_contraction(prefix: &str) -> Option<(&'static str, &'static str)> {
    PREFIX_CONTRACTIONS
        .iter()
        .find(|(c, _, _)| *c == prefix)
        .map(|(_, det, num)| (*det, *num))
}

/// Whether a single (non-fused) prefix morpheme licenses lenition.
pub fn prefix_lenites(prefix: &str) -> bool {
    prefix == "pe" || LENITING_NUMBER.contains(&prefix)
}
