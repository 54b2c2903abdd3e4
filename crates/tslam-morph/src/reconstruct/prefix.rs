// Prefix step: match the target against a part-of-speech-specific prefix
// stack in front of the current attempt.

use regex::Regex;
use tslam_core::affix::AffixRecord;
use tslam_core::entry::{HeadwordEntry, PosClass};

use super::LETTERS;
use crate::tables::{
    ABILITY_PREFIXES, PLAIN_DETERMINERS, PREFIX_STEM_EXCEPTIONS, expand_contraction,
    prefix_lenites,
};

/// Try the prefix step. Returns the attempt with the matched prefix stack
/// prepended, or `None` when no prefix attaches (or when the match would
/// violate the lenition-licensing constraint).
pub(super) fn apply(
    entry: &HeadwordEntry,
    attempt: &str,
    target: &str,
    rec: &mut AffixRecord,
) -> Option<String> {
    let pattern = class_pattern(entry.pos_class(), rec)?;

    if let Some(out) = try_stem(&pattern, attempt, target, rec, None) {
        return Some(out);
    }

    // Lexical exceptions: a handful of stems surface with an altered vowel
    // under one specific prefix.
    for (citation, required, stem) in PREFIX_STEM_EXCEPTIONS {
        if *citation == entry.word && attempt == *citation {
            if let Some(out) = try_stem(&pattern, stem, target, rec, Some(required)) {
                return Some(out);
            }
        }
    }
    None
}

/// The legal prefix stack for one part-of-speech class. Verb prefixes are
/// derived from the affix state rather than the class alone: the attributive
/// marker only attaches once a participle infix is recorded.
fn class_pattern(class: PosClass, rec: &AffixRecord) -> Option<String> {
    match class {
        PosClass::Noun | PosClass::Pronoun => Some(
            "(?P<pc>pep|pem|pay|fay|tsay|fray)?(?P<pdet>pe|fì|tsa|fra)?\
             (?P<pnum>pxe|me|ay)?(?P<pfne>(?:fne)+)?"
                .to_string(),
        ),
        PosClass::Adjective => Some("(?P<pa>a)?".to_string()),
        PosClass::Verb if rec.is_participle() => {
            Some(format!("(?P<pa>a)?(?P<pab>{})?", ABILITY_PREFIXES.join("|")))
        }
        PosClass::Verb => Some(format!("(?P<pab>{})?", ABILITY_PREFIXES.join("|"))),
        PosClass::Other => None,
    }
}

fn try_stem(
    pattern: &str,
    stem: &str,
    target: &str,
    rec: &mut AffixRecord,
    required: Option<&str>,
) -> Option<String> {
    // A stem-initial e may be swallowed by a preceding e-final prefix
    // (me + 'eveng -> meveng). The optional group lets the pattern consume
    // the merged vowel; the match is validated below.
    let (stem_re, elidable) = match stem.strip_prefix('e') {
        Some(rest) => (format!("(?P<el>e)?{}", regex::escape(rest)), true),
        None => (regex::escape(stem), false),
    };

    let re = Regex::new(&format!(
        "^{pattern}(?P<stem>{stem_re})(?P<rest>{LETTERS}*)$"
    ))
    .ok()?;
    let caps = re.captures(target)?;

    let mut prefixes: Vec<String> = Vec::new();
    let mut lenition_licensed = false;
    let mut plain_determiner = false;

    if let Some(pc) = caps.name("pc") {
        let (det, num) = expand_contraction(pc.as_str())?;
        prefixes.push(det.into());
        prefixes.push(num.into());
        lenition_licensed = true;
    }
    if let Some(det) = caps.name("pdet") {
        if prefix_lenites(det.as_str()) {
            lenition_licensed = true;
        } else if PLAIN_DETERMINERS.contains(&det.as_str()) {
            plain_determiner = true;
        }
        prefixes.push(det.as_str().into());
    }
    if let Some(num) = caps.name("pnum") {
        lenition_licensed = true;
        prefixes.push(num.as_str().into());
    }
    if let Some(fne) = caps.name("pfne") {
        for _ in 0..fne.as_str().len() / 3 {
            prefixes.push("fne".into());
        }
    }
    for name in ["pa", "pab"] {
        if let Some(m) = caps.name(name) {
            prefixes.push(m.as_str().into());
        }
    }

    if prefixes.is_empty() {
        return None;
    }

    // The merged vowel is only legal after an e-final prefix.
    if elidable && caps.name("el").is_none() {
        let innermost = prefixes.last()?;
        if !innermost.ends_with('e') {
            return None;
        }
    }

    // Lenition is licensed only by certain prefixes: a plain determiner
    // stacked on an already-lenited stem without a leniting number prefix
    // rejects the whole step.
    if rec.lenition.is_some() && plain_determiner && !lenition_licensed {
        return None;
    }

    if let Some(required) = required {
        if !prefixes.iter().any(|p| p == required) {
            return None;
        }
    }

    let rest_start = caps.name("rest")?.start();
    rec.prefixes.extend(prefixes);
    Some(target[..rest_start].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun(word: &str) -> HeadwordEntry {
        HeadwordEntry {
            id: 1,
            word: word.into(),
            pos: "n.".into(),
            infix_template: String::new(),
            gloss: String::new(),
            aliases: Vec::new(),
        }
    }

    #[test]
    fn no_prefix_is_a_noop() {
        let e = noun("ikran");
        let mut rec = AffixRecord::new();
        assert_eq!(apply(&e, "ikran", "ikranìl", &mut rec), None);
        assert!(rec.prefixes.is_empty());
    }

    #[test]
    fn determiner_and_number_stack() {
        let e = noun("utral");
        let mut rec = AffixRecord::new();
        let out = apply(&e, "utral", "fìmeutral", &mut rec).unwrap();
        assert_eq!(out, "fìmeutral");
        assert_eq!(rec.prefixes, vec!["fì", "me"]);
    }

    #[test]
    fn fused_spelling_expands_to_both_morphemes() {
        let e = noun("utral");
        let mut rec = AffixRecord::new();
        apply(&e, "utral", "tsayutral", &mut rec).unwrap();
        assert_eq!(rec.prefixes, vec!["tsa", "ay"]);
    }

    #[test]
    fn kind_prefix_stacks_on_itself() {
        let e = noun("ikran");
        let mut rec = AffixRecord::new();
        apply(&e, "ikran", "fnefneikran", &mut rec).unwrap();
        assert_eq!(rec.prefixes, vec!["fne", "fne"]);
    }

    #[test]
    fn prefixes_keep_trailing_suffix_material() {
        let e = noun("ikran");
        let mut rec = AffixRecord::new();
        let out = apply(&e, "ikran", "ayikranìl", &mut rec).unwrap();
        assert_eq!(out, "ayikran");
    }

    #[test]
    fn plain_determiner_rejected_on_lenited_stem() {
        let e = noun("kelku");
        let mut rec = AffixRecord::new();
        rec.record_lenition("k", "h");
        assert_eq!(apply(&e, "helku", "fìhelku", &mut rec), None);
        assert!(rec.prefixes.is_empty());
    }

    #[test]
    fn leniting_number_accepted_on_lenited_stem() {
        let e = noun("kelku");
        let mut rec = AffixRecord::new();
        rec.record_lenition("k", "h");
        let out = apply(&e, "helku", "pxehelku", &mut rec).unwrap();
        assert_eq!(out, "pxehelku");
        assert_eq!(rec.prefixes, vec!["pxe"]);
    }

    #[test]
    fn merged_vowel_needs_e_final_prefix() {
        let e = noun("'eveng");
        let mut rec = AffixRecord::new();
        rec.record_lenition("'", "");
        // me- merges with the stem-initial e
        let out = apply(&e, "eveng", "meveng", &mut rec).unwrap();
        assert_eq!(out, "meveng");
        // ay- does not end in e, so the merged form is rejected
        let mut rec = AffixRecord::new();
        rec.record_lenition("'", "");
        assert_eq!(apply(&e, "eveng", "ayveng", &mut rec), None);
    }

    #[test]
    fn other_class_takes_no_prefixes() {
        let mut e = noun("slä");
        e.pos = "conj.".into();
        let mut rec = AffixRecord::new();
        assert_eq!(apply(&e, "slä", "fìslä", &mut rec), None);
    }
}
