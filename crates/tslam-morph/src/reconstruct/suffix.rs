// Suffix step: match the target against the current attempt followed by a
// part-of-speech-specific suffix pattern, with vowel-harmony rewrites on
// the stem edge.

use regex::Regex;
use tslam_core::affix::AffixRecord;
use tslam_core::entry::{HeadwordEntry, PosClass};

use crate::tables::{
    CASE_ALTS, DETERMINER_SUFFIXES, FINAL_ALTS, IA_GENITIVES, STEM_OVERRIDES, STEM_SUFFIXES,
    VERB_SUFFIXES,
};

/// Try the suffix step. Returns the target on a full match, `None` when no
/// suffix attaches.
pub(super) fn apply(
    entry: &HeadwordEntry,
    attempt: &str,
    target: &str,
    rec: &mut AffixRecord,
) -> Option<String> {
    // Literal bypass: the -ia nouns collapse to -iä in the genitive and
    // skip the general pattern entirely.
    if IA_GENITIVES.contains(&entry.word.as_str()) && attempt.ends_with("ia") {
        let literal = format!("{}ä", &attempt[..attempt.len() - 1]);
        if literal == target {
            rec.suffixes.push("ä".into());
            return Some(literal);
        }
    }

    let stem = STEM_OVERRIDES
        .iter()
        .find(|(from, _)| *from == attempt)
        .map(|(_, to)| *to)
        .unwrap_or(attempt);

    // Genitive harmony: a stem-final a or o may shift to e under -yä.
    let (stem_re, harmony) = if let Some(body) = stem.strip_suffix('a') {
        (format!("{}[ae]", regex::escape(body)), true)
    } else if let Some(body) = stem.strip_suffix('o') {
        (format!("{}[oe]", regex::escape(body)), true)
    } else {
        (regex::escape(stem), false)
    };

    let pattern = class_pattern(entry.pos_class(), rec);
    let re = Regex::new(&format!("^(?P<stem>{stem_re}){pattern}$")).ok()?;
    let caps = re.captures(target)?;

    let mut suffixes: Vec<String> = Vec::new();
    for name in ["st", "sdet", "sc", "sa", "sv", "sf"] {
        if let Some(m) = caps.name(name) {
            suffixes.push(m.as_str().into());
        }
    }
    if suffixes.is_empty() {
        return None;
    }

    // The e-shifted stem is only legal under the genitive.
    if harmony && caps.name("stem")?.as_str().ends_with('e') {
        match suffixes.first().map(String::as_str) {
            Some("yä") | Some("ä") => {}
            _ => return None,
        }
    }

    rec.suffixes.extend(suffixes);
    Some(target.to_string())
}

/// The legal suffix pattern for one part-of-speech class. Verb suffixes
/// depend on the affix state already recorded: a participle or ability form
/// declines like an adjective, a plain stem only takes the productive
/// derivation suffixes and clitics.
fn class_pattern(class: PosClass, rec: &AffixRecord) -> String {
    let finals = FINAL_ALTS.as_str();
    match class {
        PosClass::Noun | PosClass::Pronoun => format!(
            "(?P<st>{})?(?P<sdet>{})?(?P<sc>{})?(?P<sf>{finals})?",
            STEM_SUFFIXES.join("|"),
            DETERMINER_SUFFIXES.join("|"),
            *CASE_ALTS,
        ),
        PosClass::Adjective => format!("(?P<sa>a|{finals})?"),
        PosClass::Verb if rec.is_participle() || rec.is_ability_form() => {
            format!("(?P<sa>a|{finals})?")
        }
        PosClass::Verb => format!("(?P<sv>{})?(?P<sf>{finals})?", VERB_SUFFIXES.join("|")),
        PosClass::Other => format!("(?P<sf>{finals})?"),
    }
}
