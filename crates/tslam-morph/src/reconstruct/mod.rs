// Reconstruction engine: rewrite a citation form into an observed surface
// string through the recognized affixes, recording the chain used.
//
// The strategy is a deterministic two-pass pipeline. Pass A tries
// infix -> prefix -> suffix -> lenition; each step runs only while the
// attempt still differs from the target. Pass B starts over with lenition
// applied to the bare root before the prefix and suffix steps, because some
// prefix interactions (short plurals, leniting determiners) only become
// visible on the already-lenited stem. Infixes are not retried in pass B.
//
// "No match" is an expected outcome and is returned as `None`, never as an
// error.

mod infix;
mod prefix;
mod suffix;

use tslam_core::affix::AffixRecord;
use tslam_core::entry::HeadwordEntry;

use crate::lenition;

/// Character class covering every letter that can appear inside a Na'vi
/// word, including the glottal stop.
pub(crate) const LETTERS: &str = "[a-zäìù']";

/// Attempt to rewrite `entry`'s citation form into `target`.
///
/// On success the returned record lists every prefix, infix and suffix
/// applied plus at most one lenition event. An empty record means the
/// target equals the citation form exactly.
pub fn reconstruct(entry: &HeadwordEntry, target: &str) -> Option<AffixRecord> {
    if entry.word == target {
        return Some(AffixRecord::new());
    }
    if target.is_empty() {
        return None;
    }

    // Pass A: infix, prefix, suffix, lenition.
    let mut rec = AffixRecord::new();
    let mut attempt = entry.word.clone();
    if entry.pos_class().takes_infixes() && entry.has_infix_template() {
        if let Some(next) = infix::apply(entry, target, &mut rec) {
            attempt = next;
        }
    }
    if attempt != target {
        if let Some(next) = prefix::apply(entry, &attempt, target, &mut rec) {
            attempt = next;
        }
    }
    if attempt != target {
        if let Some(next) = suffix::apply(entry, &attempt, target, &mut rec) {
            attempt = next;
        }
    }
    if attempt != target {
        attempt = lenite_step(&attempt, &mut rec);
    }
    if attempt == target {
        return Some(rec);
    }

    // Pass B: lenition first, then prefix and suffix on the lenited root.
    let mut rec = AffixRecord::new();
    let mut attempt = lenite_step(&entry.word, &mut rec);
    if attempt != target {
        if let Some(next) = prefix::apply(entry, &attempt, target, &mut rec) {
            attempt = next;
        }
    }
    if attempt != target {
        if let Some(next) = suffix::apply(entry, &attempt, target, &mut rec) {
            attempt = next;
        }
    }
    if attempt == target { Some(rec) } else { None }
}

/// Lenite the start of the attempt and record the event. Idempotent: once
/// a lenition is recorded the attempt is returned unchanged.
fn lenite_step(attempt: &str, rec: &mut AffixRecord) -> String {
    if rec.lenition.is_some() {
        return attempt.to_string();
    }
    match lenition::lenite(attempt) {
        Some((word, from, to)) => {
            rec.record_lenition(from, to);
            word
        }
        None => attempt.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, pos: &str, template: &str) -> HeadwordEntry {
        HeadwordEntry {
            id: 1,
            word: word.into(),
            pos: pos.into(),
            infix_template: template.into(),
            gloss: String::new(),
            aliases: Vec::new(),
        }
    }

    #[test]
    fn citation_form_gives_empty_record() {
        let e = entry("ikran", "n.", "");
        let rec = reconstruct(&e, "ikran").unwrap();
        assert!(rec.is_empty());
    }

    #[test]
    fn empty_target_never_matches() {
        let e = entry("ikran", "n.", "");
        assert!(reconstruct(&e, "").is_none());
    }

    #[test]
    fn unrelated_target_fails() {
        let e = entry("ikran", "n.", "");
        assert!(reconstruct(&e, "toruk").is_none());
    }

    #[test]
    fn single_determiner_prefix() {
        let e = entry("ikran", "n.", "");
        let rec = reconstruct(&e, "fìikran").unwrap();
        assert_eq!(rec.prefixes, vec!["fì"]);
        assert!(rec.lenition.is_none());
    }

    #[test]
    fn case_suffix_on_noun() {
        let e = entry("ikran", "n.", "");
        let rec = reconstruct(&e, "ikranìl").unwrap();
        assert_eq!(rec.suffixes, vec!["ìl"]);
    }

    #[test]
    fn stacked_suffixes_on_noun() {
        let e = entry("ikran", "n.", "");
        let rec = reconstruct(&e, "ikrantsyìpìl").unwrap();
        assert_eq!(rec.suffixes, vec!["tsyìp", "ìl"]);
    }

    #[test]
    fn leniting_plural_requires_pass_b() {
        let e = entry("kelku", "n.", "");
        let rec = reconstruct(&e, "ayhelku").unwrap();
        assert_eq!(rec.prefixes, vec!["ay"]);
        let len = rec.lenition.unwrap();
        assert_eq!((len.from.as_str(), len.to.as_str()), ("k", "h"));
    }

    #[test]
    fn short_plural_is_bare_lenition() {
        let e = entry("kelku", "n.", "");
        let rec = reconstruct(&e, "helku").unwrap();
        assert!(rec.prefixes.is_empty());
        assert!(rec.lenition.is_some());
    }

    #[test]
    fn lenited_stem_takes_suffixes() {
        let e = entry("tute", "n.", "");
        let rec = reconstruct(&e, "sutel").unwrap();
        assert_eq!(rec.suffixes, vec!["l"]);
        let len = rec.lenition.unwrap();
        assert_eq!((len.from.as_str(), len.to.as_str()), ("t", "s"));
    }

    #[test]
    fn plain_determiner_never_licenses_lenition() {
        // fì- does not lenite, so a lenited stem under bare fì- is rejected.
        let e = entry("kelku", "n.", "");
        assert!(reconstruct(&e, "fìhelku").is_none());
    }

    #[test]
    fn fused_determiner_plural_licenses_lenition() {
        let e = entry("kelku", "n.", "");
        let rec = reconstruct(&e, "fayhelku").unwrap();
        assert_eq!(rec.prefixes, vec!["fì", "ay"]);
        assert!(rec.lenition.is_some());
    }

    #[test]
    fn lenition_invariant_holds() {
        // If lenition x->y is recorded, the target stem starts with y and
        // the citation form starts with x.
        let e = entry("kelku", "n.", "");
        let rec = reconstruct(&e, "ayhelku").unwrap();
        let len = rec.lenition.unwrap();
        assert!(e.word.starts_with(&len.from));
        assert!("helku".starts_with(&len.to));
    }

    #[test]
    fn dual_prefix_merges_double_e() {
        let e = entry("'eveng", "n.", "");
        let rec = reconstruct(&e, "meveng").unwrap();
        assert_eq!(rec.prefixes, vec!["me"]);
        let len = rec.lenition.unwrap();
        assert_eq!(len.from, "'");
        assert_eq!(len.to, "");
    }

    #[test]
    fn single_slot1_infix() {
        let e = entry("taron", "vtr.", "t<0><1>ar<2>on");
        let rec = reconstruct(&e, "tayaron").unwrap();
        assert_eq!(rec.infixes, vec!["ay"]);
    }

    #[test]
    fn all_three_slots_recovered_in_order() {
        let e = entry("taron", "vtr.", "t<0><1>ar<2>on");
        let rec = reconstruct(&e, "teykìyevareion").unwrap();
        assert_eq!(rec.infixes, vec!["eyk", "ìyev", "ei"]);
    }

    #[test]
    fn long_evidential_allomorph_recorded_short() {
        let e = entry("taron", "vtr.", "t<0><1>ar<2>on");
        let rec = reconstruct(&e, "tareiyon").unwrap();
        assert_eq!(rec.infixes, vec!["ei"]);
    }

    #[test]
    fn geminate_absorbs_into_perfective() {
        let e = entry("plltxe", "vin.", "p<0><1>lltx<2>e");
        let rec = reconstruct(&e, "poltxe").unwrap();
        assert_eq!(rec.infixes, vec!["ol"]);
    }

    #[test]
    fn infixed_verb_takes_prefix_and_suffix_around_core() {
        let e = entry("taron", "vtr.", "t<0><1>ar<2>on");
        let rec = reconstruct(&e, "tusaronsì").unwrap();
        assert_eq!(rec.infixes, vec!["us"]);
        assert_eq!(rec.suffixes, vec!["sì"]);
    }

    #[test]
    fn agent_suffix_on_verb_stem() {
        let e = entry("taron", "vtr.", "t<0><1>ar<2>on");
        let rec = reconstruct(&e, "taronyu").unwrap();
        assert_eq!(rec.suffixes, vec!["yu"]);
        assert!(rec.infixes.is_empty());
    }

    #[test]
    fn genitive_harmony_shifts_final_vowel() {
        let e = entry("nga", "pn.", "");
        let rec = reconstruct(&e, "ngeyä").unwrap();
        assert_eq!(rec.suffixes, vec!["yä"]);
    }

    #[test]
    fn hardcoded_ia_genitive() {
        let e = entry("soaia", "n.", "");
        let rec = reconstruct(&e, "soaiä").unwrap();
        assert_eq!(rec.suffixes, vec!["ä"]);
    }

    #[test]
    fn irregular_pronoun_stem() {
        let e = entry("oeng", "pn.", "");
        let rec = reconstruct(&e, "oengal").unwrap();
        assert_eq!(rec.suffixes, vec!["l"]);
        let rec = reconstruct(&e, "oengeyä").unwrap();
        assert_eq!(rec.suffixes, vec!["yä"]);
    }

    #[test]
    fn attributive_adjective_both_edges() {
        let e = entry("lor", "adj.", "");
        let rec = reconstruct(&e, "alor").unwrap();
        assert_eq!(rec.prefixes, vec!["a"]);
        let rec = reconstruct(&e, "lora").unwrap();
        assert_eq!(rec.suffixes, vec!["a"]);
    }

    #[test]
    fn ability_prefix_on_verb() {
        let e = entry("taron", "vtr.", "t<0><1>ar<2>on");
        let rec = reconstruct(&e, "tsuktaron").unwrap();
        assert_eq!(rec.prefixes, vec!["tsuk"]);
    }

    #[test]
    fn lexical_prefix_exception() {
        let e = entry("'u", "n.", "");
        let rec = reconstruct(&e, "fneu").unwrap();
        assert_eq!(rec.prefixes, vec!["fne"]);
    }

    #[test]
    fn deterministic_across_calls() {
        let e = entry("kelku", "n.", "");
        let a = reconstruct(&e, "ayhelku");
        let b = reconstruct(&e, "ayhelku");
        assert_eq!(a, b);
    }
}
