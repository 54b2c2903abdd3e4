// Deconjugation: reverse search from an inflected surface form to every
// root candidate reachable by repeatedly removing one recognized morpheme.
//
// The search is an explicit breadth-first traversal of a string-rewrite
// graph. Each node carries a phase cursor per edge family (prefix removal,
// infix removal, suffix removal); phases narrow monotonically, so a node
// reached at phase k is eligible for all edges of phases >= k but never for
// earlier ones. A call-local visited set guarantees every string is
// expanded at most once, bounding the search to the finite closure of the
// rewrite system.
//
// Infix removal is deliberately over-eager: any mid-word occurrence of an
// infix morpheme is a removal candidate, and false roots are expected.
// Callers filter by dictionary lookup plus reconstruction, which rejects
// any root that cannot actually shell the surface form.

use std::collections::VecDeque;

use hashbrown::HashSet;

use crate::lenition::unlenite;
use crate::tables::{
    DECONJ_PREFIX_STACKER, DECONJ_PREFIXES_LENITING, DECONJ_PREFIXES_PLAIN, DECONJ_SUFFIX_PHASES,
    INFIX_SLOT0, INFIX_SLOT1, INFIX_SLOT2, PREFIX_STEM_EXCEPTIONS, STEM_OVERRIDES,
};

/// Removal edges never produce a remainder shorter than this.
const MIN_STEM_CHARS: usize = 2;

/// Safety cap on the number of expanded nodes for one call.
const MAX_NODES: usize = 4096;

/// The three infix slot tables in template order.
const INFIX_SLOTS: &[&[&str]] = &[INFIX_SLOT0, INFIX_SLOT1, INFIX_SLOT2];

#[derive(Debug, Clone)]
struct Candidate {
    form: String,
    prefix_phase: usize,
    /// Next infix slot still eligible for removal; each slot fills at most
    /// once per word.
    infix_slot: usize,
    suffix_phase: usize,
    /// Set once an unlenition rewrite has been applied on this path, so a
    /// form is never unlenited twice.
    lenition_consumed: bool,
}

/// Return every string reachable from `surface` by morpheme removal,
/// excluding `surface` itself. The result is sorted for determinism; the
/// order carries no linguistic meaning.
pub fn deconjugate(surface: &str) -> Vec<String> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<Candidate> = VecDeque::new();

    visited.insert(surface.to_string());
    queue.push_back(Candidate {
        form: surface.to_string(),
        prefix_phase: 0,
        infix_slot: 0,
        suffix_phase: 0,
        lenition_consumed: false,
    });

    let push = |queue: &mut VecDeque<Candidate>,
                visited: &mut HashSet<String>,
                cand: Candidate| {
        if cand.form.chars().count() >= MIN_STEM_CHARS
            && visited.len() < MAX_NODES
            && visited.insert(cand.form.clone())
        {
            queue.push_back(cand);
        }
    };

    while let Some(node) = queue.pop_front() {
        // Phase 0: leniting prefixes. Removing one may expose a lenited
        // cluster, so every plausible unlenited rewrite of the remainder is
        // reachable too. A bare form may also be unlenited in place: the
        // short plural keeps the mutation but drops the prefix entirely.
        if node.prefix_phase == 0 && !node.lenition_consumed {
            for variant in unlenite(&node.form) {
                push(
                    &mut queue,
                    &mut visited,
                    Candidate {
                        form: variant,
                        lenition_consumed: true,
                        ..node.clone()
                    },
                );
            }
        }
        if node.prefix_phase == 0 {
            for prefix in DECONJ_PREFIXES_LENITING {
                let Some(rest) = node.form.strip_prefix(prefix) else {
                    continue;
                };
                for stem in restore_elided_vowel(prefix, rest) {
                    if !node.lenition_consumed {
                        for variant in unlenite(&stem) {
                            push(
                                &mut queue,
                                &mut visited,
                                Candidate {
                                    form: variant,
                                    prefix_phase: 0,
                                    infix_slot: node.infix_slot,
                                    suffix_phase: node.suffix_phase,
                                    lenition_consumed: true,
                                },
                            );
                        }
                    }
                    push(
                        &mut queue,
                        &mut visited,
                        Candidate {
                            form: stem,
                            prefix_phase: 0,
                            infix_slot: node.infix_slot,
                            suffix_phase: node.suffix_phase,
                            lenition_consumed: node.lenition_consumed,
                        },
                    );
                }
            }
        }

        // Phase 1: plain prefixes.
        if node.prefix_phase <= 1 {
            for prefix in DECONJ_PREFIXES_PLAIN {
                if let Some(rest) = node.form.strip_prefix(prefix) {
                    for stem in restore_elided_vowel(prefix, rest) {
                        push(
                            &mut queue,
                            &mut visited,
                            Candidate {
                                form: stem,
                                prefix_phase: 1,
                                infix_slot: node.infix_slot,
                                suffix_phase: node.suffix_phase,
                                lenition_consumed: node.lenition_consumed,
                            },
                        );
                    }
                }
            }
        }

        // Phase 2: the stackable kind-of prefix.
        if let Some(rest) = node.form.strip_prefix(DECONJ_PREFIX_STACKER) {
            for stem in restore_elided_vowel(DECONJ_PREFIX_STACKER, rest) {
                push(
                    &mut queue,
                    &mut visited,
                    Candidate {
                        form: stem,
                        prefix_phase: 2,
                        infix_slot: node.infix_slot,
                        suffix_phase: node.suffix_phase,
                        lenition_consumed: node.lenition_consumed,
                    },
                );
            }
        }

        // Infix slots, template order. An occurrence is never word-initial;
        // removing a slot-1 morpheme that absorbed a geminate liquid also
        // yields the variant with the doubled liquid restored.
        for slot in node.infix_slot..INFIX_SLOTS.len() {
            for infix in INFIX_SLOTS[slot] {
                for (at, _) in node.form.match_indices(infix).filter(|&(at, _)| at > 0) {
                    let mut removed = node.form.clone();
                    removed.replace_range(at..at + infix.len(), "");
                    push(
                        &mut queue,
                        &mut visited,
                        Candidate {
                            form: removed,
                            infix_slot: slot + 1,
                            ..node.clone()
                        },
                    );
                    let liquid = match *infix {
                        "ol" => Some("ll"),
                        "er" => Some("rr"),
                        _ => None,
                    };
                    if let Some(liquid) = liquid {
                        let mut restored = node.form.clone();
                        restored.replace_range(at..at + infix.len(), liquid);
                        push(
                            &mut queue,
                            &mut visited,
                            Candidate {
                                form: restored,
                                infix_slot: slot + 1,
                                ..node.clone()
                            },
                        );
                    }
                }
            }
        }

        // Suffix phases, outermost morphemes first.
        for (phase, suffixes) in DECONJ_SUFFIX_PHASES.iter().enumerate() {
            if phase < node.suffix_phase {
                continue;
            }
            for suffix in *suffixes {
                let Some(rest) = node.form.strip_suffix(suffix) else {
                    continue;
                };
                push(
                    &mut queue,
                    &mut visited,
                    Candidate {
                        form: rest.to_string(),
                        prefix_phase: node.prefix_phase,
                        infix_slot: node.infix_slot,
                        suffix_phase: phase,
                        lenition_consumed: node.lenition_consumed,
                    },
                );
                // Stripping the genitive may undo vowel harmony or the -ia
                // collapse; restore the plausible dictionary-final vowels.
                if *suffix == "yä" || *suffix == "ä" {
                    for variant in restore_final_vowel(rest) {
                        push(
                            &mut queue,
                            &mut visited,
                            Candidate {
                                form: variant,
                                prefix_phase: node.prefix_phase,
                                infix_slot: node.infix_slot,
                                suffix_phase: phase,
                                lenition_consumed: node.lenition_consumed,
                            },
                        );
                    }
                }
            }
        }
    }

    // Irregular pronoun case stems map back to their citation forms.
    let restored: Vec<String> = visited
        .iter()
        .filter_map(|form| {
            STEM_OVERRIDES
                .iter()
                .find(|(_, stem)| form == stem)
                .map(|(citation, _)| (*citation).to_string())
        })
        .collect();
    visited.extend(restored);

    visited.remove(surface);
    let mut out: Vec<String> = visited.into_iter().collect();
    out.sort_unstable();
    out
}

/// Stems exposed by removing an e-final prefix may have lost their own
/// leading `e` to vowel elision; both readings are reachable. The glottal
/// variant (`me'eveng` -> `meveng`) falls out of the unlenition fan-out on
/// the restored stem. Lexical prefix+stem fusions map straight back to
/// their citation forms.
fn restore_elided_vowel(prefix: &str, rest: &str) -> Vec<String> {
    let mut out = vec![rest.to_string()];
    if prefix.ends_with('e') && !rest.starts_with('e') {
        out.push(format!("e{rest}"));
    }
    for (citation, fused_prefix, reduced) in PREFIX_STEM_EXCEPTIONS {
        if prefix == *fused_prefix && rest == *reduced {
            out.push((*citation).to_string());
        }
    }
    out
}

/// Inverse of the genitive stem rewrites: `nge` may be `nga` or `ngo`,
/// `soai` may be `soaia`.
fn restore_final_vowel(stem: &str) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(body) = stem.strip_suffix('e') {
        out.push(format!("{body}a"));
        out.push(format!("{body}o"));
    } else if stem.ends_with('i') {
        out.push(format!("{stem}a"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_contains_the_input() {
        let out = deconjugate("ikranìl");
        assert!(!out.contains(&"ikranìl".to_string()));
    }

    #[test]
    fn empty_and_tiny_inputs_yield_nothing() {
        assert!(deconjugate("").is_empty());
        assert!(deconjugate("a").is_empty());
    }

    #[test]
    fn single_case_suffix() {
        let out = deconjugate("ikranìl");
        assert!(out.contains(&"ikran".to_string()));
    }

    #[test]
    fn stacked_suffixes_yield_both_strip_depths() {
        let out = deconjugate("ikrantsyìpìl");
        assert!(out.contains(&"ikrantsyìp".to_string()));
        assert!(out.contains(&"ikran".to_string()));
    }

    #[test]
    fn leniting_prefix_fans_out_to_unlenited_roots() {
        let out = deconjugate("ayhelku");
        assert!(out.contains(&"helku".to_string()));
        assert!(out.contains(&"kelku".to_string()));
    }

    #[test]
    fn bare_lenited_form_is_unlenited_in_place() {
        let out = deconjugate("helku");
        assert!(out.contains(&"kelku".to_string()));
    }

    #[test]
    fn elided_stem_vowel_restored_after_dual() {
        let out = deconjugate("meveng");
        assert!(out.contains(&"eveng".to_string()));
        assert!(out.contains(&"'eveng".to_string()));
    }

    #[test]
    fn glottal_stop_restored_after_plural() {
        let out = deconjugate("ayeveng");
        assert!(out.contains(&"'eveng".to_string()));
    }

    #[test]
    fn digraph_start_not_treated_as_lenition() {
        let out = deconjugate("tsamsiyu");
        assert!(!out.iter().any(|w| w.starts_with("txsam")));
    }

    #[test]
    fn fused_determiner_plural_stripped_whole() {
        let out = deconjugate("fayhelku");
        assert!(out.contains(&"helku".to_string()));
        assert!(out.contains(&"kelku".to_string()));
    }

    #[test]
    fn genitive_strip_restores_stem_vowel() {
        let out = deconjugate("ngeyä");
        assert!(out.contains(&"nga".to_string()));
    }

    #[test]
    fn ia_genitive_restored() {
        let out = deconjugate("soaiä");
        assert!(out.contains(&"soaia".to_string()));
    }

    #[test]
    fn attributive_marker_stripped_from_either_edge() {
        assert!(deconjugate("alor").contains(&"lor".to_string()));
        assert!(deconjugate("lora").contains(&"lor".to_string()));
    }

    #[test]
    fn derivation_suffixes_stripped() {
        assert!(deconjugate("tarontswo").contains(&"taron".to_string()));
        assert!(deconjugate("taronyu").contains(&"taron".to_string()));
    }

    #[test]
    fn irregular_pronoun_stem_maps_to_citation() {
        let out = deconjugate("oengal");
        assert!(out.contains(&"oenga".to_string()));
        assert!(out.contains(&"oeng".to_string()));
    }

    #[test]
    fn agent_suffix_stripped() {
        let out = deconjugate("taronyu");
        assert!(out.contains(&"taron".to_string()));
    }

    #[test]
    fn infix_removal_reaches_the_root() {
        assert!(deconjugate("tayaron").contains(&"taron".to_string()));
        assert!(deconjugate("tusaron").contains(&"taron".to_string()));
        assert!(deconjugate("soli").contains(&"si".to_string()));
    }

    #[test]
    fn three_stacked_infixes() {
        let out = deconjugate("teykìyevareion");
        assert!(out.contains(&"taron".to_string()));
    }

    #[test]
    fn geminate_liquid_restored_behind_perfective() {
        let out = deconjugate("poltxe");
        assert!(out.contains(&"plltxe".to_string()));
    }

    #[test]
    fn each_infix_slot_fills_at_most_once() {
        // Two slot-1 morphemes never come off the same path; "ayay" loses
        // one "ay" per slot cursor, and the remainder only through slot 2+.
        let out = deconjugate("tayayron");
        assert!(out.contains(&"tayron".to_string()));
        assert!(!out.contains(&"tron".to_string()));
    }

    #[test]
    fn fused_kind_prefix_exception() {
        assert!(deconjugate("fneu").contains(&"'u".to_string()));
    }

    #[test]
    fn kind_prefix_strips_repeatedly() {
        let out = deconjugate("fnefneikran");
        assert!(out.contains(&"fneikran".to_string()));
        assert!(out.contains(&"ikran".to_string()));
    }

    #[test]
    fn deterministic_and_finite() {
        let a = deconjugate("tsayfnetaronyutsyìpìlsì");
        let b = deconjugate("tsayfnetaronyutsyìpìlsì");
        assert_eq!(a, b);
        assert!(a.len() < MAX_NODES);
    }

    #[test]
    fn later_phase_does_not_reopen_earlier_one() {
        // After the diminutive (a stem-type suffix, phase 3) is removed, a
        // case ending (phase 1) on the remainder is out of reach.
        let out = deconjugate("ikranìltsyìp");
        assert!(out.contains(&"ikranìl".to_string()));
        assert!(!out.contains(&"ikran".to_string()));
    }
}
