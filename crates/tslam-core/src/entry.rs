// Dictionary entry types and part-of-speech classification.

use serde::{Deserialize, Serialize};

/// Broad part-of-speech class used to select affix patterns.
///
/// The dictionary stores fine-grained tag strings ("n.", "vtr.", "vin.",
/// "adj.", ...); the morphology engine only distinguishes these classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosClass {
    /// Common noun, including proper nouns.
    Noun,
    /// Personal and demonstrative pronouns. Take the noun case suffixes
    /// plus a few pronoun-only irregular forms.
    Pronoun,
    /// Any verb class (vtr., vin., vim., vtrm., v.). Takes infixes.
    Verb,
    /// Adjective. Takes the attributive marker on either edge.
    Adjective,
    /// Adverb, particle, adposition, conjunction, numeral, interjection.
    /// These inflect only marginally and get no affix patterns.
    Other,
}

impl PosClass {
    /// Classify a raw dictionary part-of-speech tag.
    ///
    /// Tags may carry several comma-separated values ("n., adv."); the first
    /// one wins, matching how the dictionary orders primary senses.
    pub fn from_tag(tag: &str) -> Self {
        let first = tag.split(',').next().unwrap_or(tag).trim();
        if first.starts_with('v') || first == "aux." {
            PosClass::Verb
        } else if first == "pn." || first == "dem." {
            PosClass::Pronoun
        } else if first.starts_with("adj") {
            PosClass::Adjective
        } else if first == "n." || first.starts_with("prop.n") {
            PosClass::Noun
        } else {
            PosClass::Other
        }
    }

    /// Whether this class accepts the verbal infix slots.
    pub fn takes_infixes(self) -> bool {
        self == PosClass::Verb
    }

    /// Whether this class takes the nominal case/determiner suffix set.
    pub fn takes_noun_suffixes(self) -> bool {
        matches!(self, PosClass::Noun | PosClass::Pronoun)
    }
}

/// One immutable dictionary row.
///
/// Created once at dictionary load and only ever borrowed by the engine.
/// Analyses attach their affix bookkeeping to a *clone* of the entry, never
/// to the shared row itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadwordEntry {
    /// Unique dictionary id.
    pub id: u32,

    /// Citation form as printed in the dictionary, lowercase.
    pub word: String,

    /// Raw part-of-speech tag, e.g. "n.", "vtr.", "adj.".
    pub pos: String,

    /// Citation form with the verbal infix slots marked, e.g.
    /// `t<0><1>ar<2>on` for `taron`. Empty for words that take no infixes.
    #[serde(default)]
    pub infix_template: String,

    /// Primary gloss. Opaque to the engine.
    #[serde(default)]
    pub gloss: String,

    /// Extra surface forms under which this entry should be indexed
    /// (pre-expanded common inflections). Opaque to the engine; the
    /// dictionary index consumes them at load time.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl HeadwordEntry {
    /// Broad class derived from the raw tag.
    pub fn pos_class(&self) -> PosClass {
        PosClass::from_tag(&self.pos)
    }

    /// Whether the entry carries a usable infix template (all three slots).
    pub fn has_infix_template(&self) -> bool {
        self.infix_template.contains("<0>")
            && self.infix_template.contains("<1>")
            && self.infix_template.contains("<2>")
    }
}
