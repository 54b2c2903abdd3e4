// Affix bookkeeping: the per-analysis record of applied morphemes and
// the resolved-word value returned to callers.

use crate::entry::HeadwordEntry;

/// One word-initial consonant mutation event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lenition {
    /// Cluster as it appears in the citation form.
    pub from: String,
    /// Cluster (possibly empty) as it appears on the surface.
    pub to: String,
}

impl Lenition {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl std::fmt::Display for Lenition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\u{2192}{}", self.from, self.to)
    }
}

/// Mutable record of every morpheme applied during one reconstruction
/// attempt.
///
/// Created fresh per attempt. An empty record on a successful analysis means
/// the surface form equals the citation form exactly. Lenition is recorded
/// at most once per word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffixRecord {
    /// Prefixes in surface order (outermost first).
    pub prefixes: Vec<String>,
    /// Infixes in slot order (0, 1, 2).
    pub infixes: Vec<String>,
    /// Suffixes in surface order (innermost first).
    pub suffixes: Vec<String>,
    /// The single lenition event, if any.
    pub lenition: Option<Lenition>,
}

impl AffixRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no morpheme of any kind has been recorded.
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
            && self.infixes.is_empty()
            && self.suffixes.is_empty()
            && self.lenition.is_none()
    }

    /// Record a lenition event. A second call is a no-op: lenition can
    /// only be licensed once per word.
    pub fn record_lenition(&mut self, from: impl Into<String>, to: impl Into<String>) {
        if self.lenition.is_none() {
            self.lenition = Some(Lenition::new(from, to));
        }
    }

    /// Whether the record marks a participial verb reading
    /// (active or passive participle infix in slot 1).
    pub fn is_participle(&self) -> bool {
        self.infixes.iter().any(|i| i == "us" || i == "awn")
    }

    /// Whether the record marks an ability-adjective reading.
    pub fn is_ability_form(&self) -> bool {
        self.prefixes.iter().any(|p| p == "tsuk" || p == "ketsuk")
    }
}

/// A headword plus the affix chain that maps its citation form onto one
/// observed surface string.
///
/// Owns a clone of the dictionary entry; the shared dictionary row is never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWord {
    pub entry: HeadwordEntry,
    pub affixes: AffixRecord,
    /// The literal surface form this analysis matched.
    pub surface: String,
}

impl ResolvedWord {
    pub fn new(entry: &HeadwordEntry, affixes: AffixRecord, surface: impl Into<String>) -> Self {
        Self {
            entry: entry.clone(),
            affixes,
            surface: surface.into(),
        }
    }

    /// Synthetic result row echoing the query substring consumed for one
    /// token. Always the first row of a per-token result list.
    pub fn echo(surface: impl Into<String>) -> Self {
        let surface = surface.into();
        Self {
            entry: HeadwordEntry {
                id: 0,
                word: surface.clone(),
                pos: String::new(),
                infix_template: String::new(),
                gloss: String::new(),
                aliases: Vec::new(),
            },
            affixes: AffixRecord::new(),
            surface,
        }
    }

    /// Whether this is the synthetic query-echo row.
    pub fn is_echo(&self) -> bool {
        self.entry.id == 0
    }

    /// Identity used for result deduplication: two analyses are the same
    /// result when they name the same entry with the same affix chain.
    pub fn dedup_key(&self) -> (u32, &[String], &[String], &[String], Option<&Lenition>) {
        (
            self.entry.id,
            &self.affixes.prefixes,
            &self.affixes.infixes,
            &self.affixes.suffixes,
            self.affixes.lenition.as_ref(),
        )
    }
}
