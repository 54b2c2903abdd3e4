// Translation orchestration: one query string in, one result-row list per
// input token out.
//
// Per token the pipeline is: normalize, exact dictionary lookup with
// reconstruction re-validation, phonological plausibility guards,
// deconjugation fallback with dictionary re-lookup, idiom resolution, then
// deduplication and ordering. Every token yields at least one row: the
// synthetic echo of the query substring consumed.

use tslam_core::MAX_TOKEN_CHARS;
use tslam_core::affix::{AffixRecord, ResolvedWord};
use tslam_core::entry::PosClass;
use tslam_morph::{deconjugate, reconstruct};

use crate::DictError;
use crate::dialect::{Dialect, from_reef, to_reef};
use crate::index::DictionaryIndex;
use crate::multiword::{MultiwordTable, NEGATION_PARTICLES, NEGATION_STRENGTHENERS};

/// Options selecting how a query is resolved.
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Fall back to deconjugation when a token has no satisfactory
    /// exact-match resolution.
    pub allow_deconjugation: bool,
    /// Require an exact forest-dialect match; disables reef lookups.
    pub strict: bool,
    /// Which dialect variant of the index to consult.
    pub dialect: Dialect,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            allow_deconjugation: true,
            strict: false,
            dialect: Dialect::Forest,
        }
    }
}

/// Resolve a whitespace-delimited query against the dictionary.
///
/// Returns one result list per consumed token span. The first element of
/// each list is always the synthetic echo row; any further elements are
/// resolved headwords ordered alphabetically by citation form.
pub fn translate(
    index: &DictionaryIndex,
    multiword: &MultiwordTable,
    query: &str,
    opts: &TranslateOptions,
) -> Result<Vec<Vec<ResolvedWord>>, DictError> {
    if index.is_empty() {
        return Err(DictError::Unavailable);
    }
    let dialect = if opts.strict {
        Dialect::Forest
    } else {
        opts.dialect
    };

    let tokens: Vec<&str> = query.split_whitespace().collect();
    let mut results = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let raw = tokens[i];
        let norm = normalize(raw);
        if norm.is_empty() || norm.chars().count() > MAX_TOKEN_CHARS {
            // Malformed token: skipped, never fatal to the whole query.
            results.push(vec![ResolvedWord::echo(raw)]);
            i += 1;
            continue;
        }

        let rows = resolve_token(index, dialect, &norm, opts.allow_deconjugation);

        // Idiom resolution: a registered head greedily tries to consume the
        // following raw tokens as one of its follow-up sequences.
        let mut consumed = 1usize;
        let mut idiom_row: Option<ResolvedWord> = None;
        if let Some(seqs) = multiword.sequences(&norm) {
            for seq in seqs {
                let Some((n, companion)) = match_sequence(index, dialect, seq, &tokens[i + 1..])
                else {
                    continue;
                };
                let phrase = format!("{norm} {}", seq.join(" "));
                let entries = index.lookup(dialect, &phrase);
                let Some(entry) = entries.first() else {
                    continue;
                };
                // Verb-likeness gate: the realized phrase must contain a
                // finite-verb reading, either in the companion position
                // ("srung si") or in the head itself ("tìng mikyun").
                let last_expected = seq.last().map(String::as_str).unwrap_or("");
                let verb_like = finite_verb_reading(index, dialect, &companion, last_expected)
                    || rows.iter().any(|r| {
                        r.entry.pos_class() == PosClass::Verb
                            && !r.affixes.is_participle()
                            && !r.affixes.is_ability_form()
                    });
                if !verb_like {
                    continue;
                }
                let surface = tokens[i..i + 1 + n].join(" ");
                idiom_row = Some(ResolvedWord::new(entry, AffixRecord::new(), surface));
                consumed = 1 + n;
                break;
            }
        }

        let consumed_text = tokens[i..i + consumed].join(" ");
        results.push(assemble_rows(consumed_text, idiom_row, rows));
        i += consumed;
    }

    Ok(results)
}

/// Resolve one normalized token to dictionary candidates.
fn resolve_token(
    index: &DictionaryIndex,
    dialect: Dialect,
    token: &str,
    allow_deconjugation: bool,
) -> Vec<ResolvedWord> {
    let mut out: Vec<ResolvedWord> = Vec::new();

    let push = |out: &mut Vec<ResolvedWord>, rw: ResolvedWord| {
        if !out.iter().any(|held| held.dedup_key() == rw.dedup_key()) {
            out.push(rw);
        }
    };

    // An edge apostrophe may be quotation punctuation rather than a glottal
    // stop; the trimmed reading is only valid when no affix attaches at the
    // trimmed edge.
    let mut keys: Vec<(String, EdgeTrim)> = vec![(token.to_string(), EdgeTrim::Whole)];
    if let Some(rest) = token.strip_prefix('\'') {
        keys.push((rest.to_string(), EdgeTrim::Leading));
    }
    if let Some(rest) = token.strip_suffix('\'') {
        keys.push((rest.to_string(), EdgeTrim::Trailing));
    }

    for (key, trim) in &keys {
        for entry in index.lookup(dialect, key) {
            let target = match dialect {
                Dialect::Forest => key.clone(),
                Dialect::Reef => from_reef(key),
            };
            match reconstruct(entry, &target) {
                Some(rec) => {
                    if !trim.permits(&rec) {
                        continue;
                    }
                    push(&mut out, ResolvedWord::new(entry, rec, token));
                }
                None => {
                    // Pre-expanded index key (alias or reef spelling): trust
                    // the bare hit unless the vowel guard vetoes it.
                    if dialect == Dialect::Reef && to_reef(&entry.word.to_lowercase()) != *key {
                        continue;
                    }
                    if diacritic_mismatch(key, &entry.word) {
                        continue;
                    }
                    push(&mut out, ResolvedWord::new(entry, AffixRecord::new(), token));
                }
            }
        }
    }

    if out.is_empty() && allow_deconjugation {
        for candidate in deconjugate(token) {
            for entry in index.lookup(dialect, &candidate) {
                let target = match dialect {
                    Dialect::Forest => token.to_string(),
                    Dialect::Reef => from_reef(token),
                };
                if let Some(rec) = reconstruct(entry, &target) {
                    if diacritic_mismatch(token, &candidate) {
                        continue;
                    }
                    push(&mut out, ResolvedWord::new(entry, rec, token));
                }
            }
        }
    }

    out.sort_by(|a, b| {
        a.entry
            .word
            .cmp(&b.entry.word)
            .then_with(|| a.affixes.prefixes.cmp(&b.affixes.prefixes))
            .then_with(|| a.affixes.infixes.cmp(&b.affixes.infixes))
            .then_with(|| a.affixes.suffixes.cmp(&b.affixes.suffixes))
    });
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeTrim {
    Whole,
    Leading,
    Trailing,
}

impl EdgeTrim {
    /// A trimmed edge must be affix-free for the trimmed reading to hold.
    fn permits(self, rec: &AffixRecord) -> bool {
        match self {
            EdgeTrim::Whole => true,
            EdgeTrim::Leading => rec.prefixes.is_empty() && rec.lenition.is_none(),
            EdgeTrim::Trailing => rec.suffixes.is_empty(),
        }
    }
}

/// Match one idiom follow-up sequence against upcoming raw tokens.
///
/// Each expected token matches the next raw token literally, through the
/// token's own deconjugation, or by reconstructing the expected headword
/// into the token (infixed realizations like "soli" for "si"); a negation
/// particle may interpose before the companion, and an interposed "ke" may
/// itself be strengthened to "ke kawkrr" / "ke kaw'it", so one expected
/// token can consume up to three raw tokens. Returns the number of raw
/// tokens consumed and the normalized realization of the final expected
/// token.
fn match_sequence(
    index: &DictionaryIndex,
    dialect: Dialect,
    sequence: &[String],
    upcoming: &[&str],
) -> Option<(usize, String)> {
    let mut j = 0;
    let mut last = String::new();
    for expected in sequence {
        if j >= upcoming.len() {
            return None;
        }
        let tok = normalize(upcoming[j]);
        if matches_expected(index, dialect, &tok, expected) {
            last = tok;
            j += 1;
            continue;
        }
        if NEGATION_PARTICLES.contains(&tok.as_str()) {
            let mut k = j + 1;
            if tok == "ke"
                && k < upcoming.len()
                && NEGATION_STRENGTHENERS.contains(&normalize(upcoming[k]).as_str())
            {
                k += 1;
            }
            if k < upcoming.len() {
                let next = normalize(upcoming[k]);
                if matches_expected(index, dialect, &next, expected) {
                    last = next;
                    j = k + 1;
                    continue;
                }
            }
        }
        return None;
    }
    Some((j, last))
}

fn matches_expected(index: &DictionaryIndex, dialect: Dialect, token: &str, expected: &str) -> bool {
    if token == expected || deconjugate(token).iter().any(|c| c == expected) {
        return true;
    }
    let target = match dialect {
        Dialect::Forest => token.to_string(),
        Dialect::Reef => from_reef(token),
    };
    index
        .lookup(dialect, expected)
        .iter()
        .any(|e| reconstruct(e, &target).is_some())
}

/// Whether the realized companion token has a finite-verb reading under the
/// expected headword.
fn finite_verb_reading(
    index: &DictionaryIndex,
    dialect: Dialect,
    token: &str,
    expected: &str,
) -> bool {
    let target = match dialect {
        Dialect::Forest => token.to_string(),
        Dialect::Reef => from_reef(token),
    };
    index.lookup(dialect, expected).iter().any(|e| {
        e.pos_class() == PosClass::Verb
            && match reconstruct(e, &target) {
                Some(rec) => !rec.is_participle() && !rec.is_ability_form(),
                None => false,
            }
    })
}

/// Order and prepend the echo row for one consumed token span.
///
/// The idiom row is spliced in as the primary result; other rows are
/// alphabetized by citation form. When idiom resolution produced exactly
/// two candidate groups, the two are swapped so the idiom's own literal
/// row comes last.
fn assemble_rows(
    consumed_text: String,
    idiom_row: Option<ResolvedWord>,
    rows: Vec<ResolvedWord>,
) -> Vec<ResolvedWord> {
    let had_idiom = idiom_row.is_some();
    let mut body: Vec<ResolvedWord> = Vec::with_capacity(rows.len() + 1);
    if let Some(row) = idiom_row {
        body.push(row);
    }
    body.extend(rows);

    if had_idiom && body.len() == 2 {
        body.swap(0, 1);
    }

    let mut out = Vec::with_capacity(body.len() + 1);
    out.push(ResolvedWord::echo(consumed_text));
    out.extend(body);
    out
}

/// Normalize a raw token: lowercase, fold typographic apostrophes, and trim
/// surrounding punctuation. Word-internal letters and apostrophes survive.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .replace(['\u{2019}', '\u{2018}'], "'")
        .trim_matches(|c: char| !(c.is_ascii_alphabetic() || matches!(c, 'ä' | 'ì' | 'ù' | '\'')))
        .to_string()
}

/// True when `token` carries a diacritic vowel where `matched` has the
/// plain counterpart -- the token can then only come from a vowel-reduced
/// variant and must not be credited to this candidate.
fn diacritic_mismatch(token: &str, matched: &str) -> bool {
    let t: Vec<char> = token.chars().collect();
    let m: Vec<char> = matched.chars().collect();
    if t.len() != m.len() {
        return false;
    }
    let mut reduced = false;
    for (a, b) in t.iter().zip(m.iter()) {
        if a == b {
            continue;
        }
        match (a, b) {
            ('ä', 'a') | ('ì', 'i') | ('ù', 'u') => reduced = true,
            _ => return false,
        }
    }
    reduced
}
