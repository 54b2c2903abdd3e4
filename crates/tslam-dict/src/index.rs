// The exact-match dictionary index.
//
// One index value owns all loaded headword entries plus per-dialect maps
// from normalized surface string to entry positions. The value has an
// explicit lifecycle (load, reload, clear) and is owned by the caller --
// typically behind the handle's lock -- rather than living in ambient
// global state.

use hashbrown::HashMap;
use tslam_core::entry::HeadwordEntry;

use crate::DictError;
use crate::dialect::{Dialect, to_reef};

/// Exact-match maps over headword surface forms, one per dialect variant.
#[derive(Debug, Default)]
pub struct DictionaryIndex {
    entries: Vec<HeadwordEntry>,
    forest: HashMap<String, Vec<usize>>,
    reef: HashMap<String, Vec<usize>>,
}

impl DictionaryIndex {
    /// An index with no entries. Lookups succeed and return nothing;
    /// the orchestrator treats an empty index as unavailable.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an index from JSON dictionary data: an array of entry rows.
    pub fn from_json(data: &str) -> Result<Self, DictError> {
        let entries: Vec<HeadwordEntry> = serde_json::from_str(data)?;
        Ok(Self::from_entries(entries))
    }

    /// Build an index from already-materialized entries.
    pub fn from_entries(entries: Vec<HeadwordEntry>) -> Self {
        let mut index = Self {
            entries,
            forest: HashMap::new(),
            reef: HashMap::new(),
        };
        for pos in 0..index.entries.len() {
            let mut keys = vec![index.entries[pos].word.to_lowercase()];
            for alias in &index.entries[pos].aliases {
                keys.push(alias.to_lowercase());
            }
            for key in keys {
                index.reef.entry(to_reef(&key)).or_default().push(pos);
                index.forest.entry(key).or_default().push(pos);
            }
        }
        index
    }

    /// Replace the loaded dictionary with freshly parsed data.
    pub fn reload(&mut self, data: &str) -> Result<(), DictError> {
        *self = Self::from_json(data)?;
        Ok(())
    }

    /// Drop all loaded entries.
    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    /// Exact lookup of a normalized token in one dialect variant.
    /// Returns the matching entries in load order; empty when unknown.
    pub fn lookup(&self, dialect: Dialect, token: &str) -> Vec<&HeadwordEntry> {
        let map = match dialect {
            Dialect::Forest => &self.forest,
            Dialect::Reef => &self.reef,
        };
        map.get(token)
            .map(|ids| ids.iter().map(|&i| &self.entries[i]).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
