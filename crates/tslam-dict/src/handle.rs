// Owning handle over a loaded dictionary.
//
// The handle holds the index behind a read-write lock so that long-lived
// embedders can reload or clear the dictionary while lookups continue on
// other threads. Every public operation takes the lock for the duration of
// one call only.

use std::sync::RwLock;

use tslam_core::affix::{AffixRecord, ResolvedWord};
use tslam_core::entry::HeadwordEntry;

use crate::DictError;
use crate::index::DictionaryIndex;
use crate::multiword::MultiwordTable;
use crate::translate::{self, TranslateOptions};

/// A loaded dictionary plus the standard multiword table.
pub struct TslamHandle {
    index: RwLock<DictionaryIndex>,
    multiword: MultiwordTable,
}

impl TslamHandle {
    /// Create a handle with no dictionary loaded. Translation fails with
    /// [`DictError::Unavailable`] until [`reload`](Self::reload) succeeds.
    pub fn empty() -> Self {
        Self {
            index: RwLock::new(DictionaryIndex::empty()),
            multiword: MultiwordTable::standard(),
        }
    }

    /// Load a handle from dictionary JSON.
    pub fn from_json(json: &str) -> Result<Self, DictError> {
        Ok(Self {
            index: RwLock::new(DictionaryIndex::from_json(json)?),
            multiword: MultiwordTable::standard(),
        })
    }

    /// Resolve a query. See [`translate::translate`] for row semantics.
    pub fn translate(
        &self,
        query: &str,
        opts: &TranslateOptions,
    ) -> Result<Vec<Vec<ResolvedWord>>, DictError> {
        let index = self.index.read().map_err(|_| DictError::Unavailable)?;
        translate::translate(&index, &self.multiword, query, opts)
    }

    /// Replace the loaded dictionary wholesale. On parse failure the
    /// previous dictionary stays in place.
    pub fn reload(&self, json: &str) -> Result<(), DictError> {
        let fresh = DictionaryIndex::from_json(json)?;
        let mut index = self.index.write().map_err(|_| DictError::Unavailable)?;
        *index = fresh;
        Ok(())
    }

    /// Drop the loaded dictionary, returning the handle to its empty state.
    pub fn clear(&self) -> Result<(), DictError> {
        let mut index = self.index.write().map_err(|_| DictError::Unavailable)?;
        index.clear();
        Ok(())
    }

    /// Number of loaded headword entries.
    pub fn len(&self) -> usize {
        self.index.read().map(|ix| ix.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate that `target` is derivable from `entry` by legal affixation.
    pub fn reconstruct(&self, entry: &HeadwordEntry, target: &str) -> Option<AffixRecord> {
        tslam_morph::reconstruct(entry, target)
    }

    /// All candidate stems reachable by stripping affixes from `surface`.
    pub fn deconjugate(&self, surface: &str) -> Vec<String> {
        tslam_morph::deconjugate(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"[
        {"id": 1, "word": "kelku", "pos": "n.", "gloss": "home"},
        {"id": 2, "word": "taron", "pos": "vtr.", "infix_template": "t<0><1>ar<2>on", "gloss": "hunt"}
    ]"#;

    #[test]
    fn empty_handle_refuses_translation() {
        let handle = TslamHandle::empty();
        let err = handle
            .translate("kelku", &TranslateOptions::default())
            .unwrap_err();
        assert!(matches!(err, DictError::Unavailable));
    }

    #[test]
    fn reload_brings_handle_to_life() {
        let handle = TslamHandle::empty();
        handle.reload(FIXTURE).unwrap();
        assert_eq!(handle.len(), 2);
        let results = handle
            .translate("kelku", &TranslateOptions::default())
            .unwrap();
        assert_eq!(results[0].len(), 2);
    }

    #[test]
    fn failed_reload_keeps_previous_dictionary() {
        let handle = TslamHandle::from_json(FIXTURE).unwrap();
        assert!(handle.reload("not json").is_err());
        assert_eq!(handle.len(), 2);
    }

    #[test]
    fn clear_returns_to_empty_state() {
        let handle = TslamHandle::from_json(FIXTURE).unwrap();
        handle.clear().unwrap();
        assert!(handle.is_empty());
        assert!(
            handle
                .translate("kelku", &TranslateOptions::default())
                .is_err()
        );
    }

    #[test]
    fn morphology_passthroughs() {
        let handle = TslamHandle::from_json(FIXTURE).unwrap();
        assert!(handle.deconjugate("ayhelku").contains(&"kelku".to_string()));
        let entry = HeadwordEntry {
            id: 2,
            word: "taron".into(),
            pos: "vtr.".into(),
            infix_template: "t<0><1>ar<2>on".into(),
            gloss: "hunt".into(),
            aliases: Vec::new(),
        };
        let rec = handle.reconstruct(&entry, "tayaron").unwrap();
        assert_eq!(rec.infixes, vec!["ay"]);
    }
}
