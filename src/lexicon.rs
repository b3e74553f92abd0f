use crate::core::DictEntry;
use crate::error::{DictEngineError, Result};

/// Immutable position-indexed dictionary: `keys()[i]` is the search key
/// for `entries()[i]`.
///
/// Built once before queries are served and never mutated afterwards, so
/// concurrent searches share it without coordination.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<DictEntry>,
    keys: Vec<String>,
}

impl Lexicon {
    /// Build from an ordered entry sequence.
    ///
    /// Fails with `EmptyLexicon` when given zero entries; callers that
    /// want to keep serving anyway can fall back to [`Lexicon::empty`].
    pub fn build(entries: Vec<DictEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(DictEngineError::EmptyLexicon);
        }
        let keys = entries.iter().map(|entry| entry.word.clone()).collect();
        Ok(Self { entries, keys })
    }

    /// A lexicon with no entries; every search over it finds nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Search key at `index`. An out-of-range index means a ranked result
    /// pointed outside the lexicon, which is an invariant violation.
    pub fn key_at(&self, index: usize) -> Result<&str> {
        self.keys
            .get(index)
            .map(String::as_str)
            .ok_or(DictEngineError::InternalConsistency {
                index,
                len: self.keys.len(),
            })
    }

    /// Full entry at `index`; same bounds contract as [`Lexicon::key_at`].
    pub fn entry_at(&self, index: usize) -> Result<&DictEntry> {
        self.entries
            .get(index)
            .ok_or(DictEngineError::InternalConsistency {
                index,
                len: self.entries.len(),
            })
    }

    /// All search keys, in entry order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// All entries, in entry order
    pub fn entries(&self) -> &[DictEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_keys_follow_entries() {
        let lexicon = Lexicon::build(vec![
            DictEntry::new("राम"),
            DictEntry::new("नमस्ते"),
        ])
        .unwrap();

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.key_at(0).unwrap(), "राम");
        assert_eq!(lexicon.key_at(1).unwrap(), "नमस्ते");
        assert_eq!(lexicon.entry_at(1).unwrap().word, "नमस्ते");
    }

    #[test]
    fn test_build_rejects_zero_entries() {
        let result = Lexicon::build(Vec::new());
        assert!(matches!(result, Err(DictEngineError::EmptyLexicon)));
    }

    #[test]
    fn test_empty_lexicon_is_searchable() {
        let lexicon = Lexicon::empty();
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.len(), 0);
        assert!(lexicon.keys().is_empty());
    }

    #[test]
    fn test_out_of_range_index_is_consistency_error() {
        let lexicon = Lexicon::build(vec![DictEntry::new("क")]).unwrap();
        match lexicon.entry_at(5) {
            Err(DictEngineError::InternalConsistency { index, len }) => {
                assert_eq!(index, 5);
                assert_eq!(len, 1);
            }
            other => panic!("expected consistency error, got {:?}", other),
        }
    }
}
