//! Dictionary ingestion: reads the dictionary JSON and prepares entries
//! for lexicon construction.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::core::DictEntry;
use crate::error::Result;

/// Read a dictionary JSON array from `path`.
///
/// The file is the sabdakosh shape: a top-level array of entries with
/// `word` and `definitions` (each with `grammar`, `etymology`, `senses`).
/// Missing fields default to empty.
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<DictEntry>> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let entries: Vec<DictEntry> = serde_json::from_reader(reader)?;
    Ok(validate(entries))
}

/// Parse entries from an in-memory JSON string.
pub fn parse_entries(json: &str) -> Result<Vec<DictEntry>> {
    let entries: Vec<DictEntry> = serde_json::from_str(json)?;
    Ok(validate(entries))
}

/// The matcher assumes every key is a non-empty head-word; entries that
/// violate that are dropped here, at the boundary.
fn validate(entries: Vec<DictEntry>) -> Vec<DictEntry> {
    let before = entries.len();
    let entries: Vec<DictEntry> = entries
        .into_iter()
        .filter(|entry| !entry.word.is_empty())
        .collect();

    let dropped = before - entries.len();
    if dropped > 0 {
        tracing::warn!("Dropped {} entries with empty head-words", dropped);
    }

    entries
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"[
        {
            "word": "नमस्ते",
            "definitions": [
                {
                    "grammar": "ना",
                    "etymology": "सं",
                    "senses": ["अभिवादन गर्दा भनिने शब्द"]
                }
            ]
        },
        {"word": "राम", "definitions": []}
    ]"#;

    #[test]
    fn test_parse_sample_dictionary() {
        let entries = parse_entries(SAMPLE).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word, "नमस्ते");
        assert_eq!(entries[0].definitions[0].grammar, "ना");
        assert_eq!(entries[0].sense_count(), 1);
        assert!(entries[1].definitions.is_empty());
    }

    #[test]
    fn test_entries_without_head_words_are_dropped() {
        let entries = parse_entries(r#"[{"word": ""}, {"word": "क"}]"#).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "क");
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let result = parse_entries("not json");
        assert!(matches!(
            result,
            Err(crate::error::DictEngineError::Json(_))
        ));
    }

    #[test]
    fn test_load_path_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let entries = load_path(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].word, "राम");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_path("/nonexistent/sabdakosh.json");
        assert!(matches!(result, Err(crate::error::DictEngineError::Io(_))));
    }
}
