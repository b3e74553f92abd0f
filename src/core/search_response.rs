use serde::{Deserialize, Serialize};

use crate::core::DictEntry;
use crate::matching::Score;

/// One ranked hit: a dictionary entry and the score its key matched with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Match score, lower is better (0 is an exact prefix)
    pub score: Score,

    /// The matched entry
    pub entry: DictEntry,
}

/// Search response with ranked hits and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query as received, after trimming
    pub query: String,

    /// The query actually matched against keys, after transliteration
    pub matched_query: String,

    /// Ranked hits, best first, at most the requested limit
    #[serde(default)]
    pub hits: Vec<SearchHit>,

    /// Matches found before truncation
    pub total_matches: usize,

    /// Search latency in milliseconds
    pub latency_ms: f64,

    /// Matcher that produced the scores
    pub matcher: String,
}

impl SearchResponse {
    /// Whether the search produced no hits
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// The best hit, if any
    pub fn best(&self) -> Option<&SearchHit> {
        self.hits.first()
    }

    /// Head-words of the hits, in rank order
    pub fn words(&self) -> Vec<&str> {
        self.hits.iter().map(|hit| hit.entry.word.as_str()).collect()
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        format!(
            "{:?} -> {} of {} matches in {:.2}ms [{}]",
            self.query,
            self.hits.len(),
            self.total_matches,
            self.latency_ms,
            self.matcher
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with(words: &[&str]) -> SearchResponse {
        SearchResponse {
            query: "q".to_string(),
            matched_query: "q".to_string(),
            hits: words
                .iter()
                .enumerate()
                .map(|(i, word)| SearchHit {
                    score: i as Score,
                    entry: DictEntry::new(*word),
                })
                .collect(),
            total_matches: words.len(),
            latency_ms: 0.1,
            matcher: "subsequence".to_string(),
        }
    }

    #[test]
    fn test_best_is_first_hit() {
        let response = response_with(&["राम", "रमाइलो"]);
        assert_eq!(response.best().unwrap().entry.word, "राम");
        assert!(!response.is_empty());
    }

    #[test]
    fn test_words_in_rank_order() {
        let response = response_with(&["क", "ख", "ग"]);
        assert_eq!(response.words(), vec!["क", "ख", "ग"]);
    }

    #[test]
    fn test_empty_response() {
        let response = response_with(&[]);
        assert!(response.is_empty());
        assert!(response.best().is_none());
    }
}
