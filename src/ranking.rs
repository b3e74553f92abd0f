//! Ranking and selection: run the matcher over every lexicon key, order
//! the matches, and keep a bounded number of the best.

use crate::core::DictEntry;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::matching::{Matcher, Score};

/// Default number of entries a search returns
pub const DEFAULT_RESULT_LIMIT: usize = 25;

/// One matched lexicon position, transient to a single query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCandidate {
    pub entry_index: usize,
    pub score: Score,
}

/// A ranked candidate resolved back to its lexicon entry
#[derive(Debug, Clone, Copy)]
pub struct RankedEntry<'a> {
    pub entry: &'a DictEntry,
    pub score: Score,
}

/// Collect every key the query matches, in lexicon order.
pub fn rank(matcher: &dyn Matcher, lexicon: &Lexicon, query: &str) -> Vec<MatchCandidate> {
    lexicon
        .keys()
        .iter()
        .enumerate()
        .filter_map(|(entry_index, key)| {
            matcher
                .score(query, key)
                .map(|score| MatchCandidate { entry_index, score })
        })
        .collect()
}

/// Order candidates and keep the best `limit`, resolving each survivor to
/// its entry.
///
/// Sorting by `(score, entry_index)` keeps ranking deterministic: equal
/// scores resolve to lexicon order. Truncation happens after the sort,
/// so the survivors are the best-scored matches, not the first found.
pub fn select(
    lexicon: &Lexicon,
    mut candidates: Vec<MatchCandidate>,
    limit: usize,
) -> Result<Vec<RankedEntry<'_>>> {
    candidates.sort_unstable_by_key(|candidate| (candidate.score, candidate.entry_index));
    candidates.truncate(limit);

    candidates
        .into_iter()
        .map(|candidate| {
            lexicon.entry_at(candidate.entry_index).map(|entry| RankedEntry {
                entry,
                score: candidate.score,
            })
        })
        .collect()
}

/// Full search over a lexicon: match every key, rank, truncate, resolve.
///
/// An empty query is a normal outcome and yields no results.
pub fn search<'a>(
    matcher: &dyn Matcher,
    lexicon: &'a Lexicon,
    query: &str,
    limit: usize,
) -> Result<Vec<RankedEntry<'a>>> {
    if query.is_empty() {
        return Ok(Vec::new());
    }
    select(lexicon, rank(matcher, lexicon, query), limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::SubsequenceMatcher;

    fn lexicon_of(words: &[&str]) -> Lexicon {
        let entries = words.iter().map(|word| DictEntry::new(*word)).collect();
        Lexicon::build(entries).unwrap()
    }

    #[test]
    fn test_search_orders_by_score_ascending() {
        let matcher = SubsequenceMatcher::new();
        // "q" first appears at offsets 2, 0, 1.
        let lexicon = lexicon_of(&["xxq", "qxx", "xqx"]);

        let ranked = search(&matcher, &lexicon, "q", 25).unwrap();

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].entry.word, "qxx");
        assert_eq!(ranked[1].entry.word, "xqx");
        assert_eq!(ranked[2].entry.word, "xxq");
        assert!(ranked[0].score < ranked[1].score);
    }

    #[test]
    fn test_equal_scores_keep_lexicon_order() {
        let matcher = SubsequenceMatcher::new();
        let lexicon = lexicon_of(&["ab", "ab", "ab"]);

        let ranked = search(&matcher, &lexicon, "ab", 25).unwrap();

        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|r| r.score == 0));
        // Ties resolve to original positions, so the resolved entries are
        // the lexicon's own in order.
        for (i, r) in ranked.iter().enumerate() {
            assert!(std::ptr::eq(r.entry, lexicon.entry_at(i).unwrap()));
        }
    }

    #[test]
    fn test_truncation_keeps_best_not_first() {
        let matcher = SubsequenceMatcher::new();
        // Worst scores first in lexicon order: key i starts with 29-i
        // filler characters, so its score is 29-i.
        let words: Vec<String> = (0..30)
            .map(|i| format!("{}q", "x".repeat(29 - i)))
            .collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let lexicon = lexicon_of(&refs);

        let ranked = search(&matcher, &lexicon, "q", 25).unwrap();

        assert_eq!(ranked.len(), 25);
        for (rank_position, r) in ranked.iter().enumerate() {
            assert_eq!(r.score, rank_position as Score);
        }
    }

    #[test]
    fn test_limit_bounds_results() {
        let matcher = SubsequenceMatcher::new();
        let lexicon = lexicon_of(&["aa", "ab", "ac", "ad"]);

        for limit in 0..6 {
            let ranked = search(&matcher, &lexicon, "a", limit).unwrap();
            assert!(ranked.len() <= limit);
            assert_eq!(ranked.len(), limit.min(4));
        }
    }

    #[test]
    fn test_empty_query_yields_nothing() {
        let matcher = SubsequenceMatcher::new();
        let lexicon = lexicon_of(&["a", "b"]);

        let ranked = search(&matcher, &lexicon, "", 25).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_unmatched_query_yields_nothing() {
        let matcher = SubsequenceMatcher::new();
        let lexicon = lexicon_of(&["apple", "banana"]);

        let ranked = search(&matcher, &lexicon, "zzz", 25).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_rank_preserves_lexicon_order() {
        let matcher = SubsequenceMatcher::new();
        let lexicon = lexicon_of(&["ba", "xa", "nope"]);

        let candidates = rank(&matcher, &lexicon, "a");

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].entry_index, 0);
        assert_eq!(candidates[1].entry_index, 1);
    }
}
