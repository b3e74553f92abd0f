use crate::matching::{Matcher, Score};

/// Weight of every candidate character inside the matched span that the
/// query did not use. Heavier than [`START_PENALTY`] so looseness always
/// costs more than lateness.
pub const GAP_PENALTY: Score = 10;

/// Weight of the position of the first matched character.
pub const START_PENALTY: Score = 1;

/// Case-folded subsequence matcher.
///
/// A query matches a candidate when every query character appears in the
/// candidate in query order, not necessarily contiguously. The score is
/// `gap * GAP_PENALTY + first * START_PENALTY`, where `gap` counts the
/// unmatched candidate characters inside the matched span and `first` is
/// the index of the first matched character. An exact prefix scores 0,
/// the best possible.
pub struct SubsequenceMatcher;

impl SubsequenceMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SubsequenceMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for SubsequenceMatcher {
    fn score(&self, query: &str, candidate: &str) -> Option<Score> {
        let query = query.to_lowercase();
        let candidate = candidate.to_lowercase();
        score_folded(&query, &candidate)
    }

    fn name(&self) -> &str {
        "subsequence"
    }
}

/// Single forward scan: every candidate character is visited once, and the
/// query cursor only ever advances.
fn score_folded(query: &str, candidate: &str) -> Option<Score> {
    let mut remaining = query.chars();
    // An empty query is rejected upstream; treat it as no match here too.
    let mut wanted = remaining.next()?;

    let mut matched: usize = 0;
    let mut first: usize = 0;

    for (position, c) in candidate.chars().enumerate() {
        if c != wanted {
            continue;
        }
        if matched == 0 {
            first = position;
        }
        matched += 1;
        match remaining.next() {
            Some(next) => wanted = next,
            None => {
                let span = position - first + 1;
                let gap = (span - matched) as Score;
                return Some(gap * GAP_PENALTY + first as Score * START_PENALTY);
            }
        }
    }

    // Candidate ran out with query characters still unmatched.
    None
}
