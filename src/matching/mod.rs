pub mod subsequence;

pub use subsequence::SubsequenceMatcher;

/// Match score: lower is a tighter, earlier match. 0 is an exact prefix.
pub type Score = i64;

/// Trait for query-against-key matching implementations
pub trait Matcher: Send + Sync {
    /// Score one candidate against the query, `None` when it does not match.
    ///
    /// Pure: identical inputs always produce the identical outcome.
    fn score(&self, query: &str, candidate: &str) -> Option<Score>;

    /// Get matcher name for logging
    fn name(&self) -> &str;
}
