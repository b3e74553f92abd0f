use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::core::{SearchHit, SearchResponse};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::loader;
use crate::matching::{Matcher, SubsequenceMatcher};
use crate::ranking::{self, DEFAULT_RESULT_LIMIT};
use crate::translit::Romanizer;

/// Main dictionary search orchestrator
pub struct DictEngine {
    lexicon: Arc<Lexicon>,
    matcher: Arc<dyn Matcher>,
    romanizer: Romanizer,
}

/// Search query parameters
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub query: String,
    pub limit: usize,
    pub romanize: bool,
}

impl SearchQuery {
    /// A query with the default limit and romanised-input conversion on
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: DEFAULT_RESULT_LIMIT,
            romanize: true,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl DictEngine {
    /// Create an engine over an already-built lexicon with the default
    /// subsequence matcher
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_matcher(lexicon, Arc::new(SubsequenceMatcher::new()))
    }

    /// Create an engine with a caller-supplied matcher
    pub fn with_matcher(lexicon: Lexicon, matcher: Arc<dyn Matcher>) -> Self {
        tracing::info!(
            "Lexicon ready: {} entries, {} matcher",
            lexicon.len(),
            matcher.name()
        );
        Self {
            lexicon: Arc::new(lexicon),
            matcher,
            romanizer: Romanizer::new(),
        }
    }

    /// Load the dictionary JSON at `path` and build an engine over it
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let entries = loader::load_path(path)?;
        Ok(Self::new(Lexicon::build(entries)?))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Run one search: trim, convert romanised input unless asked not to,
    /// rank every key, and keep the best `limit` hits.
    ///
    /// An empty query after trimming, or a query matching nothing, is a
    /// normal outcome with zero hits, not an error.
    pub fn search(&self, query: SearchQuery) -> Result<SearchResponse> {
        let start = Instant::now();

        let trimmed = query.query.trim();
        if trimmed.is_empty() {
            return Ok(SearchResponse {
                query: String::new(),
                matched_query: String::new(),
                hits: Vec::new(),
                total_matches: 0,
                latency_ms: start.elapsed().as_secs_f64() * 1000.0,
                matcher: self.matcher.name().to_string(),
            });
        }

        let matched_query = if query.romanize {
            self.romanizer.transliterate(trimmed)
        } else {
            trimmed.to_string()
        };

        let candidates = ranking::rank(self.matcher.as_ref(), &self.lexicon, &matched_query);
        let total_matches = candidates.len();
        let ranked = ranking::select(&self.lexicon, candidates, query.limit)?;

        let hits: Vec<SearchHit> = ranked
            .into_iter()
            .map(|r| SearchHit {
                score: r.score,
                entry: r.entry.clone(),
            })
            .collect();

        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        Ok(SearchResponse {
            query: trimmed.to_string(),
            matched_query,
            hits,
            total_matches,
            latency_ms,
            matcher: self.matcher.name().to_string(),
        })
    }
}

/// Decode one URL query parameter value: `+` is a space, and percent
/// escapes must form valid UTF-8. The only failure mode is the
/// malformed-input error.
pub fn decode_query_param(value: &str) -> Result<String> {
    let value = value.replace('+', " ");
    Ok(urlencoding::decode(&value)?.into_owned())
}
