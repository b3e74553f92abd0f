//! # Sabdakosh Engine
//!
//! Fuzzy search engine for a Nepali dictionary:
//! - Immutable lexicon built once at startup from the dictionary JSON
//! - Case-folded subsequence matching with gap and position scoring
//! - Deterministic ranking with bounded result selection
//! - Romanised-input conversion (Latin to Devanagari)
//! - Multiple interfaces: Rust library, HTTP API, CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sabdakosh_engine::{DictEngine, SearchQuery};
//!
//! fn main() -> anyhow::Result<()> {
//!     let engine = DictEngine::from_path("sabdakosh.json")?;
//!
//!     let results = engine.search(SearchQuery::new("guithe"))?;
//!     for hit in &results.hits {
//!         println!("{} (score {})", hit.entry.word, hit.score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod loader;
pub mod matching;
pub mod ranking;
pub mod render;
pub mod translit;

// Re-export primary types
pub use crate::core::{Definition, DictEntry, SearchHit, SearchResponse};
pub use crate::engine::{DictEngine, SearchQuery};
pub use crate::error::{DictEngineError, Result};
pub use crate::lexicon::Lexicon;
pub use crate::matching::{Matcher, Score, SubsequenceMatcher};
pub use crate::ranking::DEFAULT_RESULT_LIMIT;
pub use crate::translit::Romanizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
