use thiserror::Error;

/// Main error type for the dictionary engine
#[derive(Error, Debug)]
pub enum DictEngineError {
    /// Lexicon construction was handed zero entries
    #[error("Empty lexicon: no dictionary entries supplied")]
    EmptyLexicon,

    /// Query bytes that do not decode as UTF-8 text
    #[error("Malformed query: {0}")]
    MalformedInput(#[from] std::string::FromUtf8Error),

    /// An entry index escaped the lexicon bounds
    #[error("Internal consistency error: index {index} out of range for {len} entries")]
    InternalConsistency { index: usize, len: usize },

    /// Dictionary JSON errors
    #[error("Dictionary JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors while reading the dictionary
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DictEngineError>;
