use serde::{Deserialize, Serialize};

/// One sense group under a head-word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Grammatical tag, e.g. "ना" (may be empty)
    #[serde(default)]
    pub grammar: String,

    /// Etymology note (may be empty)
    #[serde(default)]
    pub etymology: String,

    /// Numbered meanings in presentation order
    #[serde(default)]
    pub senses: Vec<String>,
}

/// One dictionary entry: a head-word and its definitions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    /// Head-word in Devanagari, the primary search key
    #[serde(default)]
    pub word: String,

    /// Definitions in presentation order
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

impl Definition {
    /// Create a definition with a grammar tag and no senses yet
    pub fn new(grammar: impl Into<String>) -> Self {
        Self {
            grammar: grammar.into(),
            etymology: String::new(),
            senses: Vec::new(),
        }
    }

    /// Add one sense
    pub fn with_sense(mut self, sense: impl Into<String>) -> Self {
        self.senses.push(sense.into());
        self
    }
}

impl DictEntry {
    /// Create an entry with just a head-word
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definitions: Vec::new(),
        }
    }

    /// Add one definition
    pub fn with_definition(mut self, definition: Definition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Number of senses across all definitions
    pub fn sense_count(&self) -> usize {
        self.definitions.iter().map(|d| d.senses.len()).sum()
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
