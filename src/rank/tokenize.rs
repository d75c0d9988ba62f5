//! Tokenization for the bag-of-words model.

use std::collections::BTreeSet;

use regex::Regex;

/// Default token pattern: runs of two or more Unicode word characters.
pub const DEFAULT_TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Splits text into normalized terms.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    lowercase: bool,
    stop_words: BTreeSet<String>,
}

impl Tokenizer {
    /// Create a tokenizer with the default pattern.
    pub fn new(lowercase: bool, stop_words: &BTreeSet<String>) -> Self {
        let stop_words = if lowercase {
            stop_words.iter().map(|w| w.to_lowercase()).collect()
        } else {
            stop_words.clone()
        };

        Self {
            pattern: Regex::new(DEFAULT_TOKEN_PATTERN).expect("default token pattern is valid"),
            lowercase,
            stop_words,
        }
    }

    /// Split `text` into terms, in order of appearance.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        self.pattern
            .find_iter(&text)
            .map(|m| m.as_str())
            .filter(|term| !self.stop_words.contains(*term))
            .map(str::to_string)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(true, &BTreeSet::new())
    }
}
