use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use wakaru_core::language::WordValidity;

/// Errors raised while loading word-list data
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// jmdict-simplified format, reduced to the fields the word list needs
#[derive(Debug, Deserialize)]
struct JmdictJson {
    words: Vec<JmdictWord>,
}

#[derive(Debug, Deserialize)]
struct JmdictWord {
    #[serde(default)]
    kanji: Vec<JmdictText>,
    #[serde(default)]
    kana: Vec<JmdictText>,
}

#[derive(Debug, Deserialize)]
struct JmdictText {
    text: String,
}

/// Dictionary word list backing the scanner's validity lookup.
///
/// An empty list models a lookup whose data has not loaded yet: every
/// query answers false and the scanner degrades to recognizing nothing.
#[derive(Debug, Default, Clone)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Collect every kanji and kana writing from a jmdict-simplified export
    pub fn from_jmdict_json(json: &str) -> Result<Self, LexiconError> {
        let data: JmdictJson = serde_json::from_str(json)?;

        let mut words = HashSet::new();
        for word in data.words {
            words.extend(word.kanji.into_iter().map(|k| k.text));
            words.extend(word.kana.into_iter().map(|k| k.text));
        }

        tracing::info!("Loaded {} word forms from JMdict export", words.len());
        Ok(Self { words })
    }

    /// Load a word-per-line text file; blank lines and `#` comments skipped
    pub fn load_from_file(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path)?;
        let words: HashSet<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        tracing::info!("Loaded {} words from {}", words.len(), path.display());
        Ok(Self { words })
    }

    /// Merge another word list into this one
    pub fn merge(mut self, other: WordList) -> Self {
        self.words.extend(other.words);
        self
    }

    pub fn insert(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordValidity for WordList {
    fn is_valid_word(&self, text: &str) -> bool {
        self.words.contains(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_false_until_loaded() {
        let mut lexicon = WordList::new();
        assert!(lexicon.is_empty());
        assert!(!lexicon.is_valid_word("猫"));

        lexicon.insert("猫");
        assert!(lexicon.is_valid_word("猫"));
    }

    #[test]
    fn parses_jmdict_simplified_entries() {
        let json = r#"{
            "words": [
                {
                    "kanji": [{ "text": "食べる" }],
                    "kana": [{ "text": "たべる" }],
                    "sense": []
                },
                {
                    "kana": [{ "text": "かわいい" }]
                }
            ]
        }"#;
        let lexicon = WordList::from_jmdict_json(json).unwrap();
        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.is_valid_word("食べる"));
        assert!(lexicon.is_valid_word("たべる"));
        assert!(lexicon.is_valid_word("かわいい"));
        assert!(!lexicon.is_valid_word("猫"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(WordList::from_jmdict_json("{").is_err());
    }

    #[test]
    fn merge_unions_both_lists() {
        let base = WordList::from_words(["猫"]);
        let merged = base.merge(WordList::from_words(["犬"]));
        assert!(merged.is_valid_word("猫"));
        assert!(merged.is_valid_word("犬"));
        assert_eq!(merged.len(), 2);
    }
}
