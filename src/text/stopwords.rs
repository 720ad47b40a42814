// Stopword set: built once per run and handed to the Normalizer.
//
// The English list is NLTK's, shipped by the `stop-words` crate behind its
// `nltk` feature. Callers can layer extra words on top (from config) or
// build a set from an explicit list, which the tests use to pin down exact
// token counts.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// A read-only set of lowercase stopwords.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The fixed English stopword list.
    pub fn english() -> Self {
        let words: Vec<String> = get(LANGUAGE::English);
        Self::from_words(words)
    }

    /// Build a set from an explicit list. Words are lowercased and trimmed;
    /// blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Return a copy of this set with `extra` words added.
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in extra {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() {
                self.words.insert(word);
            }
        }
        self
    }

    /// Membership test. Expects an already-lowercased word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in alphabetical order, for display.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_covers_common_function_words() {
        let sw = StopWords::english();
        for word in ["the", "is", "and", "of", "a"] {
            assert!(sw.contains(word), "expected '{word}' to be a stopword");
        }
        assert!(!sw.contains("plagiarism"));
    }

    #[test]
    fn test_english_keeps_ordinary_content_words() {
        let sw = StopWords::english();
        for word in ["new", "research", "results", "work", "important", "world"] {
            assert!(!sw.contains(word), "'{word}' should count as content");
        }
        assert!(sw.len() < 200, "got {} stopwords", sw.len());
    }

    #[test]
    fn test_from_words_lowercases_and_skips_blanks() {
        let sw = StopWords::from_words(["The", "  IS ", ""]);
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("the"));
        assert!(sw.contains("is"));
    }

    #[test]
    fn test_with_extra_extends() {
        let sw = StopWords::from_words(["the"]).with_extra(["Lorem", "ipsum"]);
        assert_eq!(sw.sorted(), vec!["ipsum", "lorem", "the"]);
    }
}
