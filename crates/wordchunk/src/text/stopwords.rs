//! # Stopword Filter

use crate::types::{WCHashSet, hash_set_new};

/// The default stopword list.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "is", "a", "the", "this", "it", "if", "and", "to", "let's", "see",
];

/// Case-insensitive stopword filter.
///
/// Words are compared by their lowercase form; stored stopwords are lowercased
/// on insertion.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: WCHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOPWORDS)
    }
}

impl StopwordFilter {
    /// A filter which keeps every word.
    pub fn empty() -> Self {
        Self {
            stopwords: hash_set_new(),
        }
    }

    /// Build a filter from a list of stopwords.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::empty().with_words(words)
    }

    /// Add stopwords to the filter.
    pub fn with_words<I, S>(
        mut self,
        words: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// The number of stopwords.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Is the filter empty?
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Is `word` a stopword?
    pub fn is_stopword(
        &self,
        word: &str,
    ) -> bool {
        !self.stopwords.is_empty() && self.stopwords.contains(&word.to_lowercase())
    }

    /// Filter a word sequence, preserving order.
    pub fn filter<I, S>(
        &self,
        words: I,
    ) -> Vec<S>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|w| !self.is_stopword(w.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stopwords() {
        let filter = StopwordFilter::default();
        assert_eq!(filter.len(), DEFAULT_STOPWORDS.len());

        let words = ["This", "engine", "IS", "on", "fire", "and", "Let's", "go", "."];
        assert_eq!(filter.filter(words), vec!["engine", "on", "fire", "go", "."]);
    }

    #[test]
    fn test_custom_stopwords() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));

        let filter = filter.with_words(["Engine"]);
        assert!(filter.is_stopword("ENGINE"));
        assert_eq!(filter.filter(["the", "engine"]), vec!["the"]);
    }
}
