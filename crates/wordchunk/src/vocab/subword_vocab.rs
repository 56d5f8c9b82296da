//! # Subword Vocabulary

use compact_str::CompactString;

use crate::types::{WCHashSet, hash_set_new};

/// A set of subword strings.
///
/// Empty strings are never stored; an empty entry would match anywhere
/// without consuming input.
#[derive(Debug, Clone)]
pub struct SubwordVocab {
    entries: WCHashSet<CompactString>,

    /// The byte length of the longest entry.
    max_entry_len: usize,
}

impl Default for SubwordVocab {
    fn default() -> Self {
        Self {
            entries: hash_set_new(),
            max_entry_len: 0,
        }
    }
}

impl PartialEq for SubwordVocab {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.len() == other.len() && self.entries.iter().all(|e| other.entries.contains(e))
    }
}

impl Eq for SubwordVocab {}

impl<S: AsRef<str>> FromIterator<S> for SubwordVocab {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocab = Self::default();
        vocab.extend(iter);
        vocab
    }
}

impl<S: AsRef<str>> Extend<S> for SubwordVocab {
    fn extend<I: IntoIterator<Item = S>>(
        &mut self,
        iter: I,
    ) {
        for entry in iter {
            self.insert(entry.as_ref());
        }
    }
}

impl SubwordVocab {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from the distinct non-empty strings of `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().collect()
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The byte length of the longest entry; `0` when empty.
    pub fn max_entry_len(&self) -> usize {
        self.max_entry_len
    }

    /// Insert an entry.
    ///
    /// ## Returns
    /// `true` if the entry was new; `false` if it was already present, or empty.
    pub fn insert(
        &mut self,
        entry: &str,
    ) -> bool {
        if entry.is_empty() {
            return false;
        }
        let added = self.entries.insert(entry.into());
        if added {
            self.max_entry_len = self.max_entry_len.max(entry.len());
        }
        added
    }

    /// Is `entry` in the vocabulary?
    pub fn contains(
        &self,
        entry: &str,
    ) -> bool {
        self.entries.contains(entry)
    }

    /// Iterate over the entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(CompactString::as_str)
    }

    /// The entries in lexicographic order.
    pub fn sorted_entries(&self) -> Vec<&str> {
        let mut entries: Vec<&str> = self.iter().collect();
        entries.sort_unstable();
        entries
    }

    /// The longest entry which is a prefix of `text`.
    ///
    /// Candidate lengths are probed from the longest entry length downward,
    /// on `char` boundaries. Two distinct entries of equal length can't both be
    /// prefixes of `text`, so the result is unique.
    pub fn longest_prefix<'t>(
        &self,
        text: &'t str,
    ) -> Option<&'t str> {
        let limit = self.max_entry_len.min(text.len());
        (1..=limit)
            .rev()
            .filter(|&end| text.is_char_boundary(end))
            .map(|end| &text[..end])
            .find(|prefix| self.entries.contains(*prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words() {
        let vocab = SubwordVocab::from_words(["left", "right", "left", ""]);
        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains("left"));
        assert!(!vocab.contains(""));
        assert_eq!(vocab.max_entry_len(), 5);
        assert_eq!(vocab.sorted_entries(), vec!["left", "right"]);
    }

    #[test]
    fn test_insert() {
        let mut vocab = SubwordVocab::new();
        assert!(vocab.is_empty());
        assert_eq!(vocab.max_entry_len(), 0);

        assert!(vocab.insert("ab"));
        assert!(!vocab.insert("ab"));
        assert!(!vocab.insert(""));
        assert!(vocab.insert("☃"));
        assert_eq!(vocab.max_entry_len(), 3);
        assert_eq!(vocab.iter().count(), 2);
    }

    #[test]
    fn test_insertion_order_independence() {
        let a = SubwordVocab::from_words(["le", "left", "ft", "right"]);
        let b = SubwordVocab::from_words(["right", "ft", "left", "le"]);
        assert_eq!(a, b);
        assert_ne!(a, SubwordVocab::from_words(["le", "left", "ft"]));
    }

    #[test]
    fn test_longest_prefix() {
        let vocab = SubwordVocab::from_words(["left", "le", "ft", "y"]);
        assert_eq!(vocab.longest_prefix("lefty"), Some("left"));
        assert_eq!(vocab.longest_prefix("ley"), Some("le"));
        assert_eq!(vocab.longest_prefix("y"), Some("y"));
        assert_eq!(vocab.longest_prefix("right"), None);
        assert_eq!(vocab.longest_prefix(""), None);

        let vocab = SubwordVocab::from_words(["é", "éa"]);
        // Probing must skip the inner byte of "é".
        assert_eq!(vocab.longest_prefix("éb"), Some("é"));
        assert_eq!(vocab.longest_prefix("éa"), Some("éa"));

        assert_eq!(SubwordVocab::new().longest_prefix("abc"), None);
    }
}
