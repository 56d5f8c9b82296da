//! # Subword Segmenter

use crate::vocab::SubwordVocab;

/// Greedy longest-prefix segmenter over a [`SubwordVocab`].
///
/// * An empty vocabulary splits words into individual characters.
/// * Otherwise, the longest entry which prefixes the remaining text is taken;
///   when no entry matches, the whole remainder becomes one token.
///
/// The concatenation of the tokens is always the input word.
#[derive(Debug, Clone, Copy)]
pub struct SubwordSegmenter<'v> {
    vocab: &'v SubwordVocab,
}

impl<'v> SubwordSegmenter<'v> {
    /// Create a segmenter over `vocab`.
    pub fn new(vocab: &'v SubwordVocab) -> Self {
        Self { vocab }
    }

    /// The segmentation vocabulary.
    pub fn vocab(&self) -> &'v SubwordVocab {
        self.vocab
    }

    /// Segment a word, appending the subword tokens to a target buffer.
    ///
    /// ## Arguments
    /// * `word` - The word to segment.
    /// * `tokens` - The target token buffer to append to.
    pub fn segment_append(
        &self,
        word: &str,
        tokens: &mut Vec<String>,
    ) {
        if self.vocab.is_empty() {
            tokens.extend(word.chars().map(String::from));
            return;
        }

        let mut rest = word;
        while !rest.is_empty() {
            match self.vocab.longest_prefix(rest) {
                Some(prefix) => {
                    tokens.push(prefix.to_string());
                    rest = &rest[prefix.len()..];
                }
                None => {
                    log::trace!("no subword prefix of {rest:?}; emitting the remainder");
                    tokens.push(rest.to_string());
                    break;
                }
            }
        }
    }

    /// Segment a word into subword tokens.
    pub fn segment(
        &self,
        word: &str,
    ) -> Vec<String> {
        let mut tokens = Vec::new();
        self.segment_append(word, &mut tokens);
        tokens
    }

    /// Segment each word, flattening the tokens in word order.
    pub fn segment_words<I>(
        &self,
        words: I,
    ) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut tokens = Vec::new();
        for word in words {
            self.segment_append(word.as_ref(), &mut tokens);
        }
        tokens
    }
}

/// Segment `word` against `vocab`.
///
/// See [`SubwordSegmenter`].
pub fn segment(
    word: &str,
    vocab: &SubwordVocab,
) -> Vec<String> {
    SubwordSegmenter::new(vocab).segment(word)
}
