//! # Sentence Splitter

use crate::errors::WCResult;
use crate::regex::{RegexWrapper, RegexWrapperPattern};

/// Whitespace runs which follow terminal punctuation.
///
/// Requires look-behind; compiles to a `fancy_regex`.
pub const DEFAULT_SENTENCE_BOUNDARY_PATTERN: &str = r"(?<=[.!?])\s+";

/// Splits text into sentences.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    boundary: RegexWrapper,
}

impl SentenceSplitter {
    /// Build a splitter from a boundary pattern.
    ///
    /// ## Arguments
    /// * `pattern` - matches the separators *between* sentences.
    pub fn from_pattern<P: Into<RegexWrapperPattern>>(pattern: P) -> WCResult<Self> {
        let boundary = pattern.into().compile()?;
        Ok(Self { boundary })
    }

    /// The compiled boundary regex.
    pub fn boundary(&self) -> &RegexWrapper {
        &self.boundary
    }

    /// Split `text` into trimmed, non-empty sentences.
    pub fn split<'h>(
        &self,
        text: &'h str,
    ) -> WCResult<Vec<&'h str>> {
        Ok(self
            .boundary
            .split(text.trim())?
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect())
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        // The default pattern is a checked constant.
        Self::from_pattern(DEFAULT_SENTENCE_BOUNDARY_PATTERN)
            .expect("default sentence pattern compiles")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern_compiles() {
        let splitter = SentenceSplitter::from_pattern(DEFAULT_SENTENCE_BOUNDARY_PATTERN).unwrap();
        assert_eq!(splitter.boundary().as_str(), DEFAULT_SENTENCE_BOUNDARY_PATTERN);
    }

    #[test]
    fn test_split_sentences() {
        let splitter = SentenceSplitter::default();
        assert!(splitter.boundary().is_fancy());

        assert_eq!(
            splitter
                .split("  Right engine is on fire! Left engine failed.  Why?\nNo idea ")
                .unwrap(),
            vec![
                "Right engine is on fire!",
                "Left engine failed.",
                "Why?",
                "No idea"
            ]
        );
    }

    #[test]
    fn test_split_degenerate() {
        let splitter = SentenceSplitter::default();
        assert!(splitter.split("").unwrap().is_empty());
        assert!(splitter.split(" \n\t ").unwrap().is_empty());
        assert_eq!(splitter.split("no terminal").unwrap(), vec!["no terminal"]);

        // Punctuation without following whitespace does not split.
        assert_eq!(splitter.split("3.14 is pi").unwrap(), vec!["3.14 is pi"]);
    }

    #[test]
    fn test_custom_pattern() {
        let splitter = SentenceSplitter::from_pattern(r"\s*;\s*").unwrap();
        assert!(splitter.boundary().is_basic());
        assert_eq!(splitter.split("a; b ;c").unwrap(), vec!["a", "b", "c"]);

        assert!(SentenceSplitter::from_pattern("(").is_err());
    }
}
