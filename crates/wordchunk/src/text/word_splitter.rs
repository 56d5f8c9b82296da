//! # Word Splitter

use crate::errors::WCResult;
use crate::regex::{RegexWrapper, RegexWrapperPattern};

/// Words (with an optional apostrophe suffix) and standalone punctuation marks.
pub const DEFAULT_WORD_PATTERN: &str = r"\b\w+(?:'\w+)?\b|[.,!?;]";

/// Splits a sentence into word and punctuation tokens.
#[derive(Debug, Clone)]
pub struct WordSplitter {
    regex: RegexWrapper,
}

impl WordSplitter {
    /// Build a splitter from a word pattern; every match is one word.
    pub fn from_pattern<P: Into<RegexWrapperPattern>>(pattern: P) -> WCResult<Self> {
        let regex = pattern.into().compile()?;
        Ok(Self { regex })
    }

    /// The compiled word regex.
    pub fn regex(&self) -> &RegexWrapper {
        &self.regex
    }

    /// Split `sentence` into words, in order.
    pub fn split<'h>(
        &self,
        sentence: &'h str,
    ) -> WCResult<Vec<&'h str>> {
        Ok(self.regex.find_all(sentence)?)
    }
}

impl Default for WordSplitter {
    fn default() -> Self {
        Self::from_pattern(DEFAULT_WORD_PATTERN).expect("default word pattern compiles")
    }
}
