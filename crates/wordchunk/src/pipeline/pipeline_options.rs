//! # Pipeline Options

use crate::errors::{WCResult, WordchunkError};
use crate::regex::RegexWrapperPattern;
use crate::text::{DEFAULT_SENTENCE_BOUNDARY_PATTERN, DEFAULT_WORD_PATTERN, StopwordFilter};
use crate::training::{BpeTrainerOptions, DEFAULT_NUM_MERGES, MergeMode};

/// Which words a subword vocabulary is trained over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VocabScope {
    /// Train a fresh vocabulary for each sentence.
    #[default]
    PerSentence,

    /// Train one vocabulary over every sentence of the input.
    PerDocument,
}

/// Options for [`TextPipeline`](super::TextPipeline).
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Apply subword segmentation to the words?
    pub subword: bool,

    /// The merge budget of each trained vocabulary.
    pub num_merges: usize,

    /// How training merges are applied.
    pub merge_mode: MergeMode,

    /// The vocabulary training scope.
    pub vocab_scope: VocabScope,

    /// Words removed before subword segmentation.
    pub stopwords: StopwordFilter,

    /// The sentence boundary pattern.
    pub sentence_pattern: RegexWrapperPattern,

    /// The word pattern.
    pub word_pattern: RegexWrapperPattern,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            subword: false,
            num_merges: DEFAULT_NUM_MERGES,
            merge_mode: MergeMode::default(),
            vocab_scope: VocabScope::default(),
            stopwords: StopwordFilter::default(),
            sentence_pattern: DEFAULT_SENTENCE_BOUNDARY_PATTERN.into(),
            word_pattern: DEFAULT_WORD_PATTERN.into(),
        }
    }
}

impl PipelineOptions {
    /// Enables or disables subword segmentation.
    pub fn with_subword(
        self,
        subword: bool,
    ) -> Self {
        Self { subword, ..self }
    }

    /// Sets the merge budget.
    pub fn with_num_merges(
        self,
        num_merges: usize,
    ) -> Self {
        Self { num_merges, ..self }
    }

    /// Sets the merge budget from a signed value.
    ///
    /// ## Returns
    /// [`WordchunkError::InvalidConfiguration`] if `num_merges` is negative.
    pub fn try_with_signed_merges(
        self,
        num_merges: i64,
    ) -> WCResult<Self> {
        let num_merges = usize::try_from(num_merges)
            .map_err(|_| WordchunkError::InvalidConfiguration { num_merges })?;
        Ok(self.with_num_merges(num_merges))
    }

    /// Sets the merge mode.
    pub fn with_merge_mode(
        self,
        merge_mode: MergeMode,
    ) -> Self {
        Self { merge_mode, ..self }
    }

    /// Sets the vocabulary scope.
    pub fn with_vocab_scope(
        self,
        vocab_scope: VocabScope,
    ) -> Self {
        Self {
            vocab_scope,
            ..self
        }
    }

    /// Sets the stopword filter.
    pub fn with_stopwords(
        self,
        stopwords: StopwordFilter,
    ) -> Self {
        Self { stopwords, ..self }
    }

    /// Sets the sentence boundary pattern.
    pub fn with_sentence_pattern<P: Into<RegexWrapperPattern>>(
        self,
        pattern: P,
    ) -> Self {
        Self {
            sentence_pattern: pattern.into(),
            ..self
        }
    }

    /// Sets the word pattern.
    pub fn with_word_pattern<P: Into<RegexWrapperPattern>>(
        self,
        pattern: P,
    ) -> Self {
        Self {
            word_pattern: pattern.into(),
            ..self
        }
    }

    /// The trainer options for each subword vocabulary.
    pub fn trainer_options(&self) -> BpeTrainerOptions {
        BpeTrainerOptions::new(self.num_merges).with_merge_mode(self.merge_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PipelineOptions::default();
        assert!(!options.subword);
        assert_eq!(options.num_merges, DEFAULT_NUM_MERGES);
        assert_eq!(options.merge_mode, MergeMode::Simplified);
        assert_eq!(options.vocab_scope, VocabScope::PerSentence);
        assert!(options.stopwords.is_stopword("The"));
        assert_eq!(options.word_pattern.as_str(), DEFAULT_WORD_PATTERN);
    }

    #[test]
    fn test_builders() {
        let options = PipelineOptions::default()
            .with_subword(true)
            .with_num_merges(4)
            .with_merge_mode(MergeMode::Iterative)
            .with_vocab_scope(VocabScope::PerDocument)
            .with_stopwords(StopwordFilter::empty())
            .with_sentence_pattern(r"\n+")
            .with_word_pattern(r"\S+");

        assert!(options.subword);
        assert_eq!(options.vocab_scope, VocabScope::PerDocument);
        assert!(options.stopwords.is_empty());
        assert_eq!(options.sentence_pattern.as_str(), r"\n+");
        assert_eq!(options.word_pattern.as_str(), r"\S+");
        assert_eq!(
            options.trainer_options(),
            BpeTrainerOptions::new(4).with_merge_mode(MergeMode::Iterative)
        );
    }

    #[test]
    fn test_signed_merges() {
        let options = PipelineOptions::default().try_with_signed_merges(0).unwrap();
        assert_eq!(options.num_merges, 0);

        let err = PipelineOptions::default()
            .try_with_signed_merges(-5)
            .unwrap_err();
        assert!(matches!(
            err,
            WordchunkError::InvalidConfiguration { num_merges: -5 }
        ));
    }
}
