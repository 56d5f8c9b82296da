//! # Subword Driver

use crate::segmentation::SubwordSegmenter;
use crate::training::{BpeTrainerOptions, BpeVocabTrainer};
use crate::vocab::SubwordVocab;

/// Trains a vocabulary over a batch of words, then segments the batch with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubwordDriver {
    options: BpeTrainerOptions,
}

impl SubwordDriver {
    /// Create a driver.
    pub fn new(options: BpeTrainerOptions) -> Self {
        Self { options }
    }

    /// The trainer options.
    pub fn options(&self) -> &BpeTrainerOptions {
        &self.options
    }

    /// Train a vocabulary over `words`.
    pub fn train<I>(
        &self,
        words: I,
    ) -> SubwordVocab
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut trainer: BpeVocabTrainer = self.options.clone().init();
        trainer.update_from_words(words);
        trainer.train()
    }

    /// Train a vocabulary for the batch, then segment each word against it.
    ///
    /// ## Arguments
    /// * `words` - The batch.
    ///
    /// ## Returns
    /// The subword tokens of every word, in word order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, words)))]
    pub fn process_words<S: AsRef<str>>(
        &self,
        words: &[S],
    ) -> Vec<String> {
        let vocab = self.train(words);
        SubwordSegmenter::new(&vocab).segment_words(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_words() {
        let driver = SubwordDriver::new(BpeTrainerOptions::new(2));

        // Every training word is in its own vocabulary.
        assert_eq!(driver.process_words(&["left", "right"]), vec!["left", "right"]);
        assert!(driver.process_words::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_zero_merges_keeps_words() {
        let driver = SubwordDriver::new(BpeTrainerOptions::new(0));
        let words = ["engine", "on", "fire", "."];
        assert_eq!(driver.process_words(&words), words.to_vec());
    }

    #[test]
    fn test_train() {
        let driver = SubwordDriver::default();
        assert_eq!(driver.options(), &BpeTrainerOptions::default());

        let vocab = driver.train(["left", "right"]);
        assert!(vocab.contains("le"));
        assert!(vocab.contains("left"));
    }
}
