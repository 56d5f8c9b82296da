//! # Parallel Pipeline

use rayon::prelude::*;

use crate::chunking::{Chunk, Chunker};
use crate::errors::WCResult;
use crate::pipeline::{TextChunker, TextPipeline, VocabScope};

/// Sentence-Level Parallel Pipeline Wrapper.
///
/// With [`VocabScope::PerSentence`] subword segmentation, each sentence trains
/// and segments against its own vocabulary on the ``rayon`` pool; results are
/// reassembled in sentence order. Other configurations run the inner pipeline
/// per text, and batches are parallel across texts.
#[derive(Debug, Clone)]
pub struct ParallelRayonPipeline {
    /// Inner pipeline.
    pub inner: TextPipeline,
}

impl ParallelRayonPipeline {
    /// Create a new parallel pipeline.
    ///
    /// ## Arguments
    /// * `inner` - The pipeline to wrap.
    pub fn new(inner: TextPipeline) -> Self {
        Self { inner }
    }
}

impl From<TextPipeline> for ParallelRayonPipeline {
    fn from(inner: TextPipeline) -> Self {
        Self::new(inner)
    }
}

impl TextChunker for ParallelRayonPipeline {
    fn chunker(&self) -> &Chunker {
        self.inner.chunker()
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    fn tokenize_sentences(
        &self,
        text: &str,
    ) -> WCResult<Vec<Vec<String>>> {
        let options = self.inner.options();
        if !options.subword || options.vocab_scope != VocabScope::PerSentence {
            return self.inner.tokenize_sentences(text);
        }

        let sentences = self.inner.split_words(text)?;
        let driver = self.inner.driver();
        Ok(sentences
            .par_iter()
            .map(|words| driver.process_words(words))
            .collect())
    }

    fn try_tokenize_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> WCResult<Vec<Vec<Chunk>>> {
        batch
            .par_iter()
            .map(|text| self.try_tokenize(text.as_ref()))
            .collect()
    }
}
