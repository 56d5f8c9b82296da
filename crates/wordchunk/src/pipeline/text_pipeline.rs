//! # Text Pipeline

use crate::chunking::{Chunk, Chunker};
use crate::errors::WCResult;
use crate::pipeline::{PipelineOptions, SubwordDriver, VocabScope};
use crate::segmentation::SubwordSegmenter;
use crate::text::{SentenceSplitter, WordSplitter};

/// A trait for text-to-chunk pipelines.
pub trait TextChunker: Send + Sync {
    /// Return the attached chunker.
    fn chunker(&self) -> &Chunker;

    /// Tokenize text into per-sentence token lists.
    ///
    /// ## Arguments
    /// * `text` - The text to tokenize.
    ///
    /// ## Returns
    /// One token list per sentence, in sentence order.
    fn tokenize_sentences(
        &self,
        text: &str,
    ) -> WCResult<Vec<Vec<String>>>;

    /// Tokenize text into chunks.
    ///
    /// ## Arguments
    /// * `text` - The text to tokenize.
    ///
    /// ## Returns
    /// A `Result` containing the chunks, in order.
    fn try_tokenize(
        &self,
        text: &str,
    ) -> WCResult<Vec<Chunk>> {
        let sentences = self.tokenize_sentences(text)?;
        Ok(self.chunker().chunk_sentences(sentences))
    }

    /// Tokenize UTF-8 bytes into chunks.
    ///
    /// ## Returns
    /// [`WordchunkError::Encoding`](crate::WordchunkError::Encoding) if `bytes`
    /// are not valid UTF-8.
    fn try_tokenize_bytes(
        &self,
        bytes: &[u8],
    ) -> WCResult<Vec<Chunk>> {
        let text = core::str::from_utf8(bytes)?;
        self.try_tokenize(text)
    }

    /// Tokenize a batch of independent texts.
    ///
    /// ## Arguments
    /// * `batch` - A slice of texts to tokenize.
    ///
    /// ## Returns
    /// A `Result` containing the chunks of each text.
    fn try_tokenize_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> WCResult<Vec<Vec<Chunk>>> {
        batch.iter().map(|s| self.try_tokenize(s.as_ref())).collect()
    }
}

/// Sentence split, word split, stopword filter, optional subword segmentation,
/// then chunking.
///
/// Subword vocabularies are trained per [`VocabScope`] batch, and dropped once
/// the batch has been segmented.
#[derive(Debug, Clone)]
pub struct TextPipeline {
    options: PipelineOptions,
    sentence_splitter: SentenceSplitter,
    word_splitter: WordSplitter,
    driver: SubwordDriver,
    chunker: Chunker,
}

impl TextPipeline {
    /// Build a pipeline.
    ///
    /// ## Arguments
    /// * `options` - The pipeline options.
    ///
    /// ## Returns
    /// An error if the sentence or word patterns fail to compile.
    pub fn new(options: PipelineOptions) -> WCResult<Self> {
        let sentence_splitter = SentenceSplitter::from_pattern(options.sentence_pattern.clone())?;
        let word_splitter = WordSplitter::from_pattern(options.word_pattern.clone())?;
        let driver = SubwordDriver::new(options.trainer_options());

        Ok(Self {
            options,
            sentence_splitter,
            word_splitter,
            driver,
            chunker: Chunker::default(),
        })
    }

    /// Replace the chunker.
    pub fn with_chunker(
        self,
        chunker: Chunker,
    ) -> Self {
        Self { chunker, ..self }
    }

    /// The pipeline options.
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// The subword driver.
    pub fn driver(&self) -> &SubwordDriver {
        &self.driver
    }

    /// Split text into sentences of words, with stopwords removed.
    pub fn split_words<'h>(
        &self,
        text: &'h str,
    ) -> WCResult<Vec<Vec<&'h str>>> {
        let sentences = self.sentence_splitter.split(text)?;
        sentences
            .into_iter()
            .map(|sentence| {
                let words = self.word_splitter.split(sentence)?;
                Ok(self.options.stopwords.filter(words))
            })
            .collect()
    }

    /// Apply the subword stage to word-split sentences.
    ///
    /// When subword segmentation is disabled, the words pass through.
    pub fn subword_sentences(
        &self,
        sentences: Vec<Vec<&str>>,
    ) -> Vec<Vec<String>> {
        if !self.options.subword {
            return sentences
                .into_iter()
                .map(|words| words.into_iter().map(String::from).collect())
                .collect();
        }

        match self.options.vocab_scope {
            VocabScope::PerSentence => sentences
                .iter()
                .map(|words| self.driver.process_words(words))
                .collect(),
            VocabScope::PerDocument => {
                let vocab = self.driver.train(sentences.iter().flatten());
                log::debug!("document vocab: {} entries", vocab.len());

                let segmenter = SubwordSegmenter::new(&vocab);
                sentences
                    .iter()
                    .map(|words| segmenter.segment_words(words))
                    .collect()
            }
        }
    }
}

impl TextChunker for TextPipeline {
    fn chunker(&self) -> &Chunker {
        &self.chunker
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    fn tokenize_sentences(
        &self,
        text: &str,
    ) -> WCResult<Vec<Vec<String>>> {
        let sentences = self.split_words(text)?;
        log::debug!("tokenizing {} sentences", sentences.len());
        Ok(self.subword_sentences(sentences))
    }
}
