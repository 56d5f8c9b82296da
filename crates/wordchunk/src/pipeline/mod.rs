//! # Pipelines
//!
//! [`TextPipeline`] runs the full text-to-chunk flow:
//! 1. split the text into sentences;
//! 2. split each sentence into words, and drop stopwords;
//! 3. optionally train a subword vocabulary per [`VocabScope`], and segment the words;
//! 4. group each sentence's tokens into chunks.
//!
//! [`SubwordDriver`] is the subword stage on its own: train on a batch, then
//! segment that batch.
//!
//! The [`TextChunker`] trait carries the shared entry points, so that wrappers
//! (such as the `rayon` sentence-parallel pipeline) can be used interchangeably.

mod pipeline_options;
mod subword_driver;
mod text_pipeline;

#[doc(inline)]
pub use pipeline_options::{PipelineOptions, VocabScope};
#[doc(inline)]
pub use subword_driver::SubwordDriver;
#[doc(inline)]
pub use text_pipeline::{TextChunker, TextPipeline};
