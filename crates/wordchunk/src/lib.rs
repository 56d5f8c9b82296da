//! # `wordchunk` Text Chunking Suite
//!
//! Converts raw text into punctuation-bounded chunks of (sub)word tokens.
//!
//! The stages are:
//! * [`text`] - sentence splitting, word splitting, and stopword filtering.
//! * [`training`] - a small BPE trainer producing a [`vocab::SubwordVocab`].
//! * [`segmentation`] - greedy longest-prefix subword segmentation.
//! * [`chunking`] - grouping token streams into chunks on punctuation.
//! * [`pipeline`] - the drivers tying the stages together.
//!
//! Subword vocabularies are trained per batch of words (by default, per sentence),
//! and are discarded once the batch has been segmented.
//!
//! ## Example
//!
//! ```rust
//! use wordchunk::pipeline::{PipelineOptions, TextChunker, TextPipeline};
//!
//! let pipeline = TextPipeline::new(
//!     PipelineOptions::default()
//!         .with_subword(true)
//!         .with_num_merges(10),
//! )
//! .unwrap();
//!
//! let chunks = pipeline
//!     .try_tokenize("Right engine is on fire. The left engine is not working.")
//!     .unwrap();
//!
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].tokens().last().map(String::as_str), Some("."));
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod chunking;
pub mod compat;
pub mod errors;
pub mod pipeline;
pub mod regex;
pub mod segmentation;
pub mod text;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{WCResult, WordchunkError};
#[doc(inline)]
pub use pipeline::{PipelineOptions, TextChunker, TextPipeline};
#[doc(inline)]
pub use vocab::SubwordVocab;
