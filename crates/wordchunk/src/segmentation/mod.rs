//! # Subword Segmentation
//!
//! Splits words into subword tokens against a trained [`SubwordVocab`](crate::vocab::SubwordVocab).
//!
//! ```rust
//! use wordchunk::segmentation::segment;
//! use wordchunk::vocab::SubwordVocab;
//!
//! let vocab = SubwordVocab::from_words(["left", "ft", "y"]);
//! assert_eq!(segment("lefty", &vocab), vec!["left", "y"]);
//! ```

mod subword_segmenter;

#[doc(inline)]
pub use subword_segmenter::{SubwordSegmenter, segment};
