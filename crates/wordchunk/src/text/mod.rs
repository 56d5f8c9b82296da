//! # Text Splitting
//!
//! The pre-subword stages of the pipeline:
//! * [`SentenceSplitter`] - split text into sentences on terminal punctuation.
//! * [`WordSplitter`] - split a sentence into words and punctuation marks.
//! * [`StopwordFilter`] - drop low-content words.
//!
//! None of these aim for linguistic correctness; they are regex heuristics.

mod sentence_splitter;
mod stopwords;
mod word_splitter;

#[doc(inline)]
pub use sentence_splitter::{DEFAULT_SENTENCE_BOUNDARY_PATTERN, SentenceSplitter};
#[doc(inline)]
pub use stopwords::{DEFAULT_STOPWORDS, StopwordFilter};
#[doc(inline)]
pub use word_splitter::{DEFAULT_WORD_PATTERN, WordSplitter};
