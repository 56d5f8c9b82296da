//! # Vocabulary Training
//!
//! Support for training small BPE subword vocabularies.
//!
//! A vocabulary is seeded with every distinct training word, then extended with
//! the concatenations of the most frequent adjacent symbol pairs, up to a merge budget.
//!
//! There are two merge modes, see [`MergeMode`]:
//! * [`MergeMode::Simplified`] (default) - pairs are counted once; a merge removes
//!   its pair from the table, and never rewrites the words.
//! * [`MergeMode::Iterative`] - classic BPE; merges rewrite the words and update
//!   the pair counts.
//!
//! In both modes, ties between equally frequent pairs go to the pair seen first
//! (scanning words in order, then positions left to right).
//!
//! ```rust
//! use wordchunk::training::{BpeTrainerOptions, BpeVocabTrainer};
//!
//! let mut trainer: BpeVocabTrainer = BpeTrainerOptions::new(2).init();
//! trainer.update_from_words(["left", "right"]);
//!
//! let results = trainer.train_with_results();
//! assert_eq!(results.vocab.sorted_entries(), vec!["ef", "le", "left", "right"]);
//! ```

pub mod utility;

mod bpe_trainer;
mod training_types;

#[doc(inline)]
pub use bpe_trainer::{
    BpeTrainResults,
    BpeTrainerOptions,
    BpeVocabTrainer,
    DEFAULT_NUM_MERGES,
    MergeJob,
    MergeMode,
    MergeRecord,
    train,
};
#[doc(inline)]
pub use training_types::{CountType, StringChunkType};
