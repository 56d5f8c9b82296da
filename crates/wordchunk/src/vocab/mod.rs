//! # Subword Vocabularies
//!
//! A [`SubwordVocab`] is a set of subword strings. Membership and entry length are
//! all that matter: segmentation prefers the longest entry matching a prefix.

mod subword_vocab;

#[doc(inline)]
pub use subword_vocab::SubwordVocab;
