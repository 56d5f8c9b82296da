//! # Chunking
//!
//! Groups each sentence's tokens into [`Chunk`]s, closing a chunk after every
//! punctuation boundary token.

mod chunker;

#[doc(inline)]
pub use chunker::{Chunk, Chunker, DEFAULT_CHUNK_BOUNDARIES, chunk_sentences};
