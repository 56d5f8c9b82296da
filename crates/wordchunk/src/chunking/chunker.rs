//! # Punctuation Chunker

use compact_str::CompactString;

use crate::types::{WCHashSet, hash_set_new};

/// Tokens which close the current chunk.
pub const DEFAULT_CHUNK_BOUNDARIES: &[&str] = &[".", "!", "?", ",", ";", ":"];

/// A run of tokens from one sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Chunk {
    /// The index of the source sentence.
    sentence: usize,

    tokens: Vec<String>,
}

impl Chunk {
    /// Create a chunk.
    ///
    /// ## Arguments
    /// * `sentence` - The index of the sentence the tokens came from.
    /// * `tokens` - The chunk tokens.
    pub fn new(
        sentence: usize,
        tokens: Vec<String>,
    ) -> Self {
        Self { sentence, tokens }
    }

    /// The index of the source sentence.
    pub fn sentence(&self) -> usize {
        self.sentence
    }

    /// The chunk tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Consume the chunk, returning the tokens.
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the chunk empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens joined by `sep`.
    pub fn join(
        &self,
        sep: &str,
    ) -> String {
        self.tokens.join(sep)
    }
}

/// Groups sentence token streams into chunks.
///
/// Tokens are appended to the open chunk; a boundary token is appended and then
/// closes it. The end of a sentence closes any open chunk, so chunks never
/// span sentences, and are never empty.
#[derive(Debug, Clone)]
pub struct Chunker {
    boundaries: WCHashSet<CompactString>,
}

impl Default for Chunker {
    fn default() -> Self {
        Self::from_boundaries(DEFAULT_CHUNK_BOUNDARIES)
    }
}

impl Chunker {
    /// Build a chunker from a set of boundary tokens.
    pub fn from_boundaries<I, S>(boundaries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = hash_set_new();
        set.extend(boundaries.into_iter().map(|b| CompactString::from(b.as_ref())));
        Self { boundaries: set }
    }

    /// Does `token` close a chunk?
    pub fn is_boundary(
        &self,
        token: &str,
    ) -> bool {
        self.boundaries.contains(token)
    }

    /// Chunk one sentence, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `sentence` - The index of the sentence.
    /// * `tokens` - The sentence tokens.
    /// * `chunks` - The target chunk buffer to append to.
    pub fn chunk_sentence_append(
        &self,
        sentence: usize,
        tokens: Vec<String>,
        chunks: &mut Vec<Chunk>,
    ) {
        let mut current = Vec::new();
        for token in tokens {
            let closes = self.is_boundary(&token);
            current.push(token);
            if closes {
                chunks.push(Chunk::new(sentence, core::mem::take(&mut current)));
            }
        }
        if !current.is_empty() {
            chunks.push(Chunk::new(sentence, current));
        }
    }

    /// Chunk a sequence of tokenized sentences.
    pub fn chunk_sentences<I>(
        &self,
        sentences: I,
    ) -> Vec<Chunk>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut chunks = Vec::new();
        for (idx, tokens) in sentences.into_iter().enumerate() {
            self.chunk_sentence_append(idx, tokens, &mut chunks);
        }
        chunks
    }
}

/// Chunk tokenized sentences on the [`DEFAULT_CHUNK_BOUNDARIES`].
pub fn chunk_sentences<I>(sentences: I) -> Vec<Chunk>
where
    I: IntoIterator<Item = Vec<String>>,
{
    Chunker::default().chunk_sentences(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn chunk_tokens(chunks: &[Chunk]) -> Vec<Vec<&str>> {
        chunks
            .iter()
            .map(|c| c.tokens().iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_chunk_on_punctuation() {
        let chunks = chunk_sentences(vec![
            sentence(&["Right", "engine", "on", "fire", ",", "again", "."]),
            sentence(&["Left", "engine", "not", "working"]),
        ]);

        assert_eq!(
            chunk_tokens(&chunks),
            vec![
                vec!["Right", "engine", "on", "fire", ","],
                vec!["again", "."],
                vec!["Left", "engine", "not", "working"],
            ]
        );
        assert_eq!(
            chunks.iter().map(Chunk::sentence).collect::<Vec<_>>(),
            vec![0, 0, 1]
        );
        assert_eq!(chunks[1].join(" "), "again .");
    }

    #[test]
    fn test_no_empty_chunks() {
        let chunks = chunk_sentences(vec![
            sentence(&[]),
            sentence(&[".", "!"]),
            sentence(&["a", ":"]),
        ]);
        assert_eq!(chunk_tokens(&chunks), vec![vec!["."], vec!["!"], vec!["a", ":"]]);
        assert!(chunks.iter().all(|c| !c.is_empty()));
        assert_eq!(chunks[0].sentence(), 1);
    }

    #[test]
    fn test_custom_boundaries() {
        let chunker = Chunker::from_boundaries(["|"]);
        assert!(chunker.is_boundary("|"));
        assert!(!chunker.is_boundary("."));

        let chunks = chunker.chunk_sentences(vec![sentence(&["a", ".", "|", "b"])]);
        assert_eq!(chunk_tokens(&chunks), vec![vec!["a", ".", "|"], vec!["b"]]);
        assert_eq!(chunks[1].clone().into_tokens(), vec!["b".to_string()]);
        assert_eq!(chunks[1].len(), 1);
    }
}
