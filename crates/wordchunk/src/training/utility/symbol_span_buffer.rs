//! # Symbol Span Buffer

use crate::training::StringChunkType;
use crate::types::Pair;

/// A mutable span of symbols (a "word").
///
/// Starts as one symbol per `char`; iteratively rewritten by iterative BPE training.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolSpanBuf<K: StringChunkType> {
    symbols: Vec<K>,
}

impl<K: StringChunkType> SymbolSpanBuf<K> {
    const DEC: i32 = -1;
    const INC: i32 = 1;

    /// Create a new span buffer from symbols.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// Create a new span buffer holding one symbol per `char` of `word`.
    pub fn from_word(word: &str) -> Self {
        let mut buf = [0u8; 4];
        Self {
            symbols: word
                .chars()
                .map(|c| K::from(&*c.encode_utf8(&mut buf)))
                .collect(),
        }
    }

    /// View the symbols as a slice.
    pub fn symbols(&self) -> &[K] {
        &self.symbols
    }

    /// Get the length of the span.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Is this span empty?
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get an iterator over [`Pair<K>`] windows of this span.
    pub fn pairs(&self) -> impl Iterator<Item = Pair<K>> + '_ {
        self.symbols.windows(2).map(|w| (w[0].clone(), w[1].clone()))
    }

    /// Merge all non-overlapping occurrences of `pair -> replacement`, left to right.
    ///
    /// # Arguments
    /// * `pair` - the pair to merge.
    /// * `replacement` - the symbol to replace `pair` with.
    /// * `on_merge` - a callback function to invoke for each incremental pair delta.
    ///   The function is called with:
    ///   - `pair` - the affected pair.
    ///   - `delta` - the pair count delta: `+1` for an added pair, `-1` for a removed pair.
    pub fn merge_pair_cb<F>(
        &mut self,
        pair: &Pair<K>,
        replacement: &K,
        on_merge: &mut F,
    ) where
        F: FnMut(Pair<K>, i32),
    {
        let (a, b) = pair;
        let n = self.symbols.len();

        if n < 2 {
            return;
        }

        let mut merged: Vec<K> = Vec::with_capacity(n);

        let mut i = 0;
        while i < n {
            let current = &self.symbols[i];

            if i + 1 < n && current == a && &self.symbols[i + 1] == b {
                if let Some(x) = merged.last() {
                    on_merge((x.clone(), a.clone()), Self::DEC);
                    on_merge((x.clone(), replacement.clone()), Self::INC);
                }

                on_merge(pair.clone(), Self::DEC);

                if i + 2 < n {
                    let y = &self.symbols[i + 2];
                    on_merge((b.clone(), y.clone()), Self::DEC);
                    on_merge((replacement.clone(), y.clone()), Self::INC);
                }

                merged.push(replacement.clone());

                // Skip 'a' and 'b'.
                i += 2;
            } else {
                merged.push(current.clone());
                i += 1;
            }
        }

        self.symbols = merged;
    }
}

#[cfg(test)]
mod tests {
    use compact_str::CompactString;

    use super::*;

    fn span(symbols: &[&str]) -> SymbolSpanBuf<String> {
        SymbolSpanBuf::from_symbols(symbols.iter().map(|s| s.to_string()))
    }

    fn pair(
        a: &str,
        b: &str,
    ) -> Pair<String> {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_from_word() {
        let span: SymbolSpanBuf<CompactString> = SymbolSpanBuf::from_word("héllo");
        assert_eq!(span.len(), 5);
        assert_eq!(span.symbols()[1], "é");
        assert_eq!(span.symbols().concat(), "héllo");

        let empty: SymbolSpanBuf<String> = SymbolSpanBuf::from_word("");
        assert!(empty.is_empty());
        assert_eq!(empty.pairs().count(), 0);
    }

    #[test]
    fn test_span_pairs() {
        let span = span(&["a", "bc", "d"]);
        assert_eq!(
            span.pairs().collect::<Vec<_>>(),
            vec![pair("a", "bc"), pair("bc", "d")]
        );
    }

    #[test]
    fn test_span_merge_pair_cb() {
        let mut span = span(&["a", "b", "c", "a", "b", "b", "a"]);
        let mut deltas = vec![];

        span.merge_pair_cb(&pair("a", "b"), &"ab".to_string(), &mut |p, d| {
            deltas.push((p, d))
        });
        assert_eq!(span.symbols(), &["ab", "c", "ab", "b", "a"]);
        assert_eq!(span.symbols().concat(), "abcabba");

        assert_eq!(
            deltas,
            vec![
                // first match
                (pair("a", "b"), -1),
                (pair("b", "c"), -1),
                (pair("ab", "c"), 1),
                // second match
                (pair("c", "a"), -1),
                (pair("c", "ab"), 1),
                (pair("a", "b"), -1),
                (pair("b", "b"), -1),
                (pair("ab", "b"), 1),
            ]
        );
    }

    #[test]
    fn test_span_merge_adjacent_matches() {
        let mut span = span(&["a", "b", "a", "b"]);
        let mut deltas = vec![];

        span.merge_pair_cb(&pair("a", "b"), &"ab".to_string(), &mut |p, d| {
            deltas.push((p, d))
        });
        assert_eq!(span.symbols(), &["ab", "ab"]);
        assert_eq!(
            deltas,
            vec![
                (pair("a", "b"), -1),
                (pair("b", "a"), -1),
                (pair("ab", "a"), 1),
                (pair("ab", "a"), -1),
                (pair("ab", "ab"), 1),
                (pair("a", "b"), -1),
            ]
        );
    }
}
