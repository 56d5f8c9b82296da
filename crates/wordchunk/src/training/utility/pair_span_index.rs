//! # `PairSpanIndex` Builder

use std::collections::BTreeSet;

use crate::training::utility::{PairFrequencyTable, SymbolSpanBuf};
use crate::training::{CountType, StringChunkType};
use crate::types::{Pair, WCHashMap, hash_map_with_capacity};

/// A map from [`Pair`] to indices over ``spans``.
///
/// Ordered sets keep merge application (and so first-seen ranks) deterministic.
pub type PairIndexMap<K> = WCHashMap<Pair<K>, BTreeSet<usize>>;

/// An index of ``(K, K)`` pair information relative to a ``&[SymbolSpanBuf<K>]``.
#[derive(Debug, Clone)]
pub struct PairSpanIndex<K: StringChunkType, C: CountType> {
    /// Pair counts.
    ///
    /// ``sum(spans[i].count(pair) * counts[i]) for all i``
    pub pair_counts: PairFrequencyTable<K, C>,

    /// A map from [`Pair`] to the indices of spans that may contain it.
    pub pair_index: PairIndexMap<K>,
}

impl<K: StringChunkType, C: CountType> PairSpanIndex<K, C> {
    /// Build a [`PairSpanIndex`] from a slice of [`SymbolSpanBuf`]s, using a count table.
    ///
    /// # Arguments
    /// * `spans` - a sequence of words; assumed to be unique.
    /// * `counts` - `counts[i]` is the count of `spans[i]`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(spans, counts)))]
    pub fn from_span_count_table(
        spans: &[SymbolSpanBuf<K>],
        counts: &[C],
    ) -> Self {
        let mut index = PairSpanIndex {
            pair_counts: PairFrequencyTable::new(),
            pair_index: hash_map_with_capacity(spans.len()),
        };

        let zero = C::zero();

        for (idx, (span, &count)) in spans.iter().zip(counts).enumerate() {
            if count == zero || span.len() < 2 {
                continue;
            }
            for p in span.pairs() {
                index.pair_index.entry(p.clone()).or_default().insert(idx);
                index.pair_counts.add(p, count);
            }
        }

        index
    }
}
