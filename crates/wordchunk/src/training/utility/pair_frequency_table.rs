//! # Pair Frequency Table
//!
//! Counts adjacent symbol pairs, remembering the order in which each pair was
//! first seen. That order is the tie-break between equally frequent pairs.

use core::cmp::Reverse;

use crate::training::{CountType, StringChunkType};
use crate::types::{Pair, WCHashMap, hash_map_new};

/// The count of a [`Pair`], and when it was first seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairStats<C: CountType> {
    /// The number of occurrences of the pair.
    pub count: C,

    /// The insertion rank of the pair; `0` for the first pair ever added.
    pub first_seen: usize,
}

impl<C: CountType> PairStats<C> {
    /// The merge priority; greater merges first.
    ///
    /// Higher counts win; ties go to the pair seen first.
    pub fn priority(&self) -> (C, Reverse<usize>) {
        (self.count, Reverse(self.first_seen))
    }
}

/// A map from [`Pair`] to [`PairStats`].
#[derive(Debug, Clone)]
pub struct PairFrequencyTable<K: StringChunkType, C: CountType> {
    stats: WCHashMap<Pair<K>, PairStats<C>>,
    next_rank: usize,
}

impl<K: StringChunkType, C: CountType> Default for PairFrequencyTable<K, C> {
    fn default() -> Self {
        Self {
            stats: hash_map_new(),
            next_rank: 0,
        }
    }
}

impl<K: StringChunkType, C: CountType> PairFrequencyTable<K, C> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the adjacent character pairs of each word.
    ///
    /// Words shorter than two characters contribute no pairs;
    /// repeated pairs accumulate, within and across words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_weighted_words(words.into_iter().map(|w| (w, C::one())))
    }

    /// Count the adjacent character pairs of each word, scaled by the word's weight.
    pub fn from_weighted_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = (S, C)>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        let mut left = [0u8; 4];
        let mut right = [0u8; 4];
        for (word, weight) in words {
            let word = word.as_ref();
            for (a, b) in word.chars().zip(word.chars().skip(1)) {
                let pair: Pair<K> = (
                    K::from(&*a.encode_utf8(&mut left)),
                    K::from(&*b.encode_utf8(&mut right)),
                );
                table.add(pair, weight);
            }
        }
        table
    }

    /// The number of distinct pairs in the table.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Add `delta` occurrences of `pair`.
    ///
    /// A pair not yet in the table is ranked after every pair already seen.
    pub fn add(
        &mut self,
        pair: Pair<K>,
        delta: C,
    ) {
        let next_rank = &mut self.next_rank;
        let stats = self.stats.entry(pair).or_insert_with(|| {
            let first_seen = *next_rank;
            *next_rank += 1;
            PairStats {
                count: C::zero(),
                first_seen,
            }
        });
        stats.count += delta;
    }

    /// Remove `delta` occurrences of `pair`; counts saturate at zero.
    ///
    /// The pair keeps its rank, even at zero.
    pub fn sub(
        &mut self,
        pair: &Pair<K>,
        delta: C,
    ) {
        if let Some(stats) = self.stats.get_mut(pair) {
            stats.count = if stats.count > delta {
                stats.count - delta
            } else {
                C::zero()
            };
        }
    }

    /// Remove `pair` from the table.
    pub fn remove(
        &mut self,
        pair: &Pair<K>,
    ) -> Option<PairStats<C>> {
        self.stats.remove(pair)
    }

    /// Get the stats for `pair`.
    pub fn get(
        &self,
        pair: &Pair<K>,
    ) -> Option<&PairStats<C>> {
        self.stats.get(pair)
    }

    /// Get the count for `pair`; zero when absent.
    pub fn count(
        &self,
        pair: &Pair<K>,
    ) -> C {
        self.stats.get(pair).map_or(C::zero(), |s| s.count)
    }

    /// Iterate over the table, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Pair<K>, &PairStats<C>)> {
        self.stats.iter()
    }

    /// The pairs, in descending [`PairStats::priority`] order.
    pub fn ranked(&self) -> Vec<(&Pair<K>, &PairStats<C>)> {
        let mut ranked: Vec<_> = self.stats.iter().collect();
        ranked.sort_by_key(|(_, s)| Reverse(s.priority()));
        ranked
    }
}
