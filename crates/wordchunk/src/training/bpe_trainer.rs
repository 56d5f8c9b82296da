//! # Vocab Trainer

use core::cmp::{Ordering, Reverse};

use compact_str::CompactString;
use dary_heap::OctonaryHeap;

use crate::errors::{WCResult, WordchunkError};
use crate::training::utility::{PairFrequencyTable, PairSpanIndex, PairStats, SymbolSpanBuf};
use crate::training::{CountType, StringChunkType};
use crate::types::{Pair, WCHashMap, WCHashSet, hash_map_new, hash_set_new};
use crate::vocab::SubwordVocab;

/// The default merge budget.
pub const DEFAULT_NUM_MERGES: usize = 10;

/// How merges interact with the training words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MergeMode {
    /// Count pairs once; each merge only removes its pair from the table.
    ///
    /// Merges are never applied back to the words, so adjacency counts are
    /// never updated, and merged strings are always two characters long.
    #[default]
    Simplified,

    /// Classic BPE; each merge is applied to every word containing it,
    /// and the adjacent pair counts are updated before the next selection.
    Iterative,
}

/// Options for [`BpeVocabTrainer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BpeTrainerOptions {
    /// The maximum number of merges to perform.
    pub num_merges: usize,

    /// How merges are applied.
    pub merge_mode: MergeMode,
}

impl Default for BpeTrainerOptions {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_MERGES)
    }
}

impl BpeTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `num_merges` - The merge budget.
    pub fn new(num_merges: usize) -> Self {
        Self {
            num_merges,
            merge_mode: MergeMode::default(),
        }
    }

    /// Sets the merge budget.
    pub fn with_num_merges(
        self,
        num_merges: usize,
    ) -> Self {
        Self { num_merges, ..self }
    }

    /// Sets the merge budget from a signed value.
    ///
    /// ## Returns
    /// [`WordchunkError::InvalidConfiguration`] if `num_merges` is negative.
    pub fn try_with_signed_merges(
        self,
        num_merges: i64,
    ) -> WCResult<Self> {
        let num_merges = usize::try_from(num_merges)
            .map_err(|_| WordchunkError::InvalidConfiguration { num_merges })?;
        Ok(self.with_num_merges(num_merges))
    }

    /// Sets the merge mode.
    pub fn with_merge_mode(
        self,
        merge_mode: MergeMode,
    ) -> Self {
        Self { merge_mode, ..self }
    }

    /// Initializes a [`BpeVocabTrainer`] from these options.
    pub fn init<K, C>(self) -> BpeVocabTrainer<K, C>
    where
        K: StringChunkType,
        C: CountType,
    {
        BpeVocabTrainer::new(self)
    }
}

/// A [`Pair`] that could be merged.
#[derive(Debug, Eq)]
pub struct MergeJob<K: StringChunkType, C: CountType> {
    /// The number of instances of this pair when the job was queued.
    pub count: C,

    /// The first-seen rank of the pair.
    pub first_seen: usize,

    /// The pair to merge.
    pub pair: Pair<K>,
}

impl<K: StringChunkType, C: CountType> MergeJob<K, C> {
    /// The job key.
    ///
    /// Max-heap by [`PairStats::priority`].
    pub fn heap_key(&self) -> (C, Reverse<usize>) {
        PairStats {
            count: self.count,
            first_seen: self.first_seen,
        }
        .priority()
    }
}

impl<K: StringChunkType, C: CountType> PartialEq for MergeJob<K, C> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.heap_key() == other.heap_key()
    }
}

impl<K: StringChunkType, C: CountType> PartialOrd for MergeJob<K, C> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: StringChunkType, C: CountType> Ord for MergeJob<K, C> {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.heap_key().cmp(&other.heap_key())
    }
}

/// One performed merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRecord<K: StringChunkType, C: CountType> {
    /// The merged pair.
    pub pair: Pair<K>,

    /// The pair count at the time of the merge.
    pub count: C,

    /// Did the merged string add a new vocabulary entry?
    pub added: bool,
}

impl<K: StringChunkType, C: CountType> MergeRecord<K, C> {
    /// The merged string.
    pub fn merged(&self) -> String {
        let (a, b) = &self.pair;
        [a.as_ref(), b.as_ref()].concat()
    }
}

/// Training results.
#[derive(Debug, Clone)]
pub struct BpeTrainResults<K: StringChunkType, C: CountType> {
    /// The trained vocabulary.
    pub vocab: SubwordVocab,

    /// The merges, in the order they were performed.
    pub merges: Vec<MergeRecord<K, C>>,
}

/// Trainer for small BPE subword vocabularies.
///
/// The vocabulary is seeded with every distinct training word, then grows by
/// one merged-pair string per merge.
///
/// # Parameters
/// * `K` - the type used to store symbols.
/// * `C` - the type used to store counts.
#[derive(Debug, Clone)]
pub struct BpeVocabTrainer<K = CompactString, C = u32>
where
    K: StringChunkType,
    C: CountType,
{
    /// Trainer options.
    pub options: BpeTrainerOptions,

    /// Distinct words, in first-seen order.
    words: Vec<K>,

    /// Word -> `words` index.
    word_index: WCHashMap<K, usize>,

    /// `counts[i]` is the number of occurrences of `words[i]`.
    counts: Vec<C>,
}

impl<K, C> BpeVocabTrainer<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// Initializes a [`BpeVocabTrainer`].
    pub fn new(options: BpeTrainerOptions) -> Self {
        Self {
            options,
            words: Vec::new(),
            word_index: hash_map_new(),
            counts: Vec::new(),
        }
    }

    /// The number of distinct words seen.
    pub fn num_distinct_words(&self) -> usize {
        self.words.len()
    }

    /// Update word counts inplace from a word iterator.
    ///
    /// Empty words are ignored.
    pub fn update_from_words<I>(
        &mut self,
        words: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            match self.word_index.get(word) {
                Some(&idx) => self.counts[idx] += C::one(),
                None => {
                    let key = K::from(word);
                    self.word_index.insert(key.clone(), self.words.len());
                    self.words.push(key);
                    self.counts.push(C::one());
                }
            }
        }
    }

    /// Trains a [`SubwordVocab`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn train(self) -> SubwordVocab {
        self.train_with_results().vocab
    }

    /// Trains a [`SubwordVocab`], reporting the merges performed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn train_with_results(self) -> BpeTrainResults<K, C> {
        let vocab = SubwordVocab::from_words(&self.words);

        log::debug!(
            "Starting BPE training: {} distinct words, up to {} merges ({:?})",
            self.words.len(),
            self.options.num_merges,
            self.options.merge_mode,
        );

        let results = match self.options.merge_mode {
            MergeMode::Simplified => self.train_simplified(vocab),
            MergeMode::Iterative => self.train_iterative(vocab),
        };

        log::debug!(
            "Finished BPE training: {} merges, {} vocab entries",
            results.merges.len(),
            results.vocab.len()
        );
        results
    }

    fn train_simplified(
        self,
        mut vocab: SubwordVocab,
    ) -> BpeTrainResults<K, C> {
        let table: PairFrequencyTable<K, C> = PairFrequencyTable::from_weighted_words(
            self.words.iter().zip(self.counts.iter().copied()),
        );

        let zero = C::zero();
        let merges = table
            .ranked()
            .into_iter()
            .take_while(|(_, stats)| stats.count > zero)
            .take(self.options.num_merges)
            .map(|(pair, stats)| {
                let job = MergeJob {
                    count: stats.count,
                    first_seen: stats.first_seen,
                    pair: pair.clone(),
                };
                record_merge(&mut vocab, job)
            })
            .collect();

        BpeTrainResults { vocab, merges }
    }

    fn train_iterative(
        self,
        mut vocab: SubwordVocab,
    ) -> BpeTrainResults<K, C> {
        let num_merges = self.options.num_merges;

        let mut spans: Vec<SymbolSpanBuf<K>> = self
            .words
            .iter()
            .map(|w| SymbolSpanBuf::from_word(w.as_ref()))
            .collect();
        let counts = self.counts;

        let PairSpanIndex {
            mut pair_counts,
            mut pair_index,
        } = PairSpanIndex::from_span_count_table(&spans, &counts);

        let zero = C::zero();

        let mut heap = OctonaryHeap::with_capacity(pair_counts.len());
        for (pair, stats) in pair_counts.iter() {
            if stats.count > zero {
                heap.push(MergeJob {
                    count: stats.count,
                    first_seen: stats.first_seen,
                    pair: pair.clone(),
                });
            }
        }

        let mut merges = Vec::with_capacity(num_merges);
        while merges.len() < num_merges {
            let Some(mut job) = heap.pop() else {
                break;
            };

            {
                // Lazy refresh the job count.
                let current = pair_counts.count(&job.pair);
                if job.count != current {
                    job.count = current;
                    if job.count > zero {
                        heap.push(job);
                    }
                    continue;
                }
            }

            if job.count == zero {
                break;
            }

            let replacement = K::from(
                [job.pair.0.as_ref(), job.pair.1.as_ref()]
                    .concat()
                    .as_str(),
            );

            let word_indices = pair_index.remove(&job.pair).unwrap_or_default();
            let mut touched: Vec<Pair<K>> = Vec::new();
            let mut touched_set: WCHashSet<Pair<K>> = hash_set_new();

            for &idx in &word_indices {
                let count = counts[idx];
                spans[idx].merge_pair_cb(&job.pair, &replacement, &mut |pair, delta| {
                    if delta < 0 {
                        pair_counts.sub(&pair, count);
                    } else {
                        pair_index.entry(pair.clone()).or_default().insert(idx);
                        if touched_set.insert(pair.clone()) {
                            touched.push(pair.clone());
                        }
                        pair_counts.add(pair, count);
                    }
                });
            }

            // The merged pair is gone from every word it was in.
            pair_counts.remove(&job.pair);

            // New pairs all contain the replacement symbol, and are not yet queued.
            for pair in touched {
                if let Some(stats) = pair_counts.get(&pair)
                    && stats.count > zero
                {
                    heap.push(MergeJob {
                        count: stats.count,
                        first_seen: stats.first_seen,
                        pair,
                    });
                }
            }

            merges.push(record_merge(&mut vocab, job));
        }

        BpeTrainResults { vocab, merges }
    }
}

fn record_merge<K: StringChunkType, C: CountType>(
    vocab: &mut SubwordVocab,
    job: MergeJob<K, C>,
) -> MergeRecord<K, C> {
    let mut record = MergeRecord {
        pair: job.pair,
        count: job.count,
        added: false,
    };
    record.added = vocab.insert(&record.merged());

    log::trace!(
        "merge {:?} (count: {}) -> {:?}{}",
        record.pair,
        record.count,
        record.merged(),
        if record.added { "" } else { " (already known)" }
    );
    record
}

/// Train a vocabulary over `words` with the simplified merge mode.
///
/// This is the one-shot form of [`BpeVocabTrainer`].
pub fn train<I, S>(
    words: I,
    num_merges: usize,
) -> SubwordVocab
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut trainer: BpeVocabTrainer = BpeTrainerOptions::new(num_merges).init();
    trainer.update_from_words(words);
    trainer.train()
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use super::*;
    use crate::compat::traits::static_is_send_sync_check;

    type K = CompactString;
    type C = u32;

    fn train_results(
        words: &[&str],
        options: BpeTrainerOptions,
    ) -> BpeTrainResults<K, C> {
        let mut trainer = options.init::<K, C>();
        trainer.update_from_words(words);
        trainer.train_with_results()
    }

    fn merged(results: &BpeTrainResults<K, C>) -> Vec<String> {
        results.merges.iter().map(MergeRecord::merged).collect()
    }

    #[test]
    fn test_trainer_options() {
        let options = BpeTrainerOptions::default();
        assert_eq!(options.num_merges, DEFAULT_NUM_MERGES);
        assert_eq!(options.merge_mode, MergeMode::Simplified);

        let options = options
            .with_num_merges(3)
            .with_merge_mode(MergeMode::Iterative);
        assert_eq!(options.num_merges, 3);
        assert_eq!(options.merge_mode, MergeMode::Iterative);

        let options = options.try_with_signed_merges(7).unwrap();
        assert_eq!(options.num_merges, 7);

        assert!(matches!(
            BpeTrainerOptions::default().try_with_signed_merges(-1),
            Err(WordchunkError::InvalidConfiguration { num_merges: -1 })
        ));
    }

    #[test]
    fn test_left_right_example() {
        let results = train_results(&["left", "right"], BpeTrainerOptions::new(2));

        // Every pair has count 1; the first two seen win.
        assert_eq!(merged(&results), vec!["le", "ef"]);
        assert_eq!(
            results.vocab,
            SubwordVocab::from_words(["left", "right", "le", "ef"])
        );
        assert_eq!(results.vocab.len(), 4);
    }

    #[test]
    fn test_most_frequent_first() {
        let results = train_results(
            &["night", "right", "light", "nil"],
            BpeTrainerOptions::new(4),
        );
        // ig/gh/ht: 3 each, in first-seen order; then ni (2).
        assert_eq!(merged(&results), vec!["ig", "gh", "ht", "ni"]);
        assert_eq!(
            results.merges.iter().map(|m| m.count).collect::<Vec<_>>(),
            vec![3, 3, 3, 2]
        );
    }

    #[test]
    fn test_duplicate_words_weigh_pairs() {
        let results = train_results(&["ab", "cd", "cd"], BpeTrainerOptions::new(1));
        assert_eq!(merged(&results), vec!["cd"]);
        // "cd" was already a word.
        assert!(!results.merges[0].added);
        assert_eq!(results.vocab, SubwordVocab::from_words(["ab", "cd"]));
    }

    #[test]
    fn test_zero_merges() {
        let words = ["left", "right", "left"];
        let results = train_results(&words, BpeTrainerOptions::new(0));
        assert!(results.merges.is_empty());
        assert_eq!(results.vocab, SubwordVocab::from_words(words));
    }

    #[test]
    fn test_budget_exceeds_pairs() {
        let results = train_results(&["abc", "x"], BpeTrainerOptions::new(100));
        assert_eq!(merged(&results), vec!["ab", "bc"]);
        assert_eq!(results.vocab.len(), 4);
    }

    #[test]
    fn test_empty_input() {
        let results = train_results(&[], BpeTrainerOptions::new(10));
        assert!(results.vocab.is_empty());
        assert!(results.merges.is_empty());

        let results = train_results(&["", "a"], BpeTrainerOptions::new(10));
        assert_eq!(results.vocab, SubwordVocab::from_words(["a"]));
        assert!(results.merges.is_empty());
    }

    #[test]
    fn test_train_fn() {
        let vocab = train(["left", "right"], 2);
        assert_eq!(vocab, SubwordVocab::from_words(["left", "right", "le", "ef"]));
        static_is_send_sync_check(&vocab);
    }

    #[test]
    fn test_iterative_merges() {
        let options = BpeTrainerOptions::new(3).with_merge_mode(MergeMode::Iterative);
        let results = train_results(&["abab", "abc"], options);

        // (a, b): 3; then (ab, ab) and (ab, c) at 1 each; (ab, ab) was seen first.
        assert_eq!(merged(&results), vec!["ab", "abab", "abc"]);
        assert_eq!(
            results.merges.iter().map(|m| m.count).collect::<Vec<_>>(),
            vec![3, 1, 1]
        );
        assert_eq!(
            results.merges.iter().map(|m| m.added).collect::<Vec<_>>(),
            vec![true, false, false]
        );
        assert_eq!(results.vocab, SubwordVocab::from_words(["abab", "abc", "ab"]));
    }

    #[test]
    fn test_iterative_differs_from_simplified() {
        let words = ["lower", "lowest", "low"];

        let simplified = train_results(&words, BpeTrainerOptions::new(3));
        assert_eq!(merged(&simplified), vec!["lo", "ow", "we"]);

        let iterative = train_results(
            &words,
            BpeTrainerOptions::new(3).with_merge_mode(MergeMode::Iterative),
        );
        assert_eq!(merged(&iterative), vec!["lo", "low", "lowe"]);
    }

    #[test]
    fn test_iterative_exhausts() {
        let options = BpeTrainerOptions::new(50).with_merge_mode(MergeMode::Iterative);
        let results = train_results(&["aaaa"], options);

        // aaaa -> (aa)(aa) -> (aaaa)
        assert_eq!(merged(&results), vec!["aa", "aaaa"]);
        assert_eq!(results.vocab, SubwordVocab::from_words(["aaaa", "aa"]));
    }

    #[test]
    fn test_merge_job_heap_key() {
        let job1: MergeJob<K, C> = MergeJob {
            count: 2,
            first_seen: 5,
            pair: ("a".into(), "b".into()),
        };
        let job2: MergeJob<K, C> = MergeJob {
            count: 1,
            first_seen: 0,
            pair: ("b".into(), "a".into()),
        };
        let job3: MergeJob<K, C> = MergeJob {
            count: 1,
            first_seen: 3,
            pair: ("b".into(), "b".into()),
        };

        assert_eq!(&job1, &job1);
        assert_ne!(&job1, &job2);

        assert_eq!(job1.heap_key(), (2, Reverse(5)));
        assert_eq!(job1.cmp(&job2), Ordering::Greater);
        // Same count: the earlier seen pair is greater.
        assert_eq!(job2.cmp(&job3), Ordering::Greater);
        assert_eq!(job3.partial_cmp(&job2), Some(Ordering::Less));

        let mut heap = OctonaryHeap::from(vec![job3, job1, job2]);
        assert_eq!(heap.pop().unwrap().first_seen, 5);
        assert_eq!(heap.pop().unwrap().first_seen, 0);
        assert_eq!(heap.pop().unwrap().first_seen, 3);
    }
}
