use wordchunk::{
    PipelineOptions,
    WCResult,
    pipeline::VocabScope,
    text::StopwordFilter,
    training::{DEFAULT_NUM_MERGES, MergeMode},
};

/// Which words each subword vocabulary is trained over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum VocabScopeArg {
    /// A fresh vocabulary per sentence.
    #[default]
    Sentence,

    /// One vocabulary for the whole input.
    Document,
}

impl From<VocabScopeArg> for VocabScope {
    fn from(scope: VocabScopeArg) -> Self {
        match scope {
            VocabScopeArg::Sentence => VocabScope::PerSentence,
            VocabScopeArg::Document => VocabScope::PerDocument,
        }
    }
}

/// Merge budget and mode arg group.
#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// The merge budget of each trained vocabulary.
    #[arg(long, default_value_t = DEFAULT_NUM_MERGES as i64, allow_negative_numbers = true)]
    pub num_merges: i64,

    /// Use classic iterative BPE merging.
    #[arg(long)]
    pub iterative: bool,
}

impl Default for MergeArgs {
    fn default() -> Self {
        Self {
            num_merges: DEFAULT_NUM_MERGES as i64,
            iterative: false,
        }
    }
}

impl MergeArgs {
    /// The selected merge mode.
    pub fn merge_mode(&self) -> MergeMode {
        if self.iterative {
            MergeMode::Iterative
        } else {
            MergeMode::Simplified
        }
    }
}

/// Pipeline configuration arg group.
#[derive(clap::Args, Debug, Default)]
pub struct PipelineArgs {
    /// Apply subword segmentation.
    #[arg(long)]
    pub subword: bool,

    #[command(flatten)]
    pub merges: MergeArgs,

    /// The vocabulary training scope.
    #[arg(long, value_enum, default_value_t = VocabScopeArg::Sentence)]
    pub vocab_scope: VocabScopeArg,

    /// Additional stopwords; may be repeated.
    #[arg(long = "stopword")]
    pub stopwords: Vec<String>,

    /// Start from an empty stopword list.
    #[arg(long)]
    pub no_stopwords: bool,
}

impl PipelineArgs {
    /// Build the pipeline options.
    ///
    /// Fails when the merge budget is negative.
    pub fn options(&self) -> WCResult<PipelineOptions> {
        let stopwords = if self.no_stopwords {
            StopwordFilter::empty()
        } else {
            StopwordFilter::default()
        }
        .with_words(&self.stopwords);

        Ok(PipelineOptions::default()
            .with_subword(self.subword)
            .try_with_signed_merges(self.merges.num_merges)?
            .with_merge_mode(self.merges.merge_mode())
            .with_vocab_scope(self.vocab_scope.into())
            .with_stopwords(stopwords))
    }
}
