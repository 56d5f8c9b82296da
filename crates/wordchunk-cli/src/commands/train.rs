use std::io::Write;

use wordchunk::{
    WordchunkError,
    text::WordSplitter,
    training::{BpeTrainResults, BpeTrainerOptions, BpeVocabTrainer},
};

use crate::{
    input_output::{InputArgs, OutputArgs, OutputFormat},
    logging::LogArgs,
    pipeline_args::MergeArgs,
};

type TrainResults = BpeTrainResults<String, u32>;

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    merges: MergeArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl TrainArgs {
    /// Run the train command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let options = BpeTrainerOptions::default()
            .try_with_signed_merges(self.merges.num_merges)?
            .with_merge_mode(self.merges.merge_mode());

        let bytes = self.input.read_bytes()?;
        let text = core::str::from_utf8(&bytes).map_err(WordchunkError::from)?;
        let words = WordSplitter::default().split(text)?;

        let mut trainer: BpeVocabTrainer<String, u32> = options.init();
        trainer.update_from_words(&words);
        log::info!(
            "Training over {} words ({} distinct)...",
            words.len(),
            trainer.num_distinct_words()
        );

        let results = trainer.train_with_results();
        log::info!("Vocabulary Size: {}", results.vocab.len());

        let mut writer = self.output.open_writer()?;
        write_results(&mut writer, &results, self.format)?;
        writer.flush()?;

        Ok(())
    }
}

/// Write the merges, then the sorted vocabulary.
fn write_results(
    writer: &mut dyn Write,
    results: &TrainResults,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Text => {
            writeln!(writer, "# merges")?;
            for merge in &results.merges {
                let (a, b) = &merge.pair;
                writeln!(
                    writer,
                    "{a} {b} -> {} ({}{})",
                    merge.merged(),
                    merge.count,
                    if merge.added { "" } else { ", known" }
                )?;
            }
            writeln!(writer, "# vocab")?;
            for entry in results.vocab.sorted_entries() {
                writeln!(writer, "{entry}")?;
            }
        }
        OutputFormat::Json => {
            let merges: Vec<serde_json::Value> = results
                .merges
                .iter()
                .map(|merge| {
                    serde_json::json!({
                        "pair": [merge.pair.0.as_str(), merge.pair.1.as_str()],
                        "count": merge.count,
                        "added": merge.added,
                    })
                })
                .collect();
            let doc = serde_json::json!({
                "merges": merges,
                "vocab": results.vocab.sorted_entries(),
            });
            serde_json::to_writer(&mut *writer, &doc)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
