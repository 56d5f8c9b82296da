use std::io::Write;

use wordchunk::{TextChunker, TextPipeline, chunking::Chunk, rayon::ParallelRayonPipeline};

use crate::{
    input_output::{InputArgs, OutputArgs, OutputFormat},
    logging::LogArgs,
    pipeline_args::PipelineArgs,
};

/// Args for the chunk command.
#[derive(clap::Args, Debug)]
pub struct ChunkArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    pipeline: PipelineArgs,

    /// Process sentences in parallel.
    #[arg(long)]
    parallel: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl ChunkArgs {
    /// Run the chunk command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let options = self.pipeline.options()?;
        log::info!("pipeline options: {options:?}");
        let pipeline = TextPipeline::new(options)?;

        let bytes = self.input.read_bytes()?;
        let chunks = if self.parallel {
            ParallelRayonPipeline::new(pipeline).try_tokenize_bytes(&bytes)?
        } else {
            pipeline.try_tokenize_bytes(&bytes)?
        };
        log::info!("{} chunks", chunks.len());

        let mut writer = self.output.open_writer()?;
        write_chunks(&mut writer, &chunks, self.format)?;
        writer.flush()?;

        Ok(())
    }
}

/// Write chunks in the selected format.
fn write_chunks(
    writer: &mut dyn Write,
    chunks: &[Chunk],
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Text => {
            for chunk in chunks {
                writeln!(writer, "{}", chunk.join(" "))?;
            }
        }
        OutputFormat::Json => {
            let tokens: Vec<&[String]> = chunks.iter().map(Chunk::tokens).collect();
            serde_json::to_writer(&mut *writer, &tokens)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
