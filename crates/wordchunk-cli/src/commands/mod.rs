use crate::commands::{chunk::ChunkArgs, train::TrainArgs};

pub mod chunk;
pub mod train;

/// Subcommands for wordchunk
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Split text into chunks of (sub)word tokens.
    Chunk(ChunkArgs),

    /// Train a subword vocabulary and print the merges.
    Train(TrainArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Chunk(cmd) => cmd.run(),
            Commands::Train(cmd) => cmd.run(),
        }
    }
}
