// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Uses `clap` to turn
// command line flags into resolved paths, then hands off to
// Layer 2 (application). No preprocessing happens here.
//
// Two commands are supported:
//   1. `segregate` — splits the corpus into train/dev/test
//   2. `vocab`     — builds a vocabulary from a partition
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, SegregateArgs, VocabArgs};

#[derive(Parser, Debug)]
#[command(
    name = "caption-prep",
    version = "0.1.0",
    about = "Split an image captioning corpus into train/dev/test and build its vocabulary."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Segregate(args) => run_segregate(args),
            Commands::Vocab(args)     => run_vocab(args),
        }
    }
}

fn run_segregate(args: SegregateArgs) -> Result<()> {
    use crate::application::segregate_use_case::SegregateUseCase;

    let summary = SegregateUseCase::new(args.into()).execute()?;

    println!(
        "Copied {} images and wrote {} caption records.",
        summary.total_images(),
        summary.total_records()
    );
    Ok(())
}

fn run_vocab(args: VocabArgs) -> Result<()> {
    use crate::application::vocab_use_case::VocabUseCase;

    let vocab = VocabUseCase::new(args.into()).execute()?;

    println!("Vocabulary size: {}", vocab.len());
    Ok(())
}
