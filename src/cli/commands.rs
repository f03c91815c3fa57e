// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `segregate` and `vocab`, and
// their flags. Each Args struct converts into the matching
// application-layer config, so Layer 2 never sees clap types.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::{
    segregate_use_case::SegregateConfig,
    vocab_use_case::VocabConfig,
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split the image corpus into train/, dev/ and test/
    Segregate(SegregateArgs),

    /// Build a vocabulary from a partition's captions.txt
    Vocab(VocabArgs),
}

#[derive(Args, Debug)]
pub struct SegregateArgs {
    /// Directory containing every image of the corpus
    #[arg(long, default_value = "flickr8k/Flickr_Data/Flickr_Data/Images/")]
    pub images_dir: PathBuf,

    /// Directory containing the caption source and id lists
    #[arg(long, default_value = "flickr8k/Flickr_Data/Flickr_Data/Flickr_TextData/")]
    pub text_dir: PathBuf,

    /// Caption source file name, inside --text-dir
    #[arg(long, default_value = "Flickr8k.token.txt")]
    pub token_file: String,

    #[arg(long, default_value = "Flickr_8k.trainImages.txt")]
    pub train_file: String,

    #[arg(long, default_value = "Flickr_8k.devImages.txt")]
    pub dev_file: String,

    #[arg(long, default_value = "Flickr_8k.testImages.txt")]
    pub test_file: String,

    /// Where train/, dev/ and test/ are created
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl From<SegregateArgs> for SegregateConfig {
    fn from(a: SegregateArgs) -> Self {
        SegregateConfig {
            images_dir: a.images_dir,
            text_dir:   a.text_dir,
            token_file: a.token_file,
            train_file: a.train_file,
            dev_file:   a.dev_file,
            test_file:  a.test_file,
            output_dir: a.output_dir,
        }
    }
}

#[derive(Args, Debug)]
pub struct VocabArgs {
    /// Partition directory holding captions.txt
    #[arg(long, default_value = "train")]
    pub captions_dir: PathBuf,

    /// Tokens seen fewer times than this map to <unk>
    #[arg(long, default_value_t = 5)]
    pub threshold: usize,

    /// Write the vocabulary as JSON to this path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl From<VocabArgs> for VocabConfig {
    fn from(a: VocabArgs) -> Self {
        VocabConfig {
            captions_dir: a.captions_dir,
            threshold:    a.threshold,
            output:       a.output,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_segregate_defaults_match_config_defaults() {
        let cli = Cli::try_parse_from(["caption-prep", "segregate"]).unwrap();
        let Commands::Segregate(args) = cli.command else {
            panic!("expected segregate");
        };
        let cfg: SegregateConfig = args.into();
        let def = SegregateConfig::default();
        assert_eq!(cfg.token_path(), def.token_path());
        assert_eq!(cfg.output_dir, def.output_dir);
    }

    #[test]
    fn test_vocab_flags() {
        let cli = Cli::try_parse_from([
            "caption-prep", "vocab", "--threshold", "3", "--output", "vocab.json",
        ])
        .unwrap();
        let Commands::Vocab(args) = cli.command else {
            panic!("expected vocab");
        };
        let cfg: VocabConfig = args.into();
        assert_eq!(cfg.threshold, 3);
        assert_eq!(cfg.output, Some(PathBuf::from("vocab.json")));
        assert_eq!(cfg.captions_dir, PathBuf::from("train"));
    }
}
