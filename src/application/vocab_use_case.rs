// ============================================================
// Layer 2 — VocabUseCase
// ============================================================
// Builds the vocabulary from a partition's captions.txt:
//
//   Step 1: Load <captions_dir>/captions.txt     (Layer 4 - data)
//   Step 2: Build the thresholded vocabulary     (Layer 5 - vocab)
//   Step 3: Save it as JSON, if asked to         (Layer 6 - infra)
//
// Reference: Rust Book §9 (Error Handling with anyhow)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::records::CaptionRecords;
use crate::domain::traits::{CaptionSource, Persistable};
use crate::vocab::vocabulary::Vocabulary;

// ─── Vocabulary Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabConfig {
    /// Partition directory whose captions.txt feeds the vocabulary
    pub captions_dir: PathBuf,
    /// Minimum corpus frequency for a token to get its own id
    pub threshold:    usize,
    /// Where to write the vocabulary JSON; nothing is written if None
    pub output:       Option<PathBuf>,
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            captions_dir: PathBuf::from("train"),
            threshold:    5,
            output:       None,
        }
    }
}

pub struct VocabUseCase {
    config: VocabConfig,
}

impl VocabUseCase {
    pub fn new(config: VocabConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<Vocabulary> {
        let cfg = &self.config;

        // ── Step 1: Load training captions ───────────────────────────────────
        let captions = CaptionRecords::new(&cfg.captions_dir)
            .load_captions()
            .with_context(|| {
                format!("Cannot load captions from '{}'", cfg.captions_dir.display())
            })?;
        tracing::info!("Loaded captions for {} images", captions.len());

        // ── Step 2: Build ────────────────────────────────────────────────────
        let vocab = Vocabulary::new(&captions, cfg.threshold);

        // ── Step 3: Save ─────────────────────────────────────────────────────
        if let Some(path) = &cfg.output {
            vocab.save(path)?;
            tracing::info!("Saved vocabulary to '{}'", path.display());
        }

        Ok(vocab)
    }
}
