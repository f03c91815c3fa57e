// ============================================================
// Layer 2 — SegregateUseCase
// ============================================================
// Resolves the configured paths and runs the segregator:
//
//   Step 1: Resolve caption source and id-list paths
//   Step 2: Split images and captions into train/ dev/ test/
//   Step 3: Log per-partition counts and elapsed time
//
// Reference: Rust Book §9 (Error Handling with anyhow)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Instant};

use crate::data::{
    caption_reader::TokenFile,
    segregator::{PartitionIdPaths, SegregationSummary, Segregator},
};

// ─── Segregation Configuration ───────────────────────────────────────────────
// Defaults match the Flickr8k archive layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegregateConfig {
    /// Flat directory holding every image of the corpus
    pub images_dir:  PathBuf,
    /// Directory holding the caption source and the id lists
    pub text_dir:    PathBuf,
    pub token_file:  String,
    pub train_file:  String,
    pub dev_file:    String,
    pub test_file:   String,
    /// Root under which train/ dev/ test/ are created
    pub output_dir:  PathBuf,
}

impl Default for SegregateConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("flickr8k/Flickr_Data/Flickr_Data/Images/"),
            text_dir:   PathBuf::from("flickr8k/Flickr_Data/Flickr_Data/Flickr_TextData/"),
            token_file: "Flickr8k.token.txt".to_string(),
            train_file: "Flickr_8k.trainImages.txt".to_string(),
            dev_file:   "Flickr_8k.devImages.txt".to_string(),
            test_file:  "Flickr_8k.testImages.txt".to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl SegregateConfig {
    pub fn token_path(&self) -> PathBuf {
        self.text_dir.join(&self.token_file)
    }

    pub fn id_paths(&self) -> PartitionIdPaths {
        PartitionIdPaths {
            train: self.text_dir.join(&self.train_file),
            dev:   self.text_dir.join(&self.dev_file),
            test:  self.text_dir.join(&self.test_file),
        }
    }
}

// ─── SegregateUseCase ─────────────────────────────────────────────────────────
pub struct SegregateUseCase {
    config: SegregateConfig,
}

impl SegregateUseCase {
    pub fn new(config: SegregateConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<SegregationSummary> {
        let cfg = &self.config;

        // ── Step 1: Resolve paths ────────────────────────────────────────────
        let source   = TokenFile::new(cfg.token_path());
        let id_paths = cfg.id_paths();
        tracing::info!("Reading captions from '{}'", source.path().display());

        // ── Step 2: Split ────────────────────────────────────────────────────
        let started = Instant::now();
        let summary = Segregator::new(&cfg.output_dir)
            .segregate(&cfg.images_dir, &source, &id_paths)
            .with_context(|| {
                format!(
                    "Segregation of '{}' into '{}' failed",
                    cfg.images_dir.display(),
                    cfg.output_dir.display()
                )
            })?;

        // ── Step 3: Report ───────────────────────────────────────────────────
        for p in &summary.partitions {
            tracing::info!(
                "{}: {} ids, {} images, {} caption records",
                p.partition,
                p.ids,
                p.images_copied,
                p.records_written
            );
        }
        tracing::info!("time: {:.2} mins", started.elapsed().as_secs_f64() / 60.0);

        Ok(summary)
    }
}
