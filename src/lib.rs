// ============================================================
// caption-prep
// ============================================================
// Prepares an image captioning corpus for training:
//
//   segregate  — copies images into train/ dev/ test/ and writes
//                one caption record per image to captions.txt
//   Vocabulary — word ↔ id mapping built from training captions,
//                with <unk> <start> <end> <pad> fixed at ids 0..4
//
// Layers, outermost first:
//
//   cli          Layer 1 — clap commands (binary entry point)
//   application  Layer 2 — use cases wiring the layers below
//   domain       Layer 3 — plain types, traits, error taxonomy
//   data         Layer 4 — file formats and the segregator
//   vocab        Layer 5 — tokenizer and vocabulary
//   infra        Layer 6 — vocabulary persistence

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod vocab;
pub mod infra;

pub use data::records::load_captions;
pub use data::segregator::{segregate, PartitionIdPaths, SegregationSummary};
pub use domain::{caption_record::CaptionsDict, error::PrepError, partition::Partition};
pub use vocab::vocabulary::Vocabulary;
