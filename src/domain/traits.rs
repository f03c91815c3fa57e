// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// the segregator and the vocabulary builder never care where
// captions come from or how sentences are cut into tokens.
//
//   - TokenFile and CaptionRecords both implement CaptionSource
//   - TreebankTokenizer implements WordTokenizer
//   - Vocabulary implements Persistable
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::path::Path;

use crate::domain::{caption_record::CaptionsDict, error::PrepError};

// ─── CaptionSource ────────────────────────────────────────────────────────────
/// Any component that can produce an image id → captions mapping.
///
/// Implementations:
///   - TokenFile      → the raw tab-separated caption source
///   - CaptionRecords → a partition's captions.txt
pub trait CaptionSource {
    /// Load every caption, keyed by image id, in source order.
    fn load_captions(&self) -> std::result::Result<CaptionsDict, PrepError>;
}

// ─── WordTokenizer ────────────────────────────────────────────────────────────
/// Splits one piece of text into word and punctuation tokens.
/// Must be deterministic: the same input always yields the same tokens.
pub trait WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

// ─── Persistable ──────────────────────────────────────────────────────────────
/// Any component whose state can be saved and restored from disk.
///
/// Implementations:
///   - Vocabulary → saves/loads its id-ordered word list
pub trait Persistable: Sized {
    /// Save this component's state to the given path
    fn save(&self, path: &Path) -> Result<()>;

    /// Load a component's state from the given path.
    fn load(path: &Path) -> Result<Self>;
}
