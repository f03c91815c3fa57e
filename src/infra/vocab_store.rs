// ============================================================
// Layer 6 — Vocabulary Store
// ============================================================
// Persists a Vocabulary as JSON:
//
//   {
//     "words": ["<unk>", "<start>", "<end>", "<pad>", "a", ...]
//   }
//
// The list index IS the id, so only the words are stored and
// both lookup directions are rebuilt on load. Loading goes
// through Vocabulary::from_words, which rejects files whose
// reserved tokens are out of place or that repeat a word.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json documentation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::domain::traits::Persistable;
use crate::vocab::vocabulary::Vocabulary;

/// On-disk shape of a saved vocabulary
#[derive(Debug, Serialize, Deserialize)]
struct VocabFile {
    words: Vec<String>,
}

impl Persistable for Vocabulary {
    fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create '{}'", parent.display()))?;
        }

        let file = File::create(path)
            .with_context(|| format!("Cannot write vocabulary to '{}'", path.display()))?;
        let mut writer = BufWriter::new(file);

        let contents = VocabFile { words: self.words().to_vec() };
        serde_json::to_writer_pretty(&mut writer, &contents)?;
        writer.flush()?;

        tracing::debug!("Saved {} vocabulary words to '{}'", self.len(), path.display());
        Ok(())
    }

    fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Cannot read vocabulary from '{}'", path.display()))?;

        let contents: VocabFile = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("'{}' is not a vocabulary file", path.display()))?;

        let vocab = Vocabulary::from_words(contents.words)
            .with_context(|| format!("Rejected vocabulary '{}'", path.display()))?;

        tracing::debug!("Loaded {} vocabulary words from '{}'", vocab.len(), path.display());
        Ok(vocab)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::caption_record::CaptionsDict;

    #[test]
    fn test_save_and_load() {
        let mut captions = CaptionsDict::new();
        captions.insert("1.jpg".into(), vec!["a dog runs .".into(), "a dog .".into()]);
        let vocab = Vocabulary::new(&captions, 1);

        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("vocab.json");
        vocab.save(&path).unwrap();

        let loaded = Vocabulary::load(&path).unwrap();
        assert_eq!(loaded, vocab);
        assert_eq!(loaded.get_id("runs"), vocab.get_id("runs"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Vocabulary::load(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_load_rejects_reordered_reserved_tokens() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(&path, r#"{"words": ["<pad>", "<start>", "<end>", "<unk>"]}"#).unwrap();
        assert!(Vocabulary::load(&path).is_err());
    }
}
