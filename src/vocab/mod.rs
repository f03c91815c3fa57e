// ============================================================
// Layer 5 — Vocabulary Layer
// ============================================================
// Turns training captions into a word ↔ id mapping.
//
//   tokenizer.rs  — Penn Treebank style word tokenizer.
//                   Splits punctuation and clitics ("dog's" →
//                   "dog" "'s", "isn't" → "is" "n't").
//
//   vocabulary.rs — Counts tokens over the whole corpus, keeps
//                   those seen at least `threshold` times and
//                   assigns ids after the four reserved tokens:
//                     <unk>=0  <start>=1  <end>=2  <pad>=3
//
// Reference: Rust Book §8 (Hash Maps)
//            Penn Treebank tokenisation conventions

/// Treebank word tokenizer
pub mod tokenizer;

/// Frequency-thresholded word ↔ id mapping
pub mod vocabulary;
