// ============================================================
// Layer 5 — Vocabulary
// ============================================================
// A bidirectional word ↔ id mapping built once from training
// captions and read-only afterwards.
//
// Build steps:
//   1. Lower-case every caption and tokenize it
//   2. Count how often each token occurs over the whole corpus
//   3. Keep tokens with count >= threshold, in FIRST-SEEN order
//   4. Assign ids: <unk>=0 <start>=1 <end>=2 <pad>=3, then the
//      kept tokens as 4, 5, 6, ...
//
// Step 3 uses an IndexMap for the counts so that id assignment
// is reproducible across runs; a HashMap would iterate in a
// different order every time.
//
// The two directions live in two containers:
//   word2id: HashMap<String, usize>   word → id
//   id2word: Vec<String>              id → word (index = id)
// Only add_word() touches them, and it updates both.
//
// Reference: Rust Book §8 (Hash Maps)

use indexmap::IndexMap;
use std::collections::HashMap;

use crate::domain::{
    caption_record::CaptionsDict,
    error::PrepError,
    traits::WordTokenizer,
};
use crate::vocab::tokenizer::TreebankTokenizer;

pub const UNK:   &str = "<unk>";
pub const START: &str = "<start>";
pub const END:   &str = "<end>";
pub const PAD:   &str = "<pad>";

/// Reserved tokens in id order. Always ids 0..4.
pub const SPECIAL_TOKENS: [&str; 4] = [UNK, START, END, PAD];

pub const UNK_ID:   usize = 0;
pub const START_ID: usize = 1;
pub const END_ID:   usize = 2;
pub const PAD_ID:   usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    word2id: HashMap<String, usize>,
    id2word: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from `captions` using the Treebank tokenizer.
    /// Tokens seen at least `threshold` times get their own id.
    pub fn new(captions: &CaptionsDict, threshold: usize) -> Self {
        Self::build_with(&TreebankTokenizer::new(), captions, threshold)
    }

    /// Build a vocabulary with any tokenizer.
    pub fn build_with<T: WordTokenizer + ?Sized>(
        tokenizer: &T,
        captions:  &CaptionsDict,
        threshold: usize,
    ) -> Self {
        // ── Steps 1 + 2: tokenize and count in first-seen order ──────────────
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        let mut total = 0usize;

        for caption in captions.values().flatten() {
            for token in tokenizer.tokenize(&caption.to_lowercase()) {
                *counts.entry(token).or_insert(0) += 1;
                total += 1;
            }
        }

        // ── Steps 3 + 4: reserved tokens, then qualifying tokens ─────────────
        let mut vocab = Self::with_special_tokens();
        for (word, _) in counts.iter().filter(|(_, count)| **count >= threshold) {
            vocab.add_word(word);
        }

        tracing::info!(
            "Vocabulary built: {} tokens in corpus, {} distinct, {} ids (threshold {})",
            total,
            counts.len(),
            vocab.len(),
            threshold
        );

        vocab
    }

    /// Rebuild a vocabulary from its words in id order.
    ///
    /// Fails if the first four words are not the reserved tokens
    /// or if any word appears twice.
    pub fn from_words(words: Vec<String>) -> Result<Self, PrepError> {
        if words.len() < SPECIAL_TOKENS.len()
            || words.iter().zip(SPECIAL_TOKENS).any(|(w, s)| w != s)
        {
            return Err(PrepError::InvalidVocabulary(format!(
                "must start with {}",
                SPECIAL_TOKENS.join(" ")
            )));
        }

        let mut vocab = Self::empty();
        for word in &words {
            if vocab.word2id.contains_key(word) {
                return Err(PrepError::InvalidVocabulary(format!(
                    "word '{word}' appears more than once"
                )));
            }
            vocab.add_word(word);
        }
        Ok(vocab)
    }

    /// No ids at all. Only a starting point for the constructors,
    /// which always add the reserved tokens first.
    fn empty() -> Self {
        Self {
            word2id: HashMap::new(),
            id2word: Vec::new(),
        }
    }

    fn with_special_tokens() -> Self {
        let mut vocab = Self::empty();
        for token in SPECIAL_TOKENS {
            vocab.add_word(token);
        }
        vocab
    }

    /// Give `word` the next free id unless it already has one.
    fn add_word(&mut self, word: &str) {
        if !self.word2id.contains_key(word) {
            self.word2id.insert(word.to_string(), self.id2word.len());
            self.id2word.push(word.to_string());
        }
    }

    /// Id of `word`, or the id of <unk> if the word has none.
    pub fn get_id(&self, word: &str) -> usize {
        self.word2id.get(word).copied().unwrap_or(UNK_ID)
    }

    /// Word assigned to `id`.
    pub fn get_word(&self, id: usize) -> Result<&str, PrepError> {
        self.id2word
            .get(id)
            .map(String::as_str)
            .ok_or(PrepError::UnknownTokenId(id))
    }

    /// Decode ids into a sentence, stopping after the first <end>.
    ///
    /// Every token, the first included, is preceded by one space:
    /// `[1, 7, 2, 9]` gives `" <start> dog <end>"`.
    pub fn get_sentence(&self, ids: &[usize]) -> Result<String, PrepError> {
        let mut sentence = String::new();
        for &id in ids {
            let word = self.get_word(id)?;
            sentence.push(' ');
            sentence.push_str(word);
            if word == END {
                break;
            }
        }
        Ok(sentence)
    }

    /// Encode one caption as `<start> tokens... <end>` ids, using the
    /// same lower-casing and tokenizer as the build.
    pub fn encode(&self, caption: &str) -> Vec<usize> {
        self.encode_with(&TreebankTokenizer::new(), caption)
    }

    pub fn encode_with<T: WordTokenizer + ?Sized>(&self, tokenizer: &T, caption: &str) -> Vec<usize> {
        std::iter::once(START_ID)
            .chain(
                tokenizer
                    .tokenize(&caption.to_lowercase())
                    .iter()
                    .map(|token| self.get_id(token)),
            )
            .chain(std::iter::once(END_ID))
            .collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.word2id.contains_key(word)
    }

    /// Number of assigned ids, never less than 4
    pub fn len(&self) -> usize {
        self.id2word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id2word.is_empty()
    }

    /// All words, indexed by id
    pub fn words(&self) -> &[String] {
        &self.id2word
    }
}
