// ============================================================
// Layer 5 — Treebank Word Tokenizer
// ============================================================
// Regex rewrite rules in the Penn Treebank tradition. Text is
// first cut into sentences, then each sentence goes through the
// rule stages below. Each stage pads tokens with spaces; the
// result is split on whitespace at the end.
//
//   0. Sentences           a dog runs. a cat sits.
//                          → "a dog runs." | "a cat sits."
//   1. Starting quotes     "hello   → `` hello     “big → “ big
//   2. Punctuation         a, b    → a , b     "end."  → end .
//   3. Brackets            (x)     → ( x )
//   4. Double dashes       a--b    → a -- b
//   5. Ending quotes and clitics
//                          dog's   → dog 's    isn't   → is n't
//   6. Split contractions  cannot  → can not   gonna   → gon na
//
// A word ending in '.' ends a sentence unless it is a known
// abbreviation ("mr.", "st."), a single-letter initial ("j.")
// or an acronym with inner periods ("u.s.").
//
// Input is NOT lower-cased here; the vocabulary does that
// before calling tokenize().
//
// The `regex` crate has no look-around, so every rule is
// written with plain capture groups and character-class
// subtraction.
//
// Reference: regex crate documentation
//            once_cell crate documentation (lazy statics)

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::traits::WordTokenizer;

/// One substitution: every match of `pattern` is replaced with
/// `replacement` (regex `$N` syntax).
struct Rule {
    pattern:     Regex,
    replacement: &'static str,
}

/// Compile a rule table. A pattern that fails to compile is logged
/// and dropped; test_all_rules_compile counts every table.
fn compile(rules: &[(&str, &'static str)]) -> Vec<Rule> {
    rules
        .iter()
        .filter_map(|&(pattern, replacement)| match Regex::new(pattern) {
            Ok(compiled) => Some(Rule { pattern: compiled, replacement }),
            Err(e) => {
                tracing::error!("Invalid tokenizer rule '{}': {}", pattern, e);
                None
            }
        })
        .collect()
}

static STARTING_QUOTES: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (r"([«“‘„]|`+)", " ${1} "),
        (r#"^""#, "``"),
        (r"(``)", " ${1} "),
        (r#"([ (\[{<])("|'')"#, "${1} `` "),
        // A quote before a one-letter word that is not a clitic: 'x → ' x
        (r"(')([\w&&[^mtsdnMTSDN]])\b", "${1} ${2}"),
    ])
});

static PUNCTUATION: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        // Final period, possibly followed by closing brackets or quotes
        (r#"([^.])(\.)([\])}>"'»”’ ]*)\s*$"#, "${1} ${2} ${3} "),
        (r"([:,])([^\d])", " ${1} ${2}"),
        (r"([:,])$", " ${1} "),
        (r"\.{2,}", " ${0} "),
        (r"[;@#$%&]", " ${0} "),
        (r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2}${3} "),
        (r"[?!]", " ${0} "),
        (r"([^'])' ", "${1} ' "),
        (r"[*]", " ${0} "),
    ])
});

static BRACKETS: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (r"[\]\[(){}<>]", " ${0} "),
        (r"--", " -- "),
    ])
});

static ENDING_QUOTES: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (r"([»”’])", " ${1} "),
        (r"''", " '' "),
        (r#"""#, " '' "),
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
    ])
});

static CONTRACTIONS: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
        (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
        (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
        (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
        (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(mor)('n)\b", " ${1} ${2} "),
        (r"(?i)\b(wan)(na)\s", " ${1} ${2} "),
        (r"(?i) ('t)(is)\b", " ${1} ${2} "),
        (r"(?i) ('t)(was)\b", " ${1} ${2} "),
    ])
});

/// Words that end in '.' without ending a sentence
const ABBREVIATIONS: [&str; 13] = [
    "mr", "mrs", "ms", "dr", "st", "jr", "sr", "vs", "etc", "no", "mt", "ave", "prof",
];

fn ends_sentence(word: &str) -> bool {
    let Some(stem) = word.strip_suffix('.') else {
        return false;
    };
    if stem.ends_with('.') {
        // Ellipsis
        return false;
    }

    let core = stem.trim_start_matches(|c: char| "\"'(`“‘[{<".contains(c));
    if core.contains('.') {
        return false;
    }

    let mut chars = core.chars();
    let initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());

    !initial && !ABBREVIATIONS.iter().any(|abbr| core.eq_ignore_ascii_case(abbr))
}

/// Cut text into sentences at words that end one. The last word
/// never starts a new, empty sentence.
fn split_sentences(text: &str) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut sentences = Vec::new();
    let mut start     = 0usize;

    for (i, word) in words.iter().enumerate() {
        if i + 1 < words.len() && ends_sentence(word) {
            sentences.push(words[start..=i].join(" "));
            start = i + 1;
        }
    }
    if start < words.len() {
        sentences.push(words[start..].join(" "));
    }

    sentences
}

fn apply(rules: &[Rule], text: String) -> String {
    rules.iter().fold(text, |text, rule| {
        rule.pattern.replace_all(&text, rule.replacement).into_owned()
    })
}

/// Penn Treebank style word tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreebankTokenizer;

impl TreebankTokenizer {
    pub fn new() -> Self {
        Self
    }

    fn tokenize_sentence(&self, sentence: String) -> Vec<String> {
        let text = apply(&STARTING_QUOTES, sentence);
        let text = apply(&PUNCTUATION, text);
        let text = apply(&BRACKETS, text);

        // Pad both ends so the clitic rules can anchor on a space
        let text = apply(&ENDING_QUOTES, format!(" {text} "));
        let text = apply(&CONTRACTIONS, text);

        text.split_whitespace().map(str::to_string).collect()
    }
}

impl WordTokenizer for TreebankTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        split_sentences(text)
            .into_iter()
            .flat_map(|sentence| self.tokenize_sentence(sentence))
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str) -> Vec<String> {
        TreebankTokenizer::new().tokenize(text)
    }

    #[test]
    fn test_all_rules_compile() {
        assert_eq!(STARTING_QUOTES.len(), 5);
        assert_eq!(PUNCTUATION.len(), 9);
        assert_eq!(BRACKETS.len(), 2);
        assert_eq!(ENDING_QUOTES.len(), 5);
        assert_eq!(CONTRACTIONS.len(), 10);
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(tok("a dog runs"), ["a", "dog", "runs"]);
    }

    #[test]
    fn test_final_period_and_commas() {
        assert_eq!(
            tok("a dog, a cat and a bird."),
            ["a", "dog", ",", "a", "cat", "and", "a", "bird", "."]
        );
    }

    #[test]
    fn test_detached_period_already_spaced() {
        // Flickr captions usually end in " ."
        assert_eq!(tok("a child climbs stairs ."), ["a", "child", "climbs", "stairs", "."]);
    }

    #[test]
    fn test_clitics_are_split() {
        assert_eq!(tok("the dog's toy isn't red"), ["the", "dog", "'s", "toy", "is", "n't", "red"]);
        assert_eq!(tok("they're here"), ["they", "'re", "here"]);
    }

    #[test]
    fn test_split_contractions() {
        assert_eq!(tok("i cannot go"), ["i", "can", "not", "go"]);
        assert_eq!(tok("we gonna win"), ["we", "gon", "na", "win"]);
    }

    #[test]
    fn test_numbers_keep_inner_commas() {
        assert_eq!(tok("1,000 people"), ["1,000", "people"]);
    }

    #[test]
    fn test_question_exclamation_and_brackets() {
        assert_eq!(tok("what (really)?!"), ["what", "(", "really", ")", "?", "!"]);
    }

    #[test]
    fn test_quotes_become_treebank_quotes() {
        assert_eq!(tok("a \"big\" dog"), ["a", "``", "big", "''", "dog"]);
    }

    #[test]
    fn test_double_dash_and_ellipsis() {
        assert_eq!(tok("wait--what..."), ["wait", "--", "what", "..."]);
    }

    #[test]
    fn test_period_inside_caption_ends_sentence() {
        assert_eq!(
            tok("a dog runs. a cat sits."),
            ["a", "dog", "runs", ".", "a", "cat", "sits", "."]
        );
    }

    #[test]
    fn test_abbreviations_and_initials_keep_their_period() {
        assert_eq!(
            tok("mr. smith walks. he sits."),
            ["mr.", "smith", "walks", ".", "he", "sits", "."]
        );
        assert_eq!(tok("j. doe runs"), ["j.", "doe", "runs"]);
        assert_eq!(
            tok("the u.s. flag waves. kids play"),
            ["the", "u.s.", "flag", "waves", ".", "kids", "play"]
        );
        assert_eq!(tok("wait... what"), ["wait", "...", "what"]);
    }

    #[test]
    fn test_curly_quotes_are_split() {
        assert_eq!(tok("a “big” dog"), ["a", "“", "big", "”", "dog"]);
    }

    #[test]
    fn test_asterisks_are_split() {
        assert_eq!(tok("a dog *jumps* high"), ["a", "dog", "*", "jumps", "*", "high"]);
    }

    #[test]
    fn test_quote_before_single_letter_word() {
        assert_eq!(tok("'x marks the spot"), ["'", "x", "marks", "the", "spot"]);
        // 'n is a clitic, and longer words keep a leading quote attached
        assert_eq!(tok("rock 'n' roll"), ["rock", "'n", "'", "roll"]);
        assert_eq!(tok("'hello'"), ["'hello", "'"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(tok("").is_empty());
        assert!(tok("   ").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let text = "two dogs' owners aren't \"happy\" -- see?";
        assert_eq!(tok(text), tok(text));
    }
}
