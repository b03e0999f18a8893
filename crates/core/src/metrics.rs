//! Readability and sentiment metrics.
//!
//! [`compute_metrics`] is a pure function of the article text and the
//! dictionaries. Every ratio with an empty denominator resolves to `0.0`, so
//! empty text produces an all-zero [`MetricsRecord`].
//!
//! # Example
//!
//! ```rust
//! use mensura_core::{Dictionaries, WordSet, compute_metrics};
//!
//! let dictionaries = Dictionaries::new(
//!     WordSet::from_words(["love", "happy", "positive"]),
//!     WordSet::default(),
//!     WordSet::from_words(["this", "are", "and"]),
//! );
//! let record = compute_metrics("I love this. We are happy and positive.", &dictionaries);
//! assert_eq!(record.positive_score, 3);
//! assert_eq!(record.word_count, 5);
//! assert_eq!(record.personal_pronouns, 2);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::Dictionaries;
use crate::tokenize::TokenStream;

/// Keeps the polarity and subjectivity ratios finite.
pub const EPSILON: f64 = 1e-6;

/// Fog index weighting factor.
const FOG_FACTOR: f64 = 0.4;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

// Case-insensitive, so the abbreviation "US" counts as well.
static PRONOUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\b(I|we|my|ours|us)\b").unwrap());

/// The thirteen per-article metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MetricsRecord {
    pub positive_score: usize,
    pub negative_score: usize,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
    pub avg_sentence_length: f64,
    pub pct_complex_words: f64,
    pub fog_index: f64,
    pub avg_words_per_sentence: f64,
    pub complex_word_count: usize,
    pub word_count: usize,
    pub syllable_per_word: f64,
    pub personal_pronouns: usize,
    pub avg_word_length: f64,
}

/// Approximate syllable count using vowel groups.
///
/// Counts transitions into a vowel (`a`, `e`, `i`, `o`, `u`), with a leading
/// vowel counting once, then discounts a trailing `es` or `ed`. The result is
/// never below 1. This is a heuristic and is often wrong for real English
/// (`y` is never a vowel, silent `e` is counted).
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let chars: Vec<char> = word.chars().collect();

    let mut count: isize = 0;
    if chars.first().is_some_and(|c| VOWELS.contains(c)) {
        count += 1;
    }
    for pair in chars.windows(2) {
        if VOWELS.contains(&pair[1]) && !VOWELS.contains(&pair[0]) {
            count += 1;
        }
    }
    if word.ends_with("es") || word.ends_with("ed") {
        count -= 1;
    }

    count.max(1) as usize
}

/// A word is complex when it has more than two syllables.
pub fn is_complex(word: &str) -> bool {
    count_syllables(word) > 2
}

/// Counts whole-word, case-insensitive matches of `I`, `we`, `my`, `ours`
/// and `us` in untokenized text.
pub fn count_personal_pronouns(text: &str) -> usize {
    PRONOUN_RE.find_iter(text).count()
}

/// `numerator / denominator`, or `0.0` when the denominator is zero.
fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator > 0 { numerator / denominator as f64 } else { 0.0 }
}

/// Scores an already tokenized article.
///
/// `raw_text` is only used for pronoun counting, which works on the text
/// before tokenization.
pub fn score_tokens(tokens: &TokenStream, raw_text: &str, dictionaries: &Dictionaries) -> MetricsRecord {
    let words = &tokens.words;
    let word_count = words.len();

    let positive_score = words.iter().filter(|w| dictionaries.positive.contains(w)).count();
    let negative_count = words.iter().filter(|w| dictionaries.negative.contains(w)).count() as isize;
    // Counts are never negative; `abs` mirrors the reference output.
    let negative_score = negative_count.unsigned_abs();

    let pos = positive_score as f64;
    let neg = negative_score as f64;
    let polarity_score = (pos - neg) / (pos + neg + EPSILON);
    let subjectivity_score = (pos + neg) / (word_count as f64 + EPSILON);

    let avg_sentence_length = ratio(word_count as f64, tokens.sentence_count());

    let complex_word_count = words.iter().filter(|w| is_complex(w)).count();
    let pct_complex_words = ratio(complex_word_count as f64, word_count);

    let fog_index = FOG_FACTOR * (avg_sentence_length + pct_complex_words);

    let total_syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let syllable_per_word = ratio(total_syllables as f64, word_count);

    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = ratio(total_chars as f64, word_count);

    MetricsRecord {
        positive_score,
        negative_score,
        polarity_score,
        subjectivity_score,
        avg_sentence_length,
        pct_complex_words,
        fog_index,
        avg_words_per_sentence: avg_sentence_length,
        complex_word_count,
        word_count,
        syllable_per_word,
        personal_pronouns: count_personal_pronouns(raw_text),
        avg_word_length,
    }
}

/// Tokenizes and scores raw article text.
pub fn compute_metrics(raw_text: &str, dictionaries: &Dictionaries) -> MetricsRecord {
    let tokens = TokenStream::from_text(raw_text, &dictionaries.stop);
    score_tokens(&tokens, raw_text, dictionaries)
}
