//! Sentence segmentation and word normalization.
//!
//! Turns raw article text into a [`TokenStream`]: the sentences of the text
//! and the lowercase, alphabetic, non-stop words it contains.

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::WordSet;

/// Word-like runs (allowing inner `-`, `'`, `’` or `.`) or single punctuation marks.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+(?:[-'’.]\w+)*|[^\w\s]").unwrap());

/// English clitics split off the end of a word.
static CLITIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\w+?)(n['’]t|['’]s|['’]re|['’]ve|['’]ll|['’]d|['’]m)$").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Abbreviations whose trailing period may not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co", "corp", "no", "fig", "e.g",
    "i.e", "approx", "dept", "est", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov",
    "dec",
];

/// Abbreviations that never end a sentence, whatever follows them.
const TITLE_ABBREVIATIONS: &[&str] = &["mr", "mrs", "ms", "dr", "prof", "st", "e.g", "i.e"];

/// Sentences and filtered words derived from one article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    pub sentences: Vec<String>,
    pub words: Vec<String>,
}

impl TokenStream {
    /// Runs the full pipeline: segmentation, tokenization, normalization and
    /// stop-word removal.
    pub fn from_text(text: &str, stop_words: &WordSet) -> Self {
        let sentences = segment_sentences(text);
        let words = remove_stop_words(normalize(tokenize_words(text)), stop_words);
        Self { sentences, words }
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Splits text into sentences.
///
/// Boundaries follow Unicode sentence rules (UAX #29) on whitespace-collapsed
/// text, so line breaks alone never end a sentence. A segment ending in a
/// known abbreviation is joined to the one after it when the abbreviation is a
/// title or the next segment starts with a lowercase letter or a digit.
pub fn segment_sentences(text: &str) -> Vec<String> {
    let collapsed = WHITESPACE_RE.replace_all(text.trim(), " ");

    let mut sentences: Vec<String> = Vec::new();
    let mut pending = String::new();
    let mut segments = collapsed.unicode_sentences().peekable();

    while let Some(segment) = segments.next() {
        pending.push_str(segment);
        if let Some(next) = segments.peek()
            && continues_after(pending.trim_end(), next)
        {
            continue;
        }

        let sentence = pending.trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        pending.clear();
    }

    sentences
}

fn continues_after(segment: &str, next: &str) -> bool {
    let Some(abbreviation) = trailing_abbreviation(segment) else {
        return false;
    };
    if TITLE_ABBREVIATIONS.contains(&abbreviation.as_str()) {
        return true;
    }
    next.trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.is_lowercase() || c.is_ascii_digit())
}

fn trailing_abbreviation(segment: &str) -> Option<String> {
    let without_dot = segment.strip_suffix('.')?;
    let last_word = without_dot
        .rsplit(|c: char| c.is_whitespace() || c == '(' || c == '"')
        .next()
        .unwrap_or_default()
        .to_lowercase();
    ABBREVIATIONS.contains(&last_word.as_str()).then_some(last_word)
}

/// Splits text into word-like and punctuation tokens.
pub fn tokenize_words(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for m in TOKEN_RE.find_iter(text) {
        let token = m.as_str();
        match CLITIC_RE.captures(token) {
            Some(caps) => {
                tokens.push(caps[1].to_string());
                tokens.push(caps[2].to_string());
            }
            None => tokens.push(token.to_string()),
        }
    }
    tokens
}

/// Keeps purely alphabetic tokens, lowercased. Everything else is dropped.
pub fn normalize<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|token| {
            let token = token.as_ref();
            let is_alpha = !token.is_empty() && token.chars().all(char::is_alphabetic);
            is_alpha.then(|| token.to_lowercase())
        })
        .collect()
}

pub fn remove_stop_words(words: Vec<String>, stop_words: &WordSet) -> Vec<String> {
    words.into_iter().filter(|w| !stop_words.contains(w)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_basic() {
        let sentences = segment_sentences("I love this. We are happy! Are you? Yes.");
        assert_eq!(sentences, vec!["I love this.", "We are happy!", "Are you?", "Yes."]);
    }

    #[test]
    fn test_segment_empty() {
        assert!(segment_sentences("").is_empty());
        assert!(segment_sentences("   \n\n  ").is_empty());
    }

    #[test]
    fn test_segment_abbreviation() {
        let sentences = segment_sentences("Mr. Smith met Dr. Jones today. They talked.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Mr. Smith met Dr. Jones today.");
    }

    #[test]
    fn test_segment_abbreviation_can_end_sentence() {
        let sentences = segment_sentences("We sell apples, pears, etc. The rest is sold abroad. I said no. We left.");
        assert_eq!(
            sentences,
            vec!["We sell apples, pears, etc.", "The rest is sold abroad.", "I said no.", "We left."]
        );
    }

    #[test]
    fn test_segment_abbreviation_before_digit() {
        let sentences = segment_sentences("See fig. 3 for details. It shows growth.");
        assert_eq!(sentences, vec!["See fig. 3 for details.", "It shows growth."]);
    }

    #[test]
    fn test_segment_line_breaks_do_not_split() {
        let sentences = segment_sentences("A Headline\n\nThe body starts here. It ends here.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].starts_with("A Headline The body"));
    }

    #[test]
    fn test_segment_without_terminal_punctuation() {
        assert_eq!(segment_sentences("no punctuation at all"), vec!["no punctuation at all"]);
    }

    #[test]
    fn test_tokenize_punctuation() {
        let tokens = tokenize_words("Hello, world!");
        assert_eq!(tokens, vec!["Hello", ",", "world", "!"]);
    }

    #[test]
    fn test_tokenize_clitics() {
        assert_eq!(tokenize_words("don't"), vec!["do", "n't"]);
        assert_eq!(tokenize_words("It's"), vec!["It", "'s"]);
        assert_eq!(tokenize_words("we’ll"), vec!["we", "’ll"]);
    }

    #[test]
    fn test_tokenize_compounds_stay_whole() {
        assert_eq!(tokenize_words("well-known U.S. 3.5"), vec!["well-known", "U.S", ".", "3.5"]);
    }

    #[test]
    fn test_normalize_drops_non_alpha() {
        let words = normalize(["Hello", ",", "world", "42", "abc1", "well-known", "n't", "Café"]);
        assert_eq!(words, vec!["hello", "world", "café"]);
    }

    #[test]
    fn test_remove_stop_words() {
        let stop = WordSet::from_words(["the", "and"]);
        let words = remove_stop_words(vec!["the".into(), "cat".into(), "and".into(), "dog".into()], &stop);
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_token_stream_from_text() {
        let stop = WordSet::from_words(["this", "are", "and"]);
        let stream = TokenStream::from_text("I love this. We are happy and positive.", &stop);
        assert_eq!(stream.sentence_count(), 2);
        assert_eq!(stream.words, vec!["i", "love", "we", "happy", "positive"]);
    }

    #[test]
    fn test_token_stream_empty() {
        let stream = TokenStream::from_text("", &WordSet::default());
        assert_eq!(stream.sentence_count(), 0);
        assert_eq!(stream.word_count(), 0);
    }
}
