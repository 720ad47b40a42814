// Word tokenization and normalization.
//
// Tokens follow Unicode word boundaries (UAX #29), so punctuation always
// lands in its own segment. English contraction suffixes are then split off
// the way Treebank-style tokenizers do it: "john's" -> "john" + "'s",
// "don't" -> "do" + "n't". The suffix halves are not alphanumeric and get
// dropped by the normalizer, which leaves the stem to be compared.
// Hyphen-linked words ("well-known", "e-mail") stay one token, so the
// normalizer drops them whole.

use unicode_segmentation::UnicodeSegmentation;

use super::stopwords::StopWords;

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Suffixes that follow an apostrophe in a contraction.
const CLITICS: [&str; 6] = ["s", "m", "d", "ll", "re", "ve"];

/// Split `text` into word-level tokens. Whitespace is discarded; every
/// punctuation mark is its own token.
pub fn tokenize_words(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut segments = text.split_word_bound_indices();
    while let Some((start, segment)) = segments.next() {
        if segment.trim().is_empty() {
            continue;
        }

        let mut end = start + segment.len();
        if is_word(segment) {
            loop {
                let mut ahead = segments.clone();
                match (ahead.next(), ahead.next()) {
                    (Some((_, "-")), Some((at, word))) if is_word(word) => {
                        end = at + word.len();
                        segments = ahead;
                    }
                    _ => break,
                }
            }
        }
        push_splitting_contraction(&text[start..end], &mut tokens);
    }
    tokens
}

fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

fn push_splitting_contraction<'a>(segment: &'a str, tokens: &mut Vec<&'a str>) {
    if let Some(at) = negation_split(segment) {
        tokens.push(&segment[..at]);
        tokens.push(&segment[at..]);
        return;
    }

    let last_apostrophe = segment
        .char_indices()
        .rev()
        .find(|(_, c)| APOSTROPHES.contains(c));
    if let Some((at, apostrophe)) = last_apostrophe {
        let suffix = &segment[at + apostrophe.len_utf8()..];
        if at > 0 && CLITICS.iter().any(|c| suffix.eq_ignore_ascii_case(c)) {
            tokens.push(&segment[..at]);
            tokens.push(&segment[at..]);
            return;
        }
    }

    tokens.push(segment);
}

/// Byte offset where a trailing "n't" starts, if the segment has a stem
/// before it.
fn negation_split(segment: &str) -> Option<usize> {
    ["n't", "n\u{2019}t", "N'T", "N\u{2019}T"]
        .iter()
        .find(|suffix| segment.len() > suffix.len() && segment.ends_with(*suffix))
        .map(|suffix| segment.len() - suffix.len())
}

fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

/// Turns document text into the token list used for scoring.
///
/// Holds a borrowed stopword set; constructing one is free, so callers make a
/// fresh normalizer wherever they need one.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    stop_words: &'a StopWords,
}

impl<'a> Normalizer<'a> {
    pub fn new(stop_words: &'a StopWords) -> Self {
        Self { stop_words }
    }

    /// Lowercase, tokenize, and keep only alphanumeric non-stopword tokens.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        tokenize_words(&lower)
            .into_iter()
            .filter(|token| is_alphanumeric(token) && !self.stop_words.contains(token))
            .map(str::to_string)
            .collect()
    }
}
