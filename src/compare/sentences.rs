// Shared-sentence detection.
//
// Two sentences match when they are equal after collapsing every run of
// non-word characters to one space, lowercasing and trimming. Matches with
// three words or fewer are ignored. Results come from the first document,
// in its order, with the original text intact.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::text::split_sentences;

/// A shared sentence must have more than this many words.
pub const MIN_SENTENCE_WORDS: usize = 3;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("valid non-word pattern"));

/// Canonical form used for sentence comparison.
pub fn normalize_sentence(sentence: &str) -> String {
    NON_WORD
        .replace_all(&sentence.to_lowercase(), " ")
        .trim()
        .to_string()
}

/// Sentences of `text_a` that also occur in `text_b`.
///
/// Each sentence of `text_a` is reported at most once, trimmed but otherwise
/// unmodified. A sentence repeated in `text_a` is reported once per
/// occurrence, the same as scanning `text_b` for every sentence in turn.
pub fn match_sentences(text_a: &str, text_b: &str) -> Vec<String> {
    let index: HashSet<String> = split_sentences(text_b)
        .into_iter()
        .map(normalize_sentence)
        .collect();

    split_sentences(text_a)
        .into_iter()
        .filter(|sentence| {
            let normalized = normalize_sentence(sentence);
            normalized.split_whitespace().count() > MIN_SENTENCE_WORDS
                && index.contains(&normalized)
        })
        .map(str::to_string)
        .collect()
}
