// Rule-based sentence boundary detection.
//
// A boundary is a run of terminal punctuation (. ! ?), optionally followed by
// closing quotes or brackets, then whitespace. Periods get extra scrutiny:
// titles never end a sentence, "No." only continues before a number, a
// single-letter initial continues inside a name ("J. R. R. Tolkien"), other
// known abbreviations only end one when the next word is capitalized, and an
// ellipsis followed by a lowercase word continues the sentence.
//
// Sentences are returned as slices of the input, trimmed, so the caller keeps
// the original casing and punctuation.

const TERMINATORS: [char; 3] = ['.', '!', '?'];

const CLOSERS: [char; 8] = ['"', '\'', ')', ']', '}', '\u{201D}', '\u{2019}', '\u{00BB}'];

const OPENERS: [char; 7] = ['"', '\'', '(', '[', '{', '\u{201C}', '\u{2018}'];

/// Abbreviations that are followed by a name or a number, never by a new
/// sentence.
const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "gen", "sen", "rep", "gov", "capt", "lt", "col",
    "sgt", "st", "sr", "jr", "mt", "vs", "e.g", "i.e", "cf", "fig", "figs", "vol", "pp", "ch",
    "sec", "approx",
];

/// Abbreviations for "number": "No. 5" continues, "the answer was no." ends.
const NUMBER_ABBREVIATIONS: &[&str] = &["no", "nos"];

/// Abbreviations that can legitimately close a sentence.
const TERMINAL_ABBREVIATIONS: &[&str] = &[
    "etc", "inc", "ltd", "co", "corp", "llc", "al", "jan", "feb", "mar", "apr", "jun", "jul",
    "aug", "sep", "sept", "oct", "nov", "dec", "dept", "est", "ave", "blvd",
];

/// Split `text` into sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |idx: usize| chars.get(idx).map_or(text.len(), |&(b, _)| b);

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !TERMINATORS.contains(&chars[i].1) {
            i += 1;
            continue;
        }

        let run_start = i;
        let mut j = i;
        while j < chars.len() && TERMINATORS.contains(&chars[j].1) {
            j += 1;
        }
        let run = &text[byte_at(run_start)..byte_at(j)];
        while j < chars.len() && CLOSERS.contains(&chars[j].1) {
            j += 1;
        }

        let mut k = j;
        while k < chars.len() && chars[k].1.is_whitespace() {
            k += 1;
        }
        if k == j {
            // Glued to the next character ("3.14", "e.g.x") or end of input
            i = j;
            continue;
        }

        if ends_sentence(&text[start..byte_at(run_start)], run, &text[byte_at(k)..]) {
            push_trimmed(&mut sentences, &text[start..byte_at(j)]);
            start = byte_at(k);
        }
        i = k;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

/// Decide whether a terminator run closes the sentence.
///
/// `before` is the sentence text up to the run, `after` the text from the
/// first non-whitespace character after it (empty at end of input).
fn ends_sentence(before: &str, run: &str, after: &str) -> bool {
    if run.contains(['!', '?']) {
        return true;
    }

    let next = after.chars().next();
    let next_is_lower = next.is_some_and(char::is_lowercase);
    let next_capitalized = next.map_or(true, |c| !c.is_lowercase() && !c.is_numeric());

    if run.chars().count() > 1 {
        // Ellipsis
        return !next_is_lower;
    }

    let mut words = before.rsplit(char::is_whitespace).filter(|w| !w.is_empty());
    let word = words
        .next()
        .unwrap_or("")
        .trim_start_matches(OPENERS)
        .to_lowercase();

    if word.is_empty() {
        return true;
    }
    if TITLES.contains(&word.as_str()) {
        return false;
    }
    if NUMBER_ABBREVIATIONS.contains(&word.as_str()) {
        return !next.is_some_and(char::is_numeric);
    }
    if is_initial(&word) && (starts_with_initial(after) || in_name_run(words.next())) {
        return false;
    }
    if is_initial(&word)
        || TERMINAL_ABBREVIATIONS.contains(&word.as_str())
        || is_dotted_initialism(&word)
    {
        return next_capitalized;
    }
    true
}

/// A single letter, as in "J. R. R. Tolkien".
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

/// The next word is itself an initial: "J. R." or "J. R.R.".
fn starts_with_initial(after: &str) -> bool {
    let mut chars = after.chars();
    matches!((chars.next(), chars.next()), (Some(c), Some('.')) if c.is_alphabetic())
}

/// An initial continues a name when it opens the sentence or follows a
/// capitalized word or another initial: "John F. Kennedy", "R. R. Tolkien".
/// After a lowercase word ("unique text A.") it is an ordinary word.
fn in_name_run(previous: Option<&str>) -> bool {
    previous.map_or(true, |word| {
        word.trim_start_matches(OPENERS)
            .chars()
            .next()
            .is_some_and(char::is_uppercase)
    })
}

/// Single letters joined by periods: "u.s", "a.m", "p.h.d".
fn is_dotted_initialism(word: &str) -> bool {
    word.contains('.') && word.split('.').all(|part| part.chars().count() <= 2 && !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_split() {
        let text = "The quick brown fox jumps over the lazy dog. This is unique text A.";
        assert_eq!(
            split_sentences(text),
            vec!["The quick brown fox jumps over the lazy dog.", "This is unique text A."]
        );
    }

    #[test]
    fn test_titles_and_times_do_not_split() {
        let text = "Mr. Smith went to Washington. He arrived at 5 p.m. on Monday.";
        assert_eq!(
            split_sentences(text),
            vec!["Mr. Smith went to Washington.", "He arrived at 5 p.m. on Monday."]
        );
    }

    #[test]
    fn test_initials_do_not_split() {
        let text = "J. R. R. Tolkien wrote books. They sold well.";
        assert_eq!(
            split_sentences(text),
            vec!["J. R. R. Tolkien wrote books.", "They sold well."]
        );
    }

    #[test]
    fn test_name_initials_continue() {
        let text = "President John F. Kennedy spoke. Crowds cheered.";
        assert_eq!(
            split_sentences(text),
            vec!["President John F. Kennedy spoke.", "Crowds cheered."]
        );
    }

    #[test]
    fn test_letter_after_lowercase_word_ends_sentence() {
        let text = "This is unique text A. The quick brown fox jumps over the lazy dog.";
        assert_eq!(
            split_sentences(text),
            vec!["This is unique text A.", "The quick brown fox jumps over the lazy dog."]
        );
    }

    #[test]
    fn test_no_is_a_word_unless_a_number_follows() {
        assert_eq!(
            split_sentences("The answer was no. We left the party early that night."),
            vec!["The answer was no.", "We left the party early that night."]
        );
        assert_eq!(
            split_sentences("See item No. 5 in the list. Then stop."),
            vec!["See item No. 5 in the list.", "Then stop."]
        );
    }

    #[test]
    fn test_question_exclamation_and_ellipsis() {
        let text = "Wait... what? Yes!  No.";
        assert_eq!(split_sentences(text), vec!["Wait... what?", "Yes!", "No."]);
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        let text = "He said \"Stop.\" Then he left.";
        assert_eq!(split_sentences(text), vec!["He said \"Stop.\"", "Then he left."]);
    }

    #[test]
    fn test_decimal_number_is_not_a_boundary() {
        let text = "Version 3.14 is out. Update now.";
        assert_eq!(split_sentences(text), vec!["Version 3.14 is out.", "Update now."]);
    }

    #[test]
    fn test_terminal_abbreviation_before_capital() {
        let text = "They sell apples, pears, etc. The shop opens daily.";
        assert_eq!(
            split_sentences(text),
            vec!["They sell apples, pears, etc.", "The shop opens daily."]
        );
    }

    #[test]
    fn test_no_terminal_punctuation() {
        assert_eq!(split_sentences("  just a fragment  "), vec!["just a fragment"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences(" \n ").is_empty());
    }

    #[test]
    fn test_multibyte_text() {
        let text = "Café au lait is nice. Crème brûlée too!";
        assert_eq!(split_sentences(text), vec!["Café au lait is nice.", "Crème brûlée too!"]);
    }
}
