// Word-overlap plagiarism score.
//
// The overlap is a multiset intersection: a shared word counts as many times
// as it appears in the document that uses it less. The score is the Dice
// coefficient over the two token lists:
//
//   percentage = round(2 * overlap / (len_a + len_b) * 100)
//
// Both sides are treated identically, so the score is symmetric. Rounding is
// done in exact integer arithmetic with exact halves going to the even
// neighbour. A float computation can land just off a half instead: 2 * 23 / 80
// is exactly 57.5 and rounds to 58 here, where float rounding gives 57.

use std::collections::HashMap;

use crate::error::CheckError;

/// Shared-vocabulary result for a pair of token lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordOverlap {
    /// Rounded percentage in 0..=100
    pub percentage: u32,
    /// Multiset intersection size
    pub overlap_count: usize,
    /// Distinct shared words, alphabetical
    pub common_words: Vec<String>,
}

fn counts(words: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for word in words {
        *counts.entry(word.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Score two normalized token lists.
///
/// Fails with `NoContent` when both lists are empty.
pub fn score(words_a: &[String], words_b: &[String]) -> Result<WordOverlap, CheckError> {
    let total = words_a.len() + words_b.len();
    if total == 0 {
        return Err(CheckError::NoContent);
    }

    let counts_a = counts(words_a);
    let counts_b = counts(words_b);

    let mut common_words = Vec::new();
    let mut overlap_count = 0;
    for (word, &count_a) in &counts_a {
        if let Some(&count_b) = counts_b.get(word) {
            overlap_count += count_a.min(count_b);
            common_words.push(word.to_string());
        }
    }
    common_words.sort_unstable();

    Ok(WordOverlap {
        percentage: rounded_percentage(2 * overlap_count, total),
        overlap_count,
        common_words,
    })
}

/// `round(numerator / denominator * 100)` with ties to even. `denominator`
/// must be non-zero.
fn rounded_percentage(numerator: usize, denominator: usize) -> u32 {
    let scaled = numerator as u64 * 100;
    let denominator = denominator as u64;
    let quotient = scaled / denominator;
    let twice_remainder = (scaled % denominator) * 2;

    let rounded = match twice_remainder.cmp(&denominator) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => quotient + (quotient % 2),
    };
    rounded.min(100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_identical_lists_score_100() {
        let a = words(&["quick", "brown", "fox", "fox"]);
        let result = score(&a, &a).unwrap();
        assert_eq!(result.percentage, 100);
        assert_eq!(result.overlap_count, 4);
        assert_eq!(result.common_words, vec!["brown", "fox", "quick"]);
    }

    #[test]
    fn test_repeats_count_up_to_lesser_frequency() {
        let a = words(&["fox", "fox", "fox", "dog"]);
        let b = words(&["fox", "cat"]);
        let result = score(&a, &b).unwrap();
        // overlap = min(3, 1) = 1; 2 * 1 / 6 = 33.3%
        assert_eq!(result.overlap_count, 1);
        assert_eq!(result.percentage, 33);
        assert_eq!(result.common_words, vec!["fox"]);
    }

    #[test]
    fn test_disjoint_scores_zero() {
        let result = score(&words(&["alpha"]), &words(&["beta", "gamma"])).unwrap();
        assert_eq!(result.percentage, 0);
        assert!(result.common_words.is_empty());
    }

    #[test]
    fn test_one_side_empty_scores_zero() {
        let result = score(&words(&["alpha"]), &[]).unwrap();
        assert_eq!(result.percentage, 0);
    }

    #[test]
    fn test_both_empty_is_no_content() {
        assert!(matches!(score(&[], &[]), Err(CheckError::NoContent)));
    }

    #[test]
    fn test_rounding_ties_to_even() {
        // 12.5 -> 12, 37.5 -> 38, 62.5 -> 62
        assert_eq!(rounded_percentage(2, 16), 12);
        assert_eq!(rounded_percentage(6, 16), 38);
        assert_eq!(rounded_percentage(10, 16), 62);
        // 57.5 exactly (overlap 23 of 80 tokens) -> 58
        assert_eq!(rounded_percentage(46, 80), 58);
        // 66.67 -> 67, 33.33 -> 33
        assert_eq!(rounded_percentage(2, 3), 67);
        assert_eq!(rounded_percentage(1, 3), 33);
    }
}
