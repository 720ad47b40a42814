// Colored terminal output for a comparison report.
//
// Layout follows the order a reader wants it: score, counts, shared words,
// shared sentences, then both documents with the shared sentences marked,
// and the verdict last.

use colored::Colorize;

use super::{truncate_chars, FileNames};
use crate::compare::{ComparisonReport, Severity};

/// Longest common-words line printed before it is cut short.
const COMMON_WORDS_MAX_CHARS: usize = 600;

/// Display a full comparison report in the terminal.
///
/// `show_text` controls whether both highlighted documents are printed.
pub fn display_report(report: &ComparisonReport, names: FileNames<'_>, show_text: bool) {
    println!(
        "\n{}",
        format!("=== Plagiarism Percent: {}% ===", report.percentage).bold()
    );
    println!();
    println!("  Total words in File 1 ({}): {}", names.first, report.word_count_1);
    println!("  Total words in File 2 ({}): {}", names.second, report.word_count_2);
    println!("  Common words count: {}", report.common_word_count);

    println!("\n{}", "Common Words:".bold());
    println!("  {}", format_common_words(&report.common_words).dimmed());

    println!(
        "\n{}",
        format!("Common Sentences ({}):", report.common_sentences.len()).bold()
    );
    if report.common_sentences.is_empty() {
        println!("  No common sentences found.");
    } else {
        for (i, sentence) in report.common_sentences.iter().enumerate() {
            println!("  {:>3}. {}", i + 1, sentence);
        }
    }

    if show_text {
        println!("  {}", "-".repeat(78).dimmed());
        println!(
            "\n{}",
            format!("File 1 ({}) with highlighted common sentences", names.first).bold()
        );
        println!("{}", report.highlighted_text_1);
        println!(
            "\n{}",
            format!("File 2 ({}) with highlighted common sentences", names.second).bold()
        );
        println!("{}", report.highlighted_text_2);
    }

    println!();
    println!("  {}", colorize_verdict(report.severity, &report.verdict()));
}

/// Comma-joined common words, or "None".
pub fn format_common_words(words: &[String]) -> String {
    if words.is_empty() {
        "None".to_string()
    } else {
        truncate_chars(&words.join(", "), COMMON_WORDS_MAX_CHARS)
    }
}

/// Colorize a verdict line by severity.
fn colorize_verdict(severity: Severity, line: &str) -> colored::ColoredString {
    match severity {
        Severity::High => line.red().bold(),
        Severity::Moderate => line.yellow(),
        Severity::Low => line.green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_common_words() {
        assert_eq!(format_common_words(&[]), "None");
        let words = vec!["brown".to_string(), "fox".to_string()];
        assert_eq!(format_common_words(&words), "brown, fox");
    }

    #[test]
    fn test_long_common_words_truncated() {
        let words: Vec<String> = (0..500).map(|i| format!("word{i}")).collect();
        let line = format_common_words(&words);
        assert!(line.ends_with("..."));
        assert_eq!(line.chars().count(), COMMON_WORDS_MAX_CHARS + 3);
    }
}
