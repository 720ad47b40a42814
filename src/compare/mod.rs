// Document comparison: scoring, sentence matching, highlighting.
//
// `Checker` runs the whole pipeline for one pair of uploads:
//   extract -> normalize -> score -> match sentences -> highlight
// It holds only read-only configuration, so one instance can serve any
// number of independent comparisons.

pub mod highlight;
pub mod report;
pub mod score;
pub mod sentences;

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{CheckError, FileSlot};
use crate::extract::{extract_file, extract_upload, Upload};
use crate::text::{Normalizer, StopWords};

pub use highlight::{highlight, HighlightStyle};
pub use report::{ComparisonReport, Severity};
pub use score::{score, WordOverlap};
pub use sentences::match_sentences;

/// Compares two documents with a fixed stopword set and highlight style.
#[derive(Debug, Clone)]
pub struct Checker {
    stop_words: StopWords,
    highlight: HighlightStyle,
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(StopWords::english())
    }
}

impl Checker {
    pub fn new(stop_words: StopWords) -> Self {
        Self {
            stop_words,
            highlight: HighlightStyle::default(),
        }
    }

    pub fn with_highlight(mut self, style: HighlightStyle) -> Self {
        self.highlight = style;
        self
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn normalizer(&self) -> Normalizer<'_> {
        Normalizer::new(&self.stop_words)
    }

    /// Extract both uploads and compare them.
    ///
    /// File 1 is fully resolved and read before File 2 is looked at, so an
    /// error in File 1 means File 2 was never touched.
    pub fn check(
        &self,
        upload_1: Option<&Upload>,
        upload_2: Option<&Upload>,
    ) -> Result<ComparisonReport, CheckError> {
        let (upload_1, upload_2) = match (upload_1, upload_2) {
            (Some(a), Some(b)) => (a, b),
            (a, b) => {
                let mut slots = Vec::new();
                if a.is_none() {
                    slots.push(FileSlot::First);
                }
                if b.is_none() {
                    slots.push(FileSlot::Second);
                }
                return Err(CheckError::MissingInput { slots });
            }
        };

        let text_1 = extract_upload(upload_1, FileSlot::First)?;
        let text_2 = extract_upload(upload_2, FileSlot::Second)?;

        self.compare_texts(&text_1, &text_2)
    }

    /// Compare two files on disk, in the same slot order as `check`.
    ///
    /// A path that does not exist counts as a missing upload. File 1's format
    /// is checked and its bytes read before File 2 is opened.
    pub fn check_files(
        &self,
        path_1: &Path,
        path_2: &Path,
        max_bytes: u64,
    ) -> Result<ComparisonReport, CheckError> {
        let mut slots = Vec::new();
        for (path, slot) in [(path_1, FileSlot::First), (path_2, FileSlot::Second)] {
            if !path.exists() {
                warn!(path = %path.display(), slot = %slot, "Input file not found");
                slots.push(slot);
            }
        }
        if !slots.is_empty() {
            return Err(CheckError::MissingInput { slots });
        }

        let text_1 = extract_file(path_1, FileSlot::First, max_bytes)?;
        let text_2 = extract_file(path_2, FileSlot::Second, max_bytes)?;

        self.compare_texts(&text_1, &text_2)
    }

    /// Compare two already-extracted document texts.
    pub fn compare_texts(
        &self,
        text_1: &str,
        text_2: &str,
    ) -> Result<ComparisonReport, CheckError> {
        let normalizer = self.normalizer();
        let words_1 = normalizer.normalize(text_1);
        let words_2 = normalizer.normalize(text_2);
        debug!(
            words_1 = words_1.len(),
            words_2 = words_2.len(),
            "Normalized documents"
        );

        let overlap = score(&words_1, &words_2)?;

        let common_sentences = match_sentences(text_1, text_2);
        debug!(common_sentences = common_sentences.len(), "Matched sentences");

        let highlighted_text_1 = highlight(text_1, &common_sentences, self.highlight);
        let highlighted_text_2 = highlight(text_2, &common_sentences, self.highlight);

        let severity = Severity::from_percentage(overlap.percentage);
        info!(
            percentage = overlap.percentage,
            severity = %severity,
            common_words = overlap.common_words.len(),
            common_sentences = common_sentences.len(),
            "Comparison complete"
        );

        Ok(ComparisonReport {
            percentage: overlap.percentage,
            word_count_1: words_1.len(),
            word_count_2: words_2.len(),
            common_word_count: overlap.overlap_count,
            common_words: overlap.common_words,
            common_sentences,
            highlighted_text_1,
            highlighted_text_2,
            severity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Checker {
        Checker::new(StopWords::from_words(["the", "is", "this", "over"]))
    }

    #[test]
    fn test_missing_inputs_reported_together() {
        let upload = Upload::new("a.txt", "text");
        let err = checker().check(None, Some(&upload)).unwrap_err();
        assert!(matches!(
            err,
            CheckError::MissingInput { ref slots } if slots == &[FileSlot::First]
        ));

        let err = checker().check(None, None).unwrap_err();
        assert!(matches!(
            err,
            CheckError::MissingInput { ref slots } if slots.len() == 2
        ));
    }

    #[test]
    fn test_first_slot_failure_stops_before_second() {
        // File 2 is a corrupt PDF; File 1's bad extension must win.
        let first = Upload::new("essay.rtf", "whatever");
        let second = Upload::new("broken.pdf", "not a pdf");
        let err = checker().check(Some(&first), Some(&second)).unwrap_err();
        assert_eq!(err.slot(), Some(FileSlot::First));
    }

    #[test]
    fn test_second_slot_read_error() {
        let first = Upload::new("a.txt", "Some words here.");
        let second = Upload::new("b.docx", "not a zip archive");
        let err = checker().check(Some(&first), Some(&second)).unwrap_err();
        assert!(matches!(
            err,
            CheckError::FileRead {
                slot: FileSlot::Second,
                ..
            }
        ));
    }

    #[test]
    fn test_compare_texts_fills_report() {
        let report = checker()
            .compare_texts(
                "The quick brown fox jumps over the lazy dog. This is unique text A.",
                "The quick brown fox jumps over the lazy dog. This is unique text B.",
            )
            .unwrap();

        // quick brown fox jumps lazy dog unique text a / ... b
        assert_eq!(report.word_count_1, 9);
        assert_eq!(report.word_count_2, 9);
        assert_eq!(report.common_word_count, 8);
        assert_eq!(report.percentage, 89);
        assert_eq!(report.severity, Severity::High);
        assert_eq!(
            report.common_sentences,
            vec!["The quick brown fox jumps over the lazy dog."]
        );
        assert!(report
            .highlighted_text_2
            .starts_with("**:red[The quick brown fox jumps over the lazy dog.]**"));
    }
}
