// The comparison payload handed to the presentation layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Verdict band for a plagiarism percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    /// `> 60` is High, then `>= 30` is Moderate, everything else Low.
    /// Exactly 60 is Moderate.
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p > 60 => Severity::High,
            p if p >= 30 => Severity::Moderate,
            _ => Severity::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
        }
    }

    /// One-line verdict shown under the report.
    pub fn message(&self, percentage: u32) -> String {
        match self {
            Severity::High => {
                format!("High Plagiarism: {percentage}% plagiarized content detected!")
            }
            Severity::Moderate => {
                format!("Moderate Plagiarism: {percentage}% plagiarized content detected.")
            }
            Severity::Low => {
                format!("Low Plagiarism: {percentage}% plagiarized content detected.")
            }
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the presentation layer renders for one comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub percentage: u32,
    /// Retained tokens in each document
    pub word_count_1: usize,
    pub word_count_2: usize,
    /// Multiset overlap of the two token lists
    pub common_word_count: usize,
    /// Distinct shared words, alphabetical
    pub common_words: Vec<String>,
    /// Shared sentences as written in File 1, in File 1 order
    pub common_sentences: Vec<String>,
    pub highlighted_text_1: String,
    pub highlighted_text_2: String,
    pub severity: Severity,
}

impl ComparisonReport {
    pub fn verdict(&self) -> String {
        self.severity.message(self.percentage)
    }
}
