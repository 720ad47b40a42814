// Markdown report generation.
//
// Shared sentences in the document sections keep the `**:red[...]**` marker
// the checker produces in Markdown highlight mode.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use super::FileNames;
use crate::compare::ComparisonReport;

/// Render a comparison report as a Markdown document.
pub fn render_report(report: &ComparisonReport, names: FileNames<'_>, show_text: bool) -> String {
    let mut md = String::new();
    let generated = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    // Writing into a String cannot fail
    let _ = writeln!(md, "# Plagiarism Report\n");
    let _ = writeln!(md, "*Generated {generated}*\n");
    let _ = writeln!(md, "**{} vs {}**\n", names.first, names.second);
    let _ = writeln!(md, "## Plagiarism Percent: {}%\n", report.percentage);
    let _ = writeln!(md, "- Total words in File 1: {}", report.word_count_1);
    let _ = writeln!(md, "- Total words in File 2: {}", report.word_count_2);
    let _ = writeln!(md, "- Common words count: {}\n", report.common_word_count);

    let _ = writeln!(md, "### Common Words:\n");
    if report.common_words.is_empty() {
        let _ = writeln!(md, "None\n");
    } else {
        let _ = writeln!(md, "{}\n", report.common_words.join(", "));
    }

    let _ = writeln!(md, "### Common Sentences ({}):\n", report.common_sentences.len());
    if report.common_sentences.is_empty() {
        let _ = writeln!(md, "No common sentences found.\n");
    } else {
        for (i, sentence) in report.common_sentences.iter().enumerate() {
            let _ = writeln!(md, "{}. {}", i + 1, sentence);
        }
        md.push('\n');
    }

    if show_text {
        let _ = writeln!(md, "---\n");
        let _ = writeln!(md, "## File 1 Content with Highlighted Common Sentences\n");
        let _ = writeln!(md, "{}\n", report.highlighted_text_1);
        let _ = writeln!(md, "## File 2 Content with Highlighted Common Sentences\n");
        let _ = writeln!(md, "{}\n", report.highlighted_text_2);
    }

    let _ = writeln!(md, "> {}", report.verdict());
    md
}

/// Write the rendered report to `path`, creating parent directories.
pub fn write_report(markdown: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, markdown).with_context(|| format!("Failed to write {}", path.display()))
}
