// Marks shared sentences inside the original document text.
//
// Replacement is plain substring replacement, applied sentence by sentence
// on the running result. A shared sentence that also occurs inside a longer
// sentence gets marked there too, and a later sentence that is a substring of
// an earlier one is matched against the already-marked text.

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// How a highlighted sentence is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStyle {
    /// Bold red Markdown directive: `**:red[sentence]**`
    #[default]
    Markdown,
    /// Bold red ANSI escape codes for terminal output
    Ansi,
}

impl HighlightStyle {
    pub fn wrap(&self, sentence: &str) -> String {
        match self {
            HighlightStyle::Markdown => format!("**:red[{sentence}]**"),
            HighlightStyle::Ansi => sentence.red().bold().to_string(),
        }
    }
}

/// Wrap every literal occurrence of each common sentence in `text`.
pub fn highlight(text: &str, common_sentences: &[String], style: HighlightStyle) -> String {
    let mut result = text.to_string();
    for sentence in common_sentences {
        if sentence.is_empty() {
            continue;
        }
        result = result.replace(sentence.as_str(), &style.wrap(sentence));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_markdown_wraps_every_occurrence() {
        let text = "Shared line here now. Other. Shared line here now.";
        let out = highlight(text, &sentences(&["Shared line here now."]), HighlightStyle::Markdown);
        assert_eq!(
            out,
            "**:red[Shared line here now.]** Other. **:red[Shared line here now.]**"
        );
    }

    #[test]
    fn test_substring_inside_longer_sentence_is_marked() {
        let text = "He said the cat sat down. It is late.";
        let out = highlight(text, &sentences(&["the cat sat down."]), HighlightStyle::Markdown);
        assert_eq!(out, "He said **:red[the cat sat down.]** It is late.");
    }

    #[test]
    fn test_sequential_replacement_is_order_dependent() {
        // The second sentence is a substring of the first; it is replaced in
        // the already-marked text, nesting the markers.
        let text = "One two three four five.";
        let common = sentences(&["One two three four five.", "three four five."]);
        let out = highlight(text, &common, HighlightStyle::Markdown);
        assert_eq!(out, "**:red[One two **:red[three four five.]**]**");
    }

    #[test]
    fn test_absent_sentence_leaves_text_unchanged() {
        let text = "Nothing matches here.";
        let out = highlight(text, &sentences(&["Something else."]), HighlightStyle::Markdown);
        assert_eq!(out, text);
    }

    #[test]
    fn test_ansi_style_keeps_sentence_text() {
        colored::control::set_override(true);
        let wrapped = HighlightStyle::Ansi.wrap("Copied words.");
        assert!(wrapped.contains("Copied words."));
        assert_ne!(wrapped, "Copied words.");
    }
}
