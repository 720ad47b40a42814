use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::text::StopWords;

/// Default upper bound on input file size (50 MiB).
pub const DEFAULT_MAX_FILE_BYTES: u64 = 50 * 1024 * 1024;

/// Central configuration loaded from environment variables.
///
/// Nothing is required; every setting has a default. The .env file is
/// loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Extra stopwords from CARBON_EXTRA_STOPWORDS (comma-separated)
    pub extra_stopwords: Vec<String>,
    /// Newline-separated stopword file from CARBON_STOPWORDS_FILE
    pub stopwords_file: Option<PathBuf>,
    /// Inputs larger than this are refused before extraction
    pub max_file_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extra_stopwords: Vec::new(),
            stopwords_file: None,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let extra_stopwords = env::var("CARBON_EXTRA_STOPWORDS")
            .map(|raw| parse_word_list(&raw))
            .unwrap_or_default();

        let stopwords_file = env::var("CARBON_STOPWORDS_FILE")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let max_file_bytes = match env::var("CARBON_MAX_FILE_BYTES") {
            Ok(raw) if !raw.trim().is_empty() => raw.trim().parse::<u64>().with_context(|| {
                format!("CARBON_MAX_FILE_BYTES must be a whole number of bytes, got '{raw}'")
            })?,
            _ => DEFAULT_MAX_FILE_BYTES,
        };

        Ok(Self {
            extra_stopwords,
            stopwords_file,
            max_file_bytes,
        })
    }

    /// Build the stopword set: the English list plus any configured extras.
    pub fn stop_words(&self) -> Result<StopWords> {
        let mut stop_words = StopWords::english().with_extra(&self.extra_stopwords);
        if let Some(path) = &self.stopwords_file {
            stop_words = stop_words.with_extra(read_stopword_file(path)?);
        }
        Ok(stop_words)
    }
}

/// Split a comma-separated list, dropping blanks.
fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// One word per line; blank lines and `#` comments are skipped.
fn read_stopword_file(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read stopword file {}", path.display()))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_word_list() {
        assert_eq!(
            parse_word_list(" lorem, ipsum ,,dolor "),
            vec!["lorem", "ipsum", "dolor"]
        );
        assert!(parse_word_list("").is_empty());
    }

    #[test]
    fn test_stop_words_includes_extras_and_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# project jargon").unwrap();
        writeln!(file, "Widget").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "gizmo").unwrap();

        let config = Config {
            extra_stopwords: vec!["lorem".to_string()],
            stopwords_file: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let sw = config.stop_words().unwrap();
        assert!(sw.contains("the"));
        assert!(sw.contains("lorem"));
        assert!(sw.contains("widget"));
        assert!(sw.contains("gizmo"));
        assert!(!sw.contains("# project jargon"));
    }

    #[test]
    fn test_missing_stopword_file_is_an_error() {
        let config = Config {
            stopwords_file: Some(PathBuf::from("/nonexistent/carbon-stopwords.txt")),
            ..Config::default()
        };
        assert!(config.stop_words().is_err());
    }
}
