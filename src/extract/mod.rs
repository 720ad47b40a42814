// Text extraction: turns an uploaded file's bytes into plain text.
//
// One extractor per supported format behind the `TextExtractor` trait. The
// format is chosen from the upload's declared extension only, so a mislabeled
// file fails in its own slot.

pub mod docx;
pub mod pdf;
pub mod traits;
pub mod txt;

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::error::{CheckError, FileSlot};

pub use traits::TextExtractor;

/// Formats the checker can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Txt,
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Map a lowercase extension to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "txt" => Some(DocumentFormat::Txt),
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Txt => "txt",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }

    /// The extractor for this format.
    pub fn extractor(&self) -> &'static dyn TextExtractor {
        match self {
            DocumentFormat::Txt => &txt::TxtExtractor,
            DocumentFormat::Pdf => &pdf::PdfExtractor,
            DocumentFormat::Docx => &docx::DocxExtractor,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One input file: its name (for the declared extension) and raw bytes.
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read an upload from disk, refusing files over `max_bytes`.
    pub fn from_path(path: &Path, max_bytes: u64) -> Result<Self> {
        let size = std::fs::metadata(path)
            .with_context(|| format!("Failed to stat {}", path.display()))?
            .len();
        if size > max_bytes {
            anyhow::bail!(
                "{} is {} bytes, over the {} byte limit (CARBON_MAX_FILE_BYTES)",
                path.display(),
                size,
                max_bytes
            );
        }

        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self { name, bytes })
    }

    /// The declared extension: everything after the last '.', lowercased.
    /// A name without a '.' is its own extension.
    pub fn extension(&self) -> String {
        declared_extension(&self.name)
    }

    pub fn format(&self) -> Option<DocumentFormat> {
        DocumentFormat::from_extension(&self.extension())
    }
}

fn declared_extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or_default().to_lowercase()
}

/// Resolve a file's format from its name, then read and extract it.
///
/// The format is checked before the file is opened, so an unsupported
/// extension is reported without touching the disk. Size and I/O failures
/// become `FileRead` for `slot`.
pub fn extract_file(path: &Path, slot: FileSlot, max_bytes: u64) -> Result<String, CheckError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = declared_extension(&name);
    if DocumentFormat::from_extension(&extension).is_none() {
        return Err(CheckError::UnsupportedFormat { slot, extension });
    }

    let upload = Upload::from_path(path, max_bytes).map_err(|e| CheckError::FileRead {
        slot,
        source: e.into(),
    })?;
    extract_upload(&upload, slot)
}

/// Resolve the upload's format and extract its text, attributing any failure
/// to `slot`.
pub fn extract_upload(upload: &Upload, slot: FileSlot) -> Result<String, CheckError> {
    let format = upload
        .format()
        .ok_or_else(|| CheckError::UnsupportedFormat {
            slot,
            extension: upload.extension(),
        })?;

    let text = format
        .extractor()
        .extract(&upload.bytes)
        .map_err(|source| CheckError::FileRead { slot, source })?;

    debug!(
        slot = %slot,
        format = %format,
        bytes = upload.bytes.len(),
        chars = text.chars().count(),
        "Extracted text"
    );

    Ok(text)
}
