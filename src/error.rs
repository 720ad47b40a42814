// Error kinds for a single comparison run.
//
// Every variant is terminal for the current invocation. The Display text is
// the one message the user sees, so it names the file slot where that helps.

use std::fmt;

use thiserror::Error;

/// Which of the two input files an error or upload refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileSlot {
    First,
    Second,
}

impl FileSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileSlot::First => "File 1",
            FileSlot::Second => "File 2",
        }
    }
}

impl fmt::Display for FileSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Boxed cause carried by `CheckError::FileRead`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum CheckError {
    /// One or both uploads were absent. `slots` lists the missing ones.
    #[error("Please upload both files (missing: {})", format_slots(.slots))]
    MissingInput { slots: Vec<FileSlot> },

    #[error("Unsupported format for {slot} (.{extension}); expected txt, pdf or docx")]
    UnsupportedFormat { slot: FileSlot, extension: String },

    #[error("Error reading {slot}: {source}")]
    FileRead {
        slot: FileSlot,
        #[source]
        source: BoxError,
    },

    #[error("One or both files contain no valid words to compare")]
    NoContent,
}

impl CheckError {
    /// The slot this error is attributed to, if any.
    pub fn slot(&self) -> Option<FileSlot> {
        match self {
            CheckError::UnsupportedFormat { slot, .. } | CheckError::FileRead { slot, .. } => {
                Some(*slot)
            }
            CheckError::MissingInput { slots } if slots.len() == 1 => Some(slots[0]),
            _ => None,
        }
    }
}

fn format_slots(slots: &[FileSlot]) -> String {
    slots
        .iter()
        .map(FileSlot::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
