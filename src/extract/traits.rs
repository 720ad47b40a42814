// Text extractor trait: one implementation per document format.

use crate::error::BoxError;

/// Converts a file's raw bytes into plain text.
///
/// Errors carry the underlying parser failure unchanged; the caller wraps it
/// with the file slot it came from.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, BoxError>;
}
