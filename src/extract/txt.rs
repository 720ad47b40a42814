// Plain text: best-effort UTF-8.

use crate::error::BoxError;

use super::traits::TextExtractor;

pub struct TxtExtractor;

impl TextExtractor for TxtExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, BoxError> {
        Ok(decode_utf8_ignoring_errors(bytes))
    }
}

/// Decode UTF-8, dropping undecodable byte sequences instead of substituting
/// U+FFFD. Never fails.
pub fn decode_utf8_ignoring_errors(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
