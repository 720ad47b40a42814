// PDF: text extracted page by page and concatenated in page order.

use tracing::warn;

use crate::error::BoxError;

use super::traits::TextExtractor;

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, BoxError> {
        // pdf-extract panics on some malformed files instead of returning Err
        let pages =
            std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
                .map_err(|_| "PDF extraction aborted: malformed document structure")?
                .map_err(|e| format!("PDF extraction failed: {e}"))?;

        let text = join_pages(&pages);
        if text.trim().is_empty() && !pages.is_empty() {
            warn!(pages = pages.len(), "PDF has no extractable text (scanned document?)");
        }
        Ok(text)
    }
}

/// Concatenate page texts with no separator. Pages without text add nothing.
fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .filter(|page| !page.trim().is_empty())
        .map(String::as_str)
        .collect()
}
