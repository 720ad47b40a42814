// DOCX: paragraph text joined with single spaces, in document order.
//
// Only top-level body paragraphs count. Tables, headers and footnotes are
// skipped, and empty paragraphs still contribute their separator. Link text
// is part of its paragraph.

use crate::error::BoxError;

use super::traits::TextExtractor;

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, BoxError> {
        let docx = docx_rs::read_docx(bytes).map_err(|e| format!("DOCX parse error: {e}"))?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                docx_rs::DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect();

        Ok(paragraphs.join(" "))
    }
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut content = String::new();
    push_children_text(&paragraph.children, &mut content);
    content
}

fn push_children_text(children: &[docx_rs::ParagraphChild], content: &mut String) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        docx_rs::RunChild::Text(text) => content.push_str(&text.text),
                        docx_rs::RunChild::Tab(_) => content.push('\t'),
                        _ => {}
                    }
                }
            }
            docx_rs::ParagraphChild::Hyperlink(link) => push_children_text(&link.children, content),
            _ => {}
        }
    }
}
