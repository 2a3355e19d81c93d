//! Plain-text extraction from paginated PDF documents.
//!
//! Bytes in, concatenated page text out. Layout, fonts, and images are not
//! interpreted -- this crate exists so callers can hand a document's words
//! to something else (here: a language model) without caring how PDF stores
//! them.

use lopdf::Document;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocTextError {
    #[error("PDF parsing error: {0}")]
    Parse(String),
    #[error("Document is encrypted")]
    Encrypted,
}

/// A parsed document reduced to its per-page text.
///
/// Constructed via [`DocText::from_bytes`]. Pages that carry no extractable
/// text (scanned images, broken content streams) contribute an empty string
/// rather than failing the whole document.
#[derive(Debug)]
pub struct DocText {
    pages: Vec<String>,
}

impl DocText {
    /// Parse PDF bytes and extract the text of every page, in page order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocTextError> {
        let doc = Document::load_mem(bytes).map_err(|e| DocTextError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            return Err(DocTextError::Encrypted);
        }

        let mut pages = Vec::new();
        for &number in doc.get_pages().keys() {
            // A page whose text cannot be decoded contributes nothing.
            let text = doc.extract_text(&[number]).unwrap_or_default();
            pages.push(text);
        }

        Ok(DocText { pages })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All page texts joined with single spaces.
    pub fn text(&self) -> String {
        self.pages.join(" ")
    }
}

/// Extract the full text of a PDF held in memory.
pub fn extract_text(bytes: &[u8]) -> Result<String, DocTextError> {
    Ok(DocText::from_bytes(bytes)?.text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Build a one-page PDF containing `text`, returned as raw bytes.
    fn pdf_with_text(text: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 48.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content stream"),
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("serialize document");
        bytes
    }

    #[test]
    fn test_extracts_page_text() {
        let bytes = pdf_with_text("Hello World!");
        let doc = DocText::from_bytes(&bytes).unwrap();
        assert_eq!(doc.page_count(), 1);
        assert!(doc.text().contains("Hello World!"));
    }

    #[test]
    fn test_extract_text_free_function() {
        let bytes = pdf_with_text("wire transfer required");
        let text = extract_text(&bytes).unwrap();
        assert!(text.contains("wire transfer required"));
    }

    #[test]
    fn test_garbage_bytes_fail_to_parse() {
        let err = DocText::from_bytes(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, DocTextError::Parse(_)));
    }

    #[test]
    fn test_empty_input_fails_to_parse() {
        assert!(matches!(
            DocText::from_bytes(&[]),
            Err(DocTextError::Parse(_))
        ));
    }
}
