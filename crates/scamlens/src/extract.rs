use scamlens_core::upload::{self, FileKind};

use crate::error::Error;

/// Extract classifiable text from an uploaded file.
///
/// Dispatches on the filename suffix: PDFs go through [`doctext`], `.txt`
/// files are decoded as UTF-8. Extraction that technically succeeds but
/// yields only whitespace is rejected -- there is nothing to classify.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, Error> {
    let kind = FileKind::from_name(filename).ok_or(Error::UnsupportedFileType)?;

    let text = match kind {
        FileKind::Pdf => doctext::extract_text(bytes).map_err(|_| Error::DocumentRead)?,
        FileKind::Text => upload::decode_text(bytes).map_err(|_| Error::TextRead)?,
    };

    if upload::is_blank(&text) {
        return Err(Error::EmptyContent);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_suffix() {
        assert_eq!(
            extract_text("photo.png", b"bytes"),
            Err(Error::UnsupportedFileType)
        );
    }

    #[test]
    fn test_txt_decodes() {
        let text = extract_text("mail.txt", "urgent wire transfer".as_bytes()).unwrap();
        assert_eq!(text, "urgent wire transfer");
    }

    #[test]
    fn test_txt_invalid_utf8() {
        assert_eq!(
            extract_text("mail.txt", &[0xff, 0xfe, 0x00]),
            Err(Error::TextRead)
        );
    }

    #[test]
    fn test_txt_whitespace_only() {
        assert_eq!(
            extract_text("mail.txt", b"  \n\t  "),
            Err(Error::EmptyContent)
        );
    }

    #[test]
    fn test_pdf_garbage_bytes() {
        assert_eq!(
            extract_text("report.pdf", b"not a pdf at all"),
            Err(Error::DocumentRead)
        );
    }
}
