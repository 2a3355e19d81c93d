use std::str::Utf8Error;

/// Supported uploaded-file kinds, decided by filename suffix alone.
///
/// Matching is a case-sensitive suffix check -- no content sniffing. A
/// renamed file with the wrong bytes inside gets past this and fails (or
/// confuses the model) later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Text,
}

impl FileKind {
    /// Classify a filename, or `None` when the suffix is unsupported.
    pub fn from_name(name: &str) -> Option<FileKind> {
        if name.ends_with(".pdf") {
            Some(FileKind::Pdf)
        } else if name.ends_with(".txt") {
            Some(FileKind::Text)
        } else {
            None
        }
    }
}

/// Decode the bytes of a `.txt` upload as UTF-8.
pub fn decode_text(bytes: &[u8]) -> Result<String, Utf8Error> {
    std::str::from_utf8(bytes).map(str::to_owned)
}

/// True when extracted text carries no content worth classifying.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
