/// Domain errors whose Display text is exactly the sentence shown to the
/// user. Handlers keep these structured until the render call and only
/// flatten to a string at the presentation boundary.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("No file uploaded.")]
    NoFileUploaded,

    #[error("Invalid file type. Please upload a PDF or TXT file.")]
    UnsupportedFileType,

    #[error("Error reading PDF file.")]
    DocumentRead,

    #[error("Error reading TXT file.")]
    TextRead,

    #[error("File is empty or text could not be extracted.")]
    EmptyContent,

    #[error("Invalid URL format. Include http:// or https://")]
    InvalidUrlFormat,
}
