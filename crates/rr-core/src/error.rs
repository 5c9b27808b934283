use thiserror::Error;

/// Failures raised while turning an uploaded document into text.
///
/// These are fatal to the current request and surfaced to the caller;
/// nothing downstream of extraction raises for noisy input.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The declared extension is not one we handle. User-correctable.
    #[error("unsupported file type: {0} (use pdf or docx)")]
    UnsupportedFormat(String),
    /// The document content could not be read. Not retried.
    #[error("failed to extract text: {0}")]
    Extraction(String),
}

/// A duration string that does not hold a two-endpoint year range.
/// Swallowed during total-experience computation (contributes zero).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unparsable year range: {raw}")]
pub struct YearRangeError {
    pub raw: String,
}
