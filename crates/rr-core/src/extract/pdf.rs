use crate::error::ExtractError;

/// Pull raw text out of a PDF byte stream. Encrypted, scanned-only and
/// corrupted documents surface as [`ExtractError::Extraction`].
pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|err| ExtractError::Extraction(format!("pdf: {err}")))
}
