mod docx;
mod pdf;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ExtractError;

static HSPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static NEWLINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

/// Boilerplate phrases removed before segmentation. Matched as literal
/// case-insensitive substrings, so a phrase that happens to sit inside a
/// larger word fragments it. Accepted behavior.
const NOISE_PHRASES: &[&str] = &[
    "user interface",
    "currently pursuing",
    "focus on backend development",
    "api engineering",
];

static NOISE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    NOISE_PHRASES
        .iter()
        .map(|phrase| Regex::new(&format!("(?i){}", regex::escape(phrase))).unwrap())
        .collect()
});

/// Turn a resume document into normalized plain text.
///
/// `declared_extension` must be `pdf` or `docx` (case-insensitive).
/// Unreadable content surfaces as [`ExtractError::Extraction`] and is
/// never retried here.
pub fn extract_text(bytes: &[u8], declared_extension: &str) -> Result<String, ExtractError> {
    let ext = declared_extension.trim().trim_start_matches('.').to_lowercase();

    let raw = match ext.as_str() {
        "pdf" => pdf::extract(bytes)?,
        "docx" => docx::extract(bytes)?,
        other => return Err(ExtractError::UnsupportedFormat(other.to_string())),
    };

    Ok(normalize_text(&raw))
}

/// Normalization applied to every extracted document, in this order:
/// horizontal whitespace runs to one space, newline runs to one newline
/// (blank-line paragraph structure is lost, known limitation), noise
/// phrases removed, then trim.
pub fn normalize_text(text: &str) -> String {
    let text = HSPACE_RE.replace_all(text, " ");
    let mut text = NEWLINES_RE.replace_all(&text, "\n").into_owned();

    for re in NOISE_RES.iter() {
        text = re.replace_all(&text, "").into_owned();
    }

    text.trim().to_string()
}
