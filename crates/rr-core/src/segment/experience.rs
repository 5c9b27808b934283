use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::YearRangeError;
use crate::ExperienceEntry;

/// Headings that open the work-history section (substring match).
const SECTION_HEADINGS: &[&str] = &["experience", "employment", "work history"];

static YEAR_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\s*[-–—]?\s*(19\d{2}|20\d{2})\b").unwrap());
static ALPHA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]").unwrap());

/// Scanner state for the linear pass over the resume lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeSection,
    InSection,
    Done,
}

fn is_section_heading(line_lower: &str) -> bool {
    SECTION_HEADINGS.iter().any(|h| line_lower.contains(h))
}

/// Parse a two-endpoint year range (both years in 1900-2099, optional
/// separator) out of a duration string.
pub fn parse_year_range(raw: &str) -> Result<(i32, i32), YearRangeError> {
    let caps = YEAR_RANGE_RE.captures(raw).ok_or_else(|| YearRangeError {
        raw: raw.to_string(),
    })?;

    // Both captures are \d{4} by construction.
    let start = caps[1].parse::<i32>().map_err(|_| YearRangeError {
        raw: raw.to_string(),
    })?;
    let end = caps[2].parse::<i32>().map_err(|_| YearRangeError {
        raw: raw.to_string(),
    })?;

    Ok((start, end))
}

/// Recover work-history entries with a three-state line scan.
///
/// A heading line enters the section (re-encountering one is
/// idempotent); a line containing `education` while in section ends the
/// scan for good. In section, a short line with alphabetic content
/// becomes the pending company candidate, and a line carrying a year
/// range closes the pending candidate into an entry. A range with no
/// pending candidate is dropped. Candidates are not screened for
/// numeric or percentage noise.
pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let mut state = ScanState::BeforeSection;
    let mut pending: Option<String> = None;
    let mut entries: Vec<ExperienceEntry> = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let line_lower = line.to_lowercase();

        match state {
            ScanState::BeforeSection => {
                if is_section_heading(&line_lower) {
                    state = ScanState::InSection;
                }
            }
            ScanState::InSection => {
                // An education section after experience ends the scan;
                // a second experience section is assumed never to follow.
                if line_lower.contains("education") {
                    state = ScanState::Done;
                    continue;
                }
                if is_section_heading(&line_lower) {
                    continue;
                }

                if ALPHA_RE.is_match(line) && line.split_whitespace().count() <= 7 {
                    pending = Some(line.to_string());
                }

                if let Some(caps) = YEAR_RANGE_RE.captures(line) {
                    if let Some(company) = pending.take() {
                        entries.push(ExperienceEntry {
                            company,
                            duration: format!("{}-{}", &caps[1], &caps[2]),
                        });
                    }
                }
            }
            ScanState::Done => break,
        }
    }

    entries
}

/// Sum `end - start` over every entry whose duration parses; entries
/// that do not parse contribute zero and are skipped silently. Inverted
/// ranges are summed as-is; only the final total saturates at zero.
pub fn calculate_total_experience(entries: &[ExperienceEntry]) -> u32 {
    let total: i64 = entries
        .iter()
        .filter_map(|entry| match parse_year_range(&entry.duration) {
            Ok((start, end)) => Some(i64::from(end) - i64::from(start)),
            Err(err) => {
                debug!(company = %entry.company, error = %err, "skipping unparsable duration");
                None
            }
        })
        .sum();

    total.max(0) as u32
}
