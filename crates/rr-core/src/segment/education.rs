use once_cell::sync::Lazy;
use regex::Regex;

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "b.sc",
    "m.sc",
    "btech",
    "mtech",
    "mba",
    "phd",
    "high school",
    "diploma",
];

/// Words that mark a line as a section heading rather than a degree line.
const STOP_WORDS: &[&str] = &["experience", "professional"];

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\b").unwrap());
static SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static ALPHA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]").unwrap());

fn contains_stop_word(line_lower: &str) -> bool {
    STOP_WORDS.iter().any(|stop| line_lower.contains(stop))
}

/// Recover education entries as anchored line-windows.
///
/// An anchor line contains an education keyword and no stop word. Up to
/// two following lines are appended, stopping early on a stop word or a
/// line longer than 15 tokens (prose, not an institution name). Years
/// are stripped from the combined entry, whitespace re-collapsed, and
/// the entry is kept only if alphabetic content remains. Exact
/// duplicates collapse; near-duplicate windows do not.
pub fn extract_education(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    let mut found: Vec<String> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let line_lower = line.to_lowercase();

        if !EDUCATION_KEYWORDS.iter().any(|kw| line_lower.contains(kw)) {
            continue;
        }
        if contains_stop_word(&line_lower) {
            continue;
        }

        let mut combined = line.trim().to_string();

        for next in lines.iter().skip(i + 1).take(2) {
            let next = next.trim();
            let next_lower = next.to_lowercase();

            if contains_stop_word(&next_lower) {
                break;
            }
            if next.split_whitespace().count() > 15 {
                break;
            }

            combined.push(' ');
            combined.push_str(next);
        }

        let combined = YEAR_RE.replace_all(&combined, "");
        let combined = SPACE_RE.replace_all(&combined, " ").trim().to_string();

        if ALPHA_RE.is_match(&combined) && !found.contains(&combined) {
            found.push(combined);
        }
    }

    found
}
