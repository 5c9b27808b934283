pub mod api;
pub mod embed;
pub mod error;
pub mod extract;
pub mod logging;
pub mod matching;
pub mod ner;
pub mod segment;
pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Commonly used data models for the parsing and matching functions.

/// One recovered work-history entry. `duration` keeps the raw
/// `"<start>-<end>"` form; use [`segment::experience::parse_year_range`]
/// to interpret it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub duration: String,
}

/// Structured profile recovered from one resume document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    /// Lowercased, sorted, deduplicated.
    pub skills: Vec<String>,
    /// Deduplicated combined line-windows, years stripped.
    pub education: Vec<String>,
    /// In document order; entries with unparsable years stay listed.
    pub experience: Vec<ExperienceEntry>,
    /// Lowercased, sorted, deduplicated.
    pub job_titles: Vec<String>,
    pub total_experience_years: u32,
    pub parsed_at: DateTime<Utc>,
}

/// One job posting from the external catalogue. Read-only to this core;
/// `skills` stays in its stored comma-delimited form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    pub skills: String,
    pub description: String,
}

impl JobPosting {
    /// Split the stored skills field on commas, trimmed, empties dropped.
    pub fn skill_list(&self) -> Vec<String> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
