pub mod education;
pub mod experience;
pub mod skills;

use chrono::Utc;

use crate::ner::{CapitalizedSpanRecognizer, EntityRecognizer};
use crate::ParsedResume;

pub use education::extract_education;
pub use experience::{calculate_total_experience, extract_experience, parse_year_range};
pub use skills::extract_skills;

/// Heuristic section segmenter. Operates purely on normalized text and
/// always produces best-effort output; noisy or partial resumes never
/// fail here.
pub struct Segmenter {
    recognizer: Box<dyn EntityRecognizer>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(Box::new(CapitalizedSpanRecognizer))
    }
}

impl Segmenter {
    pub fn new(recognizer: Box<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }

    pub fn parse(&self, text: &str) -> ParsedResume {
        let experience = extract_experience(text);
        let total_experience_years = calculate_total_experience(&experience);

        ParsedResume {
            skills: extract_skills(text),
            education: extract_education(text),
            experience,
            job_titles: self.extract_job_titles(text),
            total_experience_years,
            parsed_at: Utc::now(),
        }
    }

    /// Organization spans of at most 4 tokens, lowercased, sorted and
    /// deduplicated.
    fn extract_job_titles(&self, text: &str) -> Vec<String> {
        let mut titles: Vec<String> = self
            .recognizer
            .organizations(text)
            .into_iter()
            .filter(|span| span.split_whitespace().count() <= 4)
            .map(|span| span.to_lowercase())
            .collect();

        titles.sort();
        titles.dedup();
        titles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "John Doe\nSenior Software Engineer\nSkills: python, sql, docker\nExperience\nAcme Corp\n2018-2021\nGlobex Inc\n2014 - 2018\nEducation\nB.Sc Computer Science 2010-2014\nState University";

    #[test]
    fn assembles_all_sections() {
        let parsed = Segmenter::default().parse(RESUME);

        assert_eq!(parsed.skills, vec!["docker", "python", "sql"]);
        assert_eq!(parsed.experience.len(), 2);
        assert_eq!(parsed.experience[0].company, "Acme Corp");
        assert_eq!(parsed.total_experience_years, 7);
        assert_eq!(parsed.education, vec!["B.Sc Computer Science - State University"]);
        assert!(parsed.job_titles.contains(&"acme corp".to_string()));
        assert!(parsed.job_titles.contains(&"senior software engineer".to_string()));
    }

    #[test]
    fn job_titles_longer_than_four_tokens_are_dropped() {
        let parsed = Segmenter::default().parse("Principal Staff Software Engineering Manager Lead");
        assert!(parsed.job_titles.is_empty());
    }

    #[test]
    fn job_titles_are_sorted_and_deduplicated() {
        let parsed = Segmenter::default().parse("Acme Corp\nAcme Corp\nBeta Labs");
        assert_eq!(parsed.job_titles, vec!["acme corp", "beta labs"]);
    }

    #[test]
    fn parsing_is_deterministic_on_normalized_text() {
        let segmenter = Segmenter::default();
        let a = segmenter.parse(RESUME);
        let b = segmenter.parse(RESUME);

        assert_eq!(a.skills, b.skills);
        assert_eq!(a.education, b.education);
        assert_eq!(a.experience, b.experience);
        assert_eq!(a.job_titles, b.job_titles);
        assert_eq!(a.total_experience_years, b.total_experience_years);
    }

    #[test]
    fn empty_text_parses_to_an_empty_profile() {
        let parsed = Segmenter::default().parse("");
        assert!(parsed.skills.is_empty());
        assert!(parsed.experience.is_empty());
        assert!(parsed.education.is_empty());
        assert_eq!(parsed.total_experience_years, 0);
    }
}
