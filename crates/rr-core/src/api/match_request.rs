use serde::Deserialize;

use crate::matching::{RankerConfig, ResumeProfile};

fn default_top_n() -> usize {
    5
}

fn default_threshold() -> f64 {
    0.6
}

/// A match request from an external caller.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub resume_data: ResumeData,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

/// Resume fields as callers supply them. `experience` and `education`
/// accept either one free-text blob or a list of entries.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeData {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: FieldText,
    #[serde(default)]
    pub education: FieldText,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldText {
    Text(String),
    Entries(Vec<String>),
}

impl Default for FieldText {
    fn default() -> Self {
        FieldText::Text(String::new())
    }
}

impl FieldText {
    pub fn as_text(&self) -> String {
        match self {
            FieldText::Text(text) => text.clone(),
            FieldText::Entries(entries) => entries.join("\n"),
        }
    }
}

impl MatchRequest {
    pub fn profile(&self) -> ResumeProfile {
        ResumeProfile {
            skills: self.resume_data.skills.clone(),
            experience_text: self.resume_data.experience.as_text(),
            education_text: self.resume_data.education.as_text(),
        }
    }

    pub fn ranker_config(&self) -> RankerConfig {
        RankerConfig {
            top_n: self.top_n,
            threshold: self.threshold,
        }
    }
}
