use std::sync::Arc;

use crate::embed::{Embedding, TextEmbedder};
use crate::{JobPosting, ParsedResume};

use super::weights::MatchWeights;

/// The three resume-side texts the scorer embeds. Built from a
/// [`ParsedResume`] or directly from a match request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeProfile {
    pub skills: Vec<String>,
    pub experience_text: String,
    pub education_text: String,
}

impl From<&ParsedResume> for ResumeProfile {
    fn from(resume: &ParsedResume) -> Self {
        let experience_text = resume
            .experience
            .iter()
            .map(|e| format!("{} ({})", e.company, e.duration))
            .collect::<Vec<_>>()
            .join(" | ");

        Self {
            skills: resume.skills.clone(),
            experience_text,
            education_text: resume.education.join("\n"),
        }
    }
}

/// Resume-side embeddings, computed once per match request. `None`
/// means the corresponding field had no text.
#[derive(Debug, Clone)]
pub struct ResumeEmbeddings {
    pub skills: Option<Embedding>,
    pub experience: Option<Embedding>,
    pub education: Option<Embedding>,
}

/// Job-side embeddings. Reusable across requests while the catalogue
/// is unchanged.
#[derive(Debug, Clone)]
pub struct EmbeddedJob {
    pub job: JobPosting,
    pub skills: Option<Embedding>,
    pub description: Option<Embedding>,
}

/// Per-field similarities plus their weighted combination.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreBreakdown {
    pub skills: f32,
    pub experience: f32,
    pub education: f32,
    pub total: f64,
}

/// Multi-field weighted semantic scorer.
pub struct SimilarityScorer {
    embedder: Arc<dyn TextEmbedder>,
    weights: MatchWeights,
}

impl SimilarityScorer {
    pub fn new(embedder: Arc<dyn TextEmbedder>, weights: MatchWeights) -> Self {
        Self { embedder, weights }
    }

    pub fn with_default_weights(embedder: Arc<dyn TextEmbedder>) -> Self {
        Self::new(embedder, MatchWeights::default())
    }

    pub fn weights(&self) -> MatchWeights {
        self.weights
    }

    pub fn embed_profile(&self, profile: &ResumeProfile) -> ResumeEmbeddings {
        ResumeEmbeddings {
            skills: self.embedder.embed(&profile.skills.join(" ")),
            experience: self.embedder.embed(&profile.experience_text),
            education: self.embedder.embed(&profile.education_text),
        }
    }

    pub fn embed_job(&self, job: &JobPosting) -> EmbeddedJob {
        EmbeddedJob {
            skills: self.embedder.embed(&job.skills),
            description: self.embedder.embed(&job.description),
            job: job.clone(),
        }
    }

    /// Weighted final score for one resume/job pairing.
    pub fn score(&self, profile: &ResumeProfile, job: &JobPosting) -> f64 {
        self.score_embedded(&self.embed_profile(profile), &self.embed_job(job))
            .total
    }

    /// Score against pre-computed embeddings. A missing embedding on
    /// either side zeroes that pairing; it never errors.
    pub fn score_embedded(&self, resume: &ResumeEmbeddings, job: &EmbeddedJob) -> ScoreBreakdown {
        let skills = self.pair(&resume.skills, &job.skills);
        let experience = self.pair(&resume.experience, &job.description);
        let education = self.pair(&resume.education, &job.description);

        let total = f64::from(skills) * self.weights.skills
            + f64::from(experience) * self.weights.experience
            + f64::from(education) * self.weights.education;

        ScoreBreakdown {
            skills,
            experience,
            education,
            total,
        }
    }

    fn pair(&self, a: &Option<Embedding>, b: &Option<Embedding>) -> f32 {
        match (a, b) {
            (Some(a), Some(b)) => self.embedder.similarity(a, b),
            _ => 0.0,
        }
    }
}

/// Round for presentation. Threshold comparison happens on the
/// unrounded value; rounding is applied after filtering and sorting.
pub fn round_score(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
