use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::JobPosting;

use super::scorer::{round_score, EmbeddedJob, ResumeProfile, SimilarityScorer};

/// Ranking knobs, passed in per request rather than held globally.
#[derive(Debug, Clone, Copy)]
pub struct RankerConfig {
    pub top_n: usize,
    pub threshold: f64,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            threshold: 0.6,
        }
    }
}

/// One ranked job, shaped for callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: i64,
    pub job_title: String,
    pub skills: Vec<String>,
    pub description: String,
    pub similarity_score: f64,
}

/// Job catalogue with its skill/description embeddings computed once.
/// Build per catalogue version and reuse across match requests; job
/// texts are never re-embedded per request.
pub struct EmbeddedCatalog {
    jobs: Vec<EmbeddedJob>,
}

impl EmbeddedCatalog {
    pub fn new(scorer: &SimilarityScorer, jobs: &[JobPosting]) -> Self {
        Self {
            jobs: jobs.iter().map(|job| scorer.embed_job(job)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Rank a job catalogue against one resume profile.
///
/// Keeps jobs whose unrounded score passes the inclusive threshold,
/// sorts descending (stable, so equal scores keep catalogue order),
/// truncates to `top_n`, and rounds the score only when shaping the
/// result records.
pub fn rank(
    scorer: &SimilarityScorer,
    profile: &ResumeProfile,
    jobs: &[JobPosting],
    config: RankerConfig,
) -> Vec<MatchResult> {
    rank_catalog(scorer, profile, &EmbeddedCatalog::new(scorer, jobs), config)
}

/// Same as [`rank`] but reuses pre-embedded job texts.
pub fn rank_catalog(
    scorer: &SimilarityScorer,
    profile: &ResumeProfile,
    catalog: &EmbeddedCatalog,
    config: RankerConfig,
) -> Vec<MatchResult> {
    let resume = scorer.embed_profile(profile);

    let mut kept: Vec<(&EmbeddedJob, f64)> = catalog
        .jobs
        .iter()
        .map(|job| (job, scorer.score_embedded(&resume, job).total))
        .filter(|(_, score)| *score >= config.threshold)
        .collect();

    debug!(
        candidates = catalog.jobs.len(),
        kept = kept.len(),
        threshold = config.threshold,
        "ranked job catalogue"
    );

    kept.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    kept.truncate(config.top_n);

    kept.into_iter()
        .map(|(embedded, score)| MatchResult {
            job_id: embedded.job.id,
            job_title: embedded.job.title.clone(),
            skills: embedded.job.skill_list(),
            description: embedded.job.description.clone(),
            similarity_score: round_score(score),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::testutil::StubEmbedder;
    use super::*;

    fn job(id: i64, skills: &str, description: &str) -> JobPosting {
        JobPosting {
            id,
            title: format!("job-{id}"),
            skills: skills.into(),
            description: description.into(),
        }
    }

    fn profile() -> ResumeProfile {
        ResumeProfile {
            skills: vec!["python".into()],
            experience_text: "acme".into(),
            education_text: String::new(),
        }
    }

    /// skills cos 1.0 -> 0.5; experience cos 1.0 -> +0.3; an unknown
    /// description zeroes both description pairings.
    fn scorer() -> SimilarityScorer {
        let embedder = StubEmbedder::new(vec![
            ("python", vec![1.0, 0.0]),
            ("acme", vec![1.0, 0.0]),
            ("match desc", vec![1.0, 0.0]),
            ("half skills", vec![0.0, 1.0]),
        ]);
        SimilarityScorer::with_default_weights(Arc::new(embedder))
    }

    #[test]
    fn filters_below_threshold_and_keeps_the_best() {
        // job 1 scores 0.8 (skills + experience), job 2 scores 0.5.
        let jobs = vec![job(1, "python", "match desc"), job(2, "python", "no desc entry")];
        let results = rank(&scorer(), &profile(), &jobs, RankerConfig { top_n: 1, threshold: 0.6 });

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].job_id, 1);
        assert_eq!(results[0].similarity_score, 0.8);
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        // job scores exactly 0.5: skills pairing alone.
        let jobs = vec![job(7, "python", "no desc entry")];
        let results = rank(&scorer(), &profile(), &jobs, RankerConfig { top_n: 5, threshold: 0.5 });

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].similarity_score, 0.5);
    }

    #[test]
    fn results_sort_descending_and_ties_keep_catalogue_order() {
        let jobs = vec![
            job(1, "python", "no desc entry"),
            job(2, "python", "match desc"),
            job(3, "python", "no desc entry"),
        ];
        let results = rank(&scorer(), &profile(), &jobs, RankerConfig { top_n: 5, threshold: 0.0 });

        let ids: Vec<i64> = results.iter().map(|r| r.job_id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn truncates_to_top_n() {
        let jobs: Vec<JobPosting> = (1..=4).map(|id| job(id, "python", "match desc")).collect();
        let results = rank(&scorer(), &profile(), &jobs, RankerConfig::default());
        assert_eq!(results.len(), 4);

        let results = rank(
            &scorer(),
            &profile(),
            &jobs,
            RankerConfig { top_n: 2, threshold: 0.6 },
        );
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn empty_catalogue_ranks_to_nothing() {
        let results = rank(&scorer(), &profile(), &[], RankerConfig::default());
        assert!(results.is_empty());
    }

    #[test]
    fn shapes_results_with_split_skills() {
        let jobs = vec![job(9, "python, sql", "match desc")];
        let results = rank(&scorer(), &profile(), &jobs, RankerConfig { top_n: 5, threshold: 0.0 });

        assert_eq!(results[0].skills, vec!["python", "sql"]);
        assert_eq!(results[0].job_title, "job-9");
    }
}
