use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::MatchResult;

/// Ranked matches for one request, best first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResponse {
    pub matched_jobs: Vec<MatchResult>,
}

impl From<Vec<MatchResult>> for MatchResponse {
    fn from(matched_jobs: Vec<MatchResult>) -> Self {
        Self { matched_jobs }
    }
}

/// A stored match read back as history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchHistoryEntry {
    pub job_id: i64,
    pub job_title: String,
    pub skills: Vec<String>,
    pub description: String,
    pub similarity_score: f64,
    pub matched_at: DateTime<Utc>,
}

impl MatchHistoryEntry {
    pub fn from_result(result: MatchResult, matched_at: DateTime<Utc>) -> Self {
        Self {
            job_id: result.job_id,
            job_title: result.job_title,
            skills: result.skills,
            description: result.description,
            similarity_score: result.similarity_score,
            matched_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_matched_jobs_key() {
        let response = MatchResponse::from(vec![MatchResult {
            job_id: 1,
            job_title: "Backend Engineer".into(),
            skills: vec!["python".into()],
            description: "desc".into(),
            similarity_score: 0.7321,
        }]);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["matched_jobs"][0]["job_id"], 1);
        assert_eq!(json["matched_jobs"][0]["similarity_score"], 0.7321);
    }
}
