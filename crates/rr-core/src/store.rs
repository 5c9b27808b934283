use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::JobPosting;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("job catalog unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("match store unavailable: {0}")]
    Unavailable(String),
}

/// Source of job postings to rank against. Backed by a database in a
/// full deployment; in-memory here.
pub trait JobCatalog: Send + Sync {
    fn jobs(&self) -> Result<Vec<JobPosting>, CatalogError>;
}

/// One row handed to the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub resume_id: i64,
    pub job_id: i64,
    pub similarity_score: f64,
}

/// A persisted match as it reads back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredMatch {
    pub resume_id: i64,
    pub job_id: i64,
    pub similarity_score: f64,
    pub matched_at: DateTime<Utc>,
}

/// Persistence collaborator for match results.
pub trait MatchStore: Send + Sync {
    fn store_matches(&self, records: &[MatchRecord]) -> Result<(), StoreError>;

    /// Stored matches for one resume, most recent first.
    fn history(&self, resume_id: i64) -> Result<Vec<StoredMatch>, StoreError>;
}

/// Fixed catalogue, used by the CLI and tests.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    jobs: Vec<JobPosting>,
}

impl InMemoryCatalog {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self { jobs }
    }
}

impl JobCatalog for InMemoryCatalog {
    fn jobs(&self) -> Result<Vec<JobPosting>, CatalogError> {
        Ok(self.jobs.clone())
    }
}

/// Match store that keeps rows in memory.
#[derive(Debug, Default)]
pub struct InMemoryMatchStore {
    rows: Mutex<Vec<StoredMatch>>,
}

impl MatchStore for InMemoryMatchStore {
    fn store_matches(&self, records: &[MatchRecord]) -> Result<(), StoreError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;

        let matched_at = Utc::now();
        rows.extend(records.iter().map(|record| StoredMatch {
            resume_id: record.resume_id,
            job_id: record.job_id,
            similarity_score: record.similarity_score,
            matched_at,
        }));
        Ok(())
    }

    fn history(&self, resume_id: i64) -> Result<Vec<StoredMatch>, StoreError> {
        let rows = self
            .rows
            .lock()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;

        let mut history: Vec<StoredMatch> = rows
            .iter()
            .rev()
            .filter(|row| row.resume_id == resume_id)
            .cloned()
            .collect();
        history.sort_by(|a, b| b.matched_at.cmp(&a.matched_at));
        Ok(history)
    }
}
