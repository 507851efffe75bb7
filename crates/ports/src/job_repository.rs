//! Job Repository Port
//!
//! Defines the interface for job posting persistence.

use async_trait::async_trait;
use jobhub_core::{CompanyId, Job, JobId};

/// Draft of a job posting before the store allocates an id
#[derive(Debug, Clone)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub min_salary: f64,
    pub max_salary: f64,
    pub location: String,
    pub company_id: CompanyId,
}

/// Job repository port
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a new job posting, allocating its id
    async fn create_job(&self, draft: JobDraft) -> Result<Job, JobRepositoryError>;

    /// Get a job by id
    async fn get_job(&self, id: JobId) -> Result<Option<Job>, JobRepositoryError>;

    /// Get all jobs
    async fn list_jobs(&self) -> Result<Vec<Job>, JobRepositoryError>;

    /// Persist an updated job record
    async fn save_job(&self, job: &Job) -> Result<(), JobRepositoryError>;

    /// Delete a job; returns `false` if the id was absent
    async fn delete_job(&self, id: JobId) -> Result<bool, JobRepositoryError>;
}

/// Job repository error
#[derive(thiserror::Error, Debug)]
pub enum JobRepositoryError {
    #[error("job not found: {0}")]
    NotFound(JobId),

    #[error("storage error: {0}")]
    Storage(String),
}
