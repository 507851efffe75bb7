//! Job Module
//!
//! CRUD over the job store. Reads enrich each posting with a company
//! snapshot and review list fetched from the other domains, one client
//! call pair per job.

use jobhub_core::{Company, Job, JobId, Review};
use jobhub_ports::job_repository::JobDraft;
use jobhub_ports::{ClientError, CompanyClient, JobRepository, JobRepositoryError, ReviewClient};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Job posting enriched with remote company and review data
///
/// `company` is `None` when the owning company id is unknown to the
/// Company domain (dangling foreign reference, no cascading enforced).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    #[serde(flatten)]
    pub job: Job,
    pub company: Option<Company>,
    pub reviews: Vec<Review>,
}

/// Caller-mutable job fields for an update
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdate {
    pub title: String,
    pub description: String,
    pub min_salary: f64,
    pub max_salary: f64,
    pub location: String,
}

pub struct JobModule<R, C, V>
where
    R: JobRepository,
    C: CompanyClient + ?Sized,
    V: ReviewClient + ?Sized,
{
    repository: Arc<R>,
    company_client: Arc<C>,
    review_client: Arc<V>,
}

impl<R, C, V> JobModule<R, C, V>
where
    R: JobRepository,
    C: CompanyClient + ?Sized,
    V: ReviewClient + ?Sized,
{
    pub fn new(repository: Arc<R>, company_client: Arc<C>, review_client: Arc<V>) -> Self {
        Self {
            repository,
            company_client,
            review_client,
        }
    }

    pub async fn create_job(&self, draft: JobDraft) -> Result<Job, JobServiceError> {
        let job = self.repository.create_job(draft).await?;
        info!(job_id = %job.id, company_id = %job.company_id, "created job");
        Ok(job)
    }

    /// List all jobs, each enriched with remote data
    pub async fn list_jobs(&self) -> Result<Vec<JobDetails>, JobServiceError> {
        let jobs = self.repository.list_jobs().await?;

        let mut details = Vec::with_capacity(jobs.len());
        for job in jobs {
            details.push(self.enrich(job).await?);
        }
        Ok(details)
    }

    /// Get one job, enriched; `None` when the id is absent
    pub async fn get_job(&self, id: JobId) -> Result<Option<JobDetails>, JobServiceError> {
        match self.repository.get_job(id).await? {
            Some(job) => Ok(Some(self.enrich(job).await?)),
            None => Ok(None),
        }
    }

    pub async fn update_job(&self, id: JobId, update: JobUpdate) -> Result<(), JobServiceError> {
        let mut job = self
            .repository
            .get_job(id)
            .await?
            .ok_or(JobServiceError::NotFound(id))?;

        job.apply_update(
            update.title,
            update.description,
            update.min_salary,
            update.max_salary,
            update.location,
        );
        self.repository.save_job(&job).await?;
        Ok(())
    }

    /// Delete a job; `false` when the id was absent
    pub async fn delete_job(&self, id: JobId) -> Result<bool, JobServiceError> {
        Ok(self.repository.delete_job(id).await?)
    }

    async fn enrich(&self, job: Job) -> Result<JobDetails, JobServiceError> {
        let company = self.company_client.get_company(job.company_id).await?;
        let reviews = self.review_client.get_reviews(job.company_id).await?;

        Ok(JobDetails {
            job,
            company,
            reviews,
        })
    }
}

impl<R, C, V> Clone for JobModule<R, C, V>
where
    R: JobRepository,
    C: CompanyClient + ?Sized,
    V: ReviewClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            company_client: self.company_client.clone(),
            review_client: self.review_client.clone(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum JobServiceError {
    #[error("job not found: {0}")]
    NotFound(JobId),

    #[error("job repository error: {0}")]
    Repository(#[from] JobRepositoryError),

    #[error("remote enrichment failed: {0}")]
    Enrichment(#[from] ClientError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobhub_adapters::{
        InMemoryCompanyRepository, InMemoryJobRepository, InMemoryReviewRepository,
        LocalCompanyClient, LocalReviewClient,
    };
    use jobhub_core::CompanyId;
    use jobhub_ports::{CompanyRepository, ReviewRepository};

    struct Fixture {
        module: JobModule<
            InMemoryJobRepository,
            LocalCompanyClient<InMemoryCompanyRepository>,
            LocalReviewClient<InMemoryReviewRepository>,
        >,
        companies: Arc<InMemoryCompanyRepository>,
        reviews: Arc<InMemoryReviewRepository>,
    }

    fn fixture() -> Fixture {
        let companies = Arc::new(InMemoryCompanyRepository::new());
        let reviews = Arc::new(InMemoryReviewRepository::new());
        let module = JobModule::new(
            Arc::new(InMemoryJobRepository::new()),
            Arc::new(LocalCompanyClient::new(companies.clone())),
            Arc::new(LocalReviewClient::new(reviews.clone())),
        );
        Fixture {
            module,
            companies,
            reviews,
        }
    }

    fn draft(company_id: CompanyId) -> JobDraft {
        JobDraft {
            title: "Backend Engineer".to_string(),
            description: "Builds services".to_string(),
            min_salary: 60_000.0,
            max_salary: 90_000.0,
            location: "Madrid".to_string(),
            company_id,
        }
    }

    #[tokio::test]
    async fn test_get_job_enriches_with_company_and_reviews() {
        let f = fixture();
        let company = f
            .companies
            .create_company("Acme".to_string(), "Anvils".to_string())
            .await
            .unwrap();
        f.reviews
            .create_review(company.id, 4.0, "Good".to_string())
            .await
            .unwrap();
        f.reviews
            .create_review(company.id, 2.0, "Bad".to_string())
            .await
            .unwrap();

        let job = f.module.create_job(draft(company.id)).await.unwrap();
        let details = f.module.get_job(job.id).await.unwrap().unwrap();

        assert_eq!(details.company.as_ref().unwrap().name, "Acme");
        assert_eq!(details.reviews.len(), 2);
    }

    #[tokio::test]
    async fn test_get_job_with_dangling_company_reference() {
        let f = fixture();
        let job = f.module.create_job(draft(CompanyId(404))).await.unwrap();

        let details = f.module.get_job(job.id).await.unwrap().unwrap();
        assert!(details.company.is_none());
        assert!(details.reviews.is_empty());
    }

    #[tokio::test]
    async fn test_get_job_absent_is_none() {
        let f = fixture();
        assert!(f.module.get_job(JobId(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_job_missing_id_leaves_store_unchanged() {
        let f = fixture();
        let result = f
            .module
            .update_job(
                JobId(5),
                JobUpdate {
                    title: "Ghost".to_string(),
                    description: String::new(),
                    min_salary: 0.0,
                    max_salary: 0.0,
                    location: String::new(),
                },
            )
            .await;

        assert!(matches!(result, Err(JobServiceError::NotFound(_))));
        assert!(f.module.list_jobs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_job_reports_boolean_result() {
        let f = fixture();
        let job = f.module.create_job(draft(CompanyId(1))).await.unwrap();

        assert!(f.module.delete_job(job.id).await.unwrap());
        assert!(!f.module.delete_job(job.id).await.unwrap());
    }
}
