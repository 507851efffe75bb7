//! In-Memory Repository Implementations
//!
//! One store per entity, backed by `Arc<RwLock<HashMap>>` with an atomic
//! id sequence standing in for the relational identity column.

use async_trait::async_trait;
use jobhub_core::{Company, CompanyId, Job, JobId, Review, ReviewId};
use jobhub_ports::{
    CompanyRepository, CompanyRepositoryError, JobRepository, JobRepositoryError,
    ReviewRepository, ReviewRepositoryError,
};
use jobhub_ports::job_repository::JobDraft;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// In-memory company repository
pub struct InMemoryCompanyRepository {
    companies: Arc<RwLock<HashMap<CompanyId, Company>>>,
    sequence: AtomicI64,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self {
            companies: Arc::new(RwLock::new(HashMap::new())),
            sequence: AtomicI64::new(1),
        }
    }

    fn next_id(&self) -> CompanyId {
        CompanyId(self.sequence.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for InMemoryCompanyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn create_company(
        &self,
        name: String,
        description: String,
    ) -> Result<Company, CompanyRepositoryError> {
        let company = Company::new(self.next_id(), name, description);
        let mut companies = self.companies.write().await;
        companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn get_company(
        &self,
        id: CompanyId,
    ) -> Result<Option<Company>, CompanyRepositoryError> {
        let companies = self.companies.read().await;
        Ok(companies.get(&id).cloned())
    }

    async fn list_companies(&self) -> Result<Vec<Company>, CompanyRepositoryError> {
        let companies = self.companies.read().await;
        let mut all: Vec<Company> = companies.values().cloned().collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }

    async fn save_company(&self, company: &Company) -> Result<(), CompanyRepositoryError> {
        let mut companies = self.companies.write().await;
        if !companies.contains_key(&company.id) {
            return Err(CompanyRepositoryError::NotFound(company.id));
        }
        companies.insert(company.id, company.clone());
        Ok(())
    }
}

/// In-memory job repository
pub struct InMemoryJobRepository {
    jobs: Arc<RwLock<HashMap<JobId, Job>>>,
    sequence: AtomicI64,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self {
            jobs: Arc::new(RwLock::new(HashMap::new())),
            sequence: AtomicI64::new(1),
        }
    }

    fn next_id(&self) -> JobId {
        JobId(self.sequence.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for InMemoryJobRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn create_job(&self, draft: JobDraft) -> Result<Job, JobRepositoryError> {
        let job = Job::new(
            self.next_id(),
            draft.title,
            draft.description,
            draft.min_salary,
            draft.max_salary,
            draft.location,
            draft.company_id,
        );
        let mut jobs = self.jobs.write().await;
        jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn get_job(&self, id: JobId) -> Result<Option<Job>, JobRepositoryError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.get(&id).cloned())
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, JobRepositoryError> {
        let jobs = self.jobs.read().await;
        let mut all: Vec<Job> = jobs.values().cloned().collect();
        all.sort_by_key(|j| j.id);
        Ok(all)
    }

    async fn save_job(&self, job: &Job) -> Result<(), JobRepositoryError> {
        let mut jobs = self.jobs.write().await;
        if !jobs.contains_key(&job.id) {
            return Err(JobRepositoryError::NotFound(job.id));
        }
        jobs.insert(job.id, job.clone());
        Ok(())
    }

    async fn delete_job(&self, id: JobId) -> Result<bool, JobRepositoryError> {
        let mut jobs = self.jobs.write().await;
        Ok(jobs.remove(&id).is_some())
    }
}

/// In-memory review repository
pub struct InMemoryReviewRepository {
    reviews: Arc<RwLock<HashMap<ReviewId, Review>>>,
    sequence: AtomicI64,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self {
            reviews: Arc::new(RwLock::new(HashMap::new())),
            sequence: AtomicI64::new(1),
        }
    }

    fn next_id(&self) -> ReviewId {
        ReviewId(self.sequence.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for InMemoryReviewRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn create_review(
        &self,
        company_id: CompanyId,
        rating: f64,
        content: String,
    ) -> Result<Review, ReviewRepositoryError> {
        let review = Review::new(self.next_id(), company_id, rating, content);
        let mut reviews = self.reviews.write().await;
        reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn get_review(&self, id: ReviewId) -> Result<Option<Review>, ReviewRepositoryError> {
        let reviews = self.reviews.read().await;
        Ok(reviews.get(&id).cloned())
    }

    async fn list_reviews(
        &self,
        company_id: CompanyId,
    ) -> Result<Vec<Review>, ReviewRepositoryError> {
        let reviews = self.reviews.read().await;
        let mut matching: Vec<Review> = reviews
            .values()
            .filter(|r| r.company_id == company_id)
            .cloned()
            .collect();
        matching.sort_by_key(|r| r.id);
        Ok(matching)
    }

    async fn save_review(&self, review: &Review) -> Result<(), ReviewRepositoryError> {
        let mut reviews = self.reviews.write().await;
        if !reviews.contains_key(&review.id) {
            return Err(ReviewRepositoryError::NotFound(review.id));
        }
        reviews.insert(review.id, review.clone());
        Ok(())
    }

    async fn delete_review(&self, id: ReviewId) -> Result<bool, ReviewRepositoryError> {
        let mut reviews = self.reviews.write().await;
        Ok(reviews.remove(&id).is_some())
    }
}
