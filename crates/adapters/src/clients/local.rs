//! In-Process Client Adapters
//!
//! Implement the remote domain ports against the in-process stores. Used
//! by the monolithic-modular deployment, where all three domains share a
//! runtime, and by module tests that need a client without a network.

use async_trait::async_trait;
use jobhub_core::{review, Company, CompanyId, Review};
use jobhub_ports::{
    ClientError, CompanyClient, CompanyRepository, ReviewClient, ReviewRepository,
};
use std::sync::Arc;

/// Company client backed directly by a company repository
pub struct LocalCompanyClient<R: CompanyRepository> {
    repository: Arc<R>,
}

impl<R: CompanyRepository> LocalCompanyClient<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: CompanyRepository> CompanyClient for LocalCompanyClient<R> {
    async fn get_company(&self, id: CompanyId) -> Result<Option<Company>, ClientError> {
        self.repository
            .get_company(id)
            .await
            .map_err(|e| ClientError::Unavailable(e.to_string()))
    }
}

/// Review client backed directly by a review repository
pub struct LocalReviewClient<R: ReviewRepository> {
    repository: Arc<R>,
}

impl<R: ReviewRepository> LocalReviewClient<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ReviewRepository> ReviewClient for LocalReviewClient<R> {
    async fn get_reviews(&self, company_id: CompanyId) -> Result<Vec<Review>, ClientError> {
        self.repository
            .list_reviews(company_id)
            .await
            .map_err(|e| ClientError::Unavailable(e.to_string()))
    }

    async fn average_rating(&self, company_id: CompanyId) -> Result<f64, ClientError> {
        let reviews = self.get_reviews(company_id).await?;
        Ok(review::average_rating(&reviews))
    }
}
