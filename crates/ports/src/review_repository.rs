//! Review Repository Port
//!
//! Defines the interface for review persistence.

use async_trait::async_trait;
use jobhub_core::{CompanyId, Review, ReviewId};

/// Review repository port
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Insert a new review, allocating its id
    async fn create_review(
        &self,
        company_id: CompanyId,
        rating: f64,
        content: String,
    ) -> Result<Review, ReviewRepositoryError>;

    /// Get a review by id
    async fn get_review(&self, id: ReviewId) -> Result<Option<Review>, ReviewRepositoryError>;

    /// Get all reviews for a company
    async fn list_reviews(&self, company_id: CompanyId)
        -> Result<Vec<Review>, ReviewRepositoryError>;

    /// Persist an updated review record
    async fn save_review(&self, review: &Review) -> Result<(), ReviewRepositoryError>;

    /// Delete a review; returns `false` if the id was absent
    async fn delete_review(&self, id: ReviewId) -> Result<bool, ReviewRepositoryError>;
}

/// Review repository error
#[derive(thiserror::Error, Debug)]
pub enum ReviewRepositoryError {
    #[error("review not found: {0}")]
    NotFound(ReviewId),

    #[error("storage error: {0}")]
    Storage(String),
}
