//! Review Module
//!
//! CRUD over the review store, the read-time average computation, and the
//! publication of the rating update event after a successful creation.

use jobhub_core::{review, CompanyId, Review, ReviewId};
use jobhub_ports::{EventPublisher, ReviewRepository, ReviewRepositoryError, SystemEvent};
use std::sync::Arc;
use tracing::{info, warn};

pub struct ReviewModule<R, E>
where
    R: ReviewRepository,
    E: EventPublisher,
{
    repository: Arc<R>,
    event_bus: Arc<E>,
}

impl<R, E> ReviewModule<R, E>
where
    R: ReviewRepository,
    E: EventPublisher,
{
    pub fn new(repository: Arc<R>, event_bus: Arc<E>) -> Self {
        Self {
            repository,
            event_bus,
        }
    }

    pub async fn list_reviews(
        &self,
        company_id: CompanyId,
    ) -> Result<Vec<Review>, ReviewServiceError> {
        Ok(self.repository.list_reviews(company_id).await?)
    }

    pub async fn get_review(
        &self,
        id: ReviewId,
    ) -> Result<Option<Review>, ReviewServiceError> {
        Ok(self.repository.get_review(id).await?)
    }

    /// Store a review and publish the rating update event
    ///
    /// The event is published only after the review is persisted. A
    /// publish failure does not undo the write; the company's cached
    /// rating stays stale until the next event for it.
    pub async fn add_review(
        &self,
        company_id: CompanyId,
        rating: f64,
        content: String,
    ) -> Result<Review, ReviewServiceError> {
        let saved = self
            .repository
            .create_review(company_id, rating, content)
            .await?;
        info!(review_id = %saved.id, %company_id, "created review");

        if let Err(e) = self
            .event_bus
            .publish(SystemEvent::ReviewCreated { company_id })
            .await
        {
            warn!(%company_id, error = %e, "failed to publish rating update event");
        }

        Ok(saved)
    }

    pub async fn update_review(
        &self,
        id: ReviewId,
        rating: f64,
        content: String,
    ) -> Result<(), ReviewServiceError> {
        let mut stored = self
            .repository
            .get_review(id)
            .await?
            .ok_or(ReviewServiceError::NotFound(id))?;

        stored.apply_update(rating, content);
        self.repository.save_review(&stored).await?;
        Ok(())
    }

    /// Delete a review; `false` when the id was absent
    pub async fn delete_review(&self, id: ReviewId) -> Result<bool, ReviewServiceError> {
        Ok(self.repository.delete_review(id).await?)
    }

    /// Arithmetic mean of the stored ratings for a company, 0.0 when none
    /// exist. Stateless read-time aggregation, no caching.
    pub async fn average_rating(&self, company_id: CompanyId) -> Result<f64, ReviewServiceError> {
        let reviews = self.repository.list_reviews(company_id).await?;
        Ok(review::average_rating(&reviews))
    }
}

impl<R, E> Clone for ReviewModule<R, E>
where
    R: ReviewRepository,
    E: EventPublisher,
{
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            event_bus: self.event_bus.clone(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ReviewServiceError {
    #[error("review not found: {0}")]
    NotFound(ReviewId),

    #[error("review repository error: {0}")]
    Repository(#[from] ReviewRepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobhub_adapters::{InMemoryBus, InMemoryReviewRepository};
    use jobhub_ports::EventSubscriber;

    fn module() -> (
        ReviewModule<InMemoryReviewRepository, InMemoryBus>,
        Arc<InMemoryBus>,
    ) {
        let bus = Arc::new(InMemoryBus::new(100));
        let module = ReviewModule::new(Arc::new(InMemoryReviewRepository::new()), bus.clone());
        (module, bus)
    }

    #[tokio::test]
    async fn test_add_review_publishes_rating_event() {
        let (module, bus) = module();
        let mut receiver = bus.subscribe().await.unwrap();

        module
            .add_review(CompanyId(1), 4.0, "Solid place".to_string())
            .await
            .unwrap();

        let event = receiver.recv().await.unwrap();
        assert_eq!(
            event,
            SystemEvent::ReviewCreated {
                company_id: CompanyId(1)
            }
        );
    }

    #[tokio::test]
    async fn test_add_review_survives_publish_failure() {
        // No subscriber: publish fails, the review must still be stored
        let (module, _bus) = module();

        let saved = module
            .add_review(CompanyId(1), 4.0, "Solid place".to_string())
            .await
            .unwrap();

        let stored = module.get_review(saved.id).await.unwrap();
        assert!(stored.is_some());
    }

    #[tokio::test]
    async fn test_average_rating_no_reviews_is_zero() {
        let (module, _bus) = module();
        assert_eq!(module.average_rating(CompanyId(1)).await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_average_rating_is_mean_of_stored_ratings() {
        let (module, bus) = module();
        let _receiver = bus.subscribe().await.unwrap();

        module
            .add_review(CompanyId(1), 4.0, "Good".to_string())
            .await
            .unwrap();
        module
            .add_review(CompanyId(1), 2.0, "Bad".to_string())
            .await
            .unwrap();
        module
            .add_review(CompanyId(2), 5.0, "Other company".to_string())
            .await
            .unwrap();

        let average = module.average_rating(CompanyId(1)).await.unwrap();
        assert!((average - 3.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_update_review_missing_id_reports_not_found() {
        let (module, _bus) = module();
        let result = module
            .update_review(ReviewId(9), 1.0, "Ghost".to_string())
            .await;
        assert!(matches!(result, Err(ReviewServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_review_twice_reports_absence() {
        let (module, bus) = module();
        let _receiver = bus.subscribe().await.unwrap();

        let saved = module
            .add_review(CompanyId(1), 3.0, "Fine".to_string())
            .await
            .unwrap();

        assert!(module.delete_review(saved.id).await.unwrap());
        assert!(!module.delete_review(saved.id).await.unwrap());
    }
}
