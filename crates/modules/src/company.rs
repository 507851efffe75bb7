//! Company Module
//!
//! CRUD over the company store plus the rating refresh driven by the
//! rating update listener: fetch the authoritative average from the
//! Review domain and overwrite the cached value.

use jobhub_core::{Company, CompanyId};
use jobhub_ports::{ClientError, CompanyRepository, CompanyRepositoryError, ReviewClient};
use std::sync::Arc;
use tracing::info;

pub struct CompanyModule<R, C>
where
    R: CompanyRepository,
    C: ReviewClient + ?Sized,
{
    repository: Arc<R>,
    review_client: Arc<C>,
}

impl<R, C> CompanyModule<R, C>
where
    R: CompanyRepository,
    C: ReviewClient + ?Sized,
{
    pub fn new(repository: Arc<R>, review_client: Arc<C>) -> Self {
        Self {
            repository,
            review_client,
        }
    }

    pub async fn list_companies(&self) -> Result<Vec<Company>, CompanyServiceError> {
        Ok(self.repository.list_companies().await?)
    }

    pub async fn get_company(
        &self,
        id: CompanyId,
    ) -> Result<Option<Company>, CompanyServiceError> {
        Ok(self.repository.get_company(id).await?)
    }

    pub async fn create_company(
        &self,
        name: String,
        description: String,
    ) -> Result<Company, CompanyServiceError> {
        let company = self.repository.create_company(name, description).await?;
        info!(company_id = %company.id, "created company");
        Ok(company)
    }

    /// Overwrite name and description; the rating and tombstone are not
    /// caller-mutable.
    pub async fn update_company(
        &self,
        id: CompanyId,
        name: String,
        description: String,
    ) -> Result<(), CompanyServiceError> {
        let mut company = self
            .repository
            .get_company(id)
            .await?
            .ok_or(CompanyServiceError::NotFound(id))?;

        company.apply_update(name, description);
        self.repository.save_company(&company).await?;
        Ok(())
    }

    /// Idempotent soft delete
    ///
    /// Returns `true` when this call flipped the tombstone, `false` when
    /// the company was already deleted.
    pub async fn delete_company(&self, id: CompanyId) -> Result<bool, CompanyServiceError> {
        let mut company = self
            .repository
            .get_company(id)
            .await?
            .ok_or(CompanyServiceError::NotFound(id))?;

        if !company.mark_deleted() {
            return Ok(false);
        }

        self.repository.save_company(&company).await?;
        info!(company_id = %id, "soft-deleted company");
        Ok(true)
    }

    /// Recompute the cached average rating from the Review domain
    ///
    /// A missing company is terminal for the triggering event. A failed
    /// remote fetch aborts the update and leaves the stored rating at its
    /// previous value.
    pub async fn refresh_rating(&self, id: CompanyId) -> Result<f64, CompanyServiceError> {
        let mut company = self
            .repository
            .get_company(id)
            .await?
            .ok_or(CompanyServiceError::NotFound(id))?;

        let average = self.review_client.average_rating(id).await?;
        company.set_rating(average);
        self.repository.save_company(&company).await?;

        info!(company_id = %id, rating = average, "refreshed company rating");
        Ok(average)
    }
}

impl<R, C> Clone for CompanyModule<R, C>
where
    R: CompanyRepository,
    C: ReviewClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            review_client: self.review_client.clone(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CompanyServiceError {
    #[error("company not found: {0}")]
    NotFound(CompanyId),

    #[error("company repository error: {0}")]
    Repository(#[from] CompanyRepositoryError),

    #[error("review service unavailable: {0}")]
    ReviewService(#[from] ClientError),
}
