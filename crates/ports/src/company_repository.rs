//! Company Repository Port
//!
//! Defines the interface for company persistence.

use async_trait::async_trait;
use jobhub_core::{Company, CompanyId};

/// Company repository port
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Insert a new company, allocating its id
    async fn create_company(
        &self,
        name: String,
        description: String,
    ) -> Result<Company, CompanyRepositoryError>;

    /// Get a company by id
    async fn get_company(&self, id: CompanyId)
        -> Result<Option<Company>, CompanyRepositoryError>;

    /// Get all companies
    async fn list_companies(&self) -> Result<Vec<Company>, CompanyRepositoryError>;

    /// Persist an updated company record
    async fn save_company(&self, company: &Company) -> Result<(), CompanyRepositoryError>;
}

/// Company repository error
#[derive(thiserror::Error, Debug)]
pub enum CompanyRepositoryError {
    #[error("company not found: {0}")]
    NotFound(CompanyId),

    #[error("storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_company_repository_trait_is_object_safe() {
        let _repo: Option<Box<dyn CompanyRepository>> = None;
    }

    #[test]
    fn test_company_repository_error_display() {
        let not_found = CompanyRepositoryError::NotFound(CompanyId(5));
        let storage = CompanyRepositoryError::Storage("disk full".to_string());

        assert!(not_found.to_string().contains("company not found: 5"));
        assert!(storage.to_string().contains("storage error"));
    }
}
