//! Remote Domain Client Ports
//!
//! Capability-typed interfaces for the synchronous cross-domain calls:
//! the Job domain enriches postings with company and review data, and the
//! Company domain fetches the authoritative average rating from the
//! Review domain. Implemented by HTTP adapters in a distributed
//! deployment and by in-process adapters in the monolithic one.

use async_trait::async_trait;
use jobhub_core::{Company, CompanyId, Review};

/// Client port for the Company domain
#[async_trait]
pub trait CompanyClient: Send + Sync {
    /// Fetch a company snapshot; `None` if the id is unknown remotely
    async fn get_company(&self, id: CompanyId) -> Result<Option<Company>, ClientError>;
}

/// Client port for the Review domain
#[async_trait]
pub trait ReviewClient: Send + Sync {
    /// Fetch all reviews for a company
    async fn get_reviews(&self, company_id: CompanyId) -> Result<Vec<Review>, ClientError>;

    /// Fetch the current average rating for a company (0.0 when no reviews exist)
    async fn average_rating(&self, company_id: CompanyId) -> Result<f64, ClientError>;
}

/// Remote client error
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("remote service unavailable: {0}")]
    Unavailable(String),

    #[error("unexpected remote response: {0}")]
    UnexpectedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_ports_are_object_safe() {
        let _company: Option<Box<dyn CompanyClient>> = None;
        let _review: Option<Box<dyn ReviewClient>> = None;
    }

    #[test]
    fn test_client_error_display() {
        let err = ClientError::Unavailable("connection refused".to_string());
        assert!(err.to_string().contains("remote service unavailable"));
    }
}
