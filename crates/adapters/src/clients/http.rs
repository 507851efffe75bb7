//! HTTP Client Adapters
//!
//! REST implementations of the remote domain ports, used when the
//! Company, Job and Review services run as separate processes. Each
//! client carries its own base URL and a bounded request timeout.

use async_trait::async_trait;
use jobhub_core::{Company, CompanyId, Review};
use jobhub_ports::{ClientError, CompanyClient, ReviewClient};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

fn build_client(timeout: Duration) -> Result<reqwest::Client, ClientError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ClientError::Unavailable(format!("failed to build HTTP client: {e}")))
}

/// HTTP client for the Company domain
pub struct HttpCompanyClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCompanyClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CompanyClient for HttpCompanyClient {
    async fn get_company(&self, id: CompanyId) -> Result<Option<Company>, ClientError> {
        let url = format!("{}/api/companies/{}", self.base_url, id);
        debug!(%url, "fetching company snapshot");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Unavailable(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ClientError::UnexpectedResponse(format!(
                "GET {url} returned {}",
                response.status()
            )));
        }

        let company = response
            .json::<Company>()
            .await
            .map_err(|e| ClientError::UnexpectedResponse(e.to_string()))?;
        Ok(Some(company))
    }
}

/// HTTP client for the Review domain
pub struct HttpReviewClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpReviewClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        company_id: CompanyId,
    ) -> Result<T, ClientError> {
        let response = self
            .client
            .get(url)
            .query(&[("companyId", company_id.as_i64())])
            .send()
            .await
            .map_err(|e| ClientError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::UnexpectedResponse(format!(
                "GET {url} returned {}",
                response.status()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::UnexpectedResponse(e.to_string()))
    }
}

#[async_trait]
impl ReviewClient for HttpReviewClient {
    async fn get_reviews(&self, company_id: CompanyId) -> Result<Vec<Review>, ClientError> {
        let url = format!("{}/api/reviews", self.base_url);
        debug!(%url, %company_id, "fetching reviews");
        self.get_json(&url, company_id).await
    }

    async fn average_rating(&self, company_id: CompanyId) -> Result<f64, ClientError> {
        // Internal variant of the average-rating endpoint
        let url = format!("{}/api/reviews/averageRating", self.base_url);
        debug!(%url, %company_id, "fetching average rating");
        self.get_json(&url, company_id).await
    }
}
