//! Application wiring
//!
//! Builds the dependency graph for the deployment described by the
//! configuration: in-memory stores, the in-process rating channel, the
//! cross-domain clients (in-process or HTTP, per `clients.mode`), the
//! three service modules and the rating update listener, then assembles
//! the REST router.

use axum::response::Json;
use axum::routing::get;
use axum::Router;
use jobhub_adapters::{
    AppConfig, ClientMode, HttpCompanyClient, HttpReviewClient, InMemoryBus,
    InMemoryCompanyRepository, InMemoryJobRepository, InMemoryReviewRepository,
    LocalCompanyClient, LocalReviewClient,
};
use jobhub_modules::{
    CompanyModule, JobModule, ListenerConfig, RatingUpdateListener, ReviewModule,
};
use jobhub_ports::{ClientError, CompanyClient, EventBusError, ReviewClient};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{company_api, job_api, review_api};

pub type CompanyService = CompanyModule<InMemoryCompanyRepository, dyn ReviewClient>;
pub type ReviewService = ReviewModule<InMemoryReviewRepository, InMemoryBus>;
pub type JobService =
    JobModule<InMemoryJobRepository, dyn CompanyClient, dyn ReviewClient>;

/// Shared application state for the REST handlers
#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<CompanyService>,
    pub reviews: Arc<ReviewService>,
    pub jobs: Arc<JobService>,
}

/// Wiring error
#[derive(thiserror::Error, Debug)]
pub enum BootstrapError {
    #[error("failed to build remote clients: {0}")]
    Client(#[from] ClientError),

    #[error("failed to start rating update listener: {0}")]
    Listener(#[from] EventBusError),
}

/// Build the application state and subscribe the rating update listener
///
/// The listener is subscribed before the state (and thus any REST
/// surface) is handed out, so no review creation can publish into a
/// channel without a consumer.
pub async fn build_state(
    config: &AppConfig,
) -> Result<(AppState, JoinHandle<()>), BootstrapError> {
    let company_repo = Arc::new(InMemoryCompanyRepository::new());
    let job_repo = Arc::new(InMemoryJobRepository::new());
    let review_repo = Arc::new(InMemoryReviewRepository::new());
    let event_bus = Arc::new(InMemoryBus::new(config.event_bus.capacity));

    let (company_client, review_client): (Arc<dyn CompanyClient>, Arc<dyn ReviewClient>) =
        match config.clients.mode {
            ClientMode::Local => (
                Arc::new(LocalCompanyClient::new(company_repo.clone())),
                Arc::new(LocalReviewClient::new(review_repo.clone())),
            ),
            ClientMode::Http => (
                Arc::new(HttpCompanyClient::new(
                    config.clients.company_base_url.clone(),
                    config.clients.timeout(),
                )?),
                Arc::new(HttpReviewClient::new(
                    config.clients.review_base_url.clone(),
                    config.clients.timeout(),
                )?),
            ),
        };
    info!(mode = ?config.clients.mode, "wired cross-domain clients");

    let companies = Arc::new(CompanyModule::new(company_repo, review_client.clone()));
    let reviews = Arc::new(ReviewModule::new(review_repo, event_bus.clone()));
    let jobs = Arc::new(JobModule::new(job_repo, company_client, review_client));

    let listener = RatingUpdateListener::new(
        companies.as_ref().clone(),
        event_bus,
        ListenerConfig {
            on_failure: config.event_bus.on_failure,
        },
    );
    let listener_handle = listener.start().await?;

    let state = AppState {
        companies,
        reviews,
        jobs,
    };
    Ok((state, listener_handle))
}

/// Assemble the full REST router
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(company_api::company_routes())
        .merge(review_api::review_routes())
        .merge(job_api::job_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "jobhub-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobhub_core::CompanyId;

    #[tokio::test]
    async fn test_build_state_local_mode_serves_in_process_clients() {
        let (state, handle) = build_state(&AppConfig::default()).await.unwrap();

        let company = state
            .companies
            .create_company("Acme".to_string(), "Anvils".to_string())
            .await
            .unwrap();
        assert_eq!(company.id, CompanyId(1));
        assert!(!handle.is_finished());
    }

    #[tokio::test]
    async fn test_build_state_http_mode_constructs_clients_from_config() {
        let mut config = AppConfig::default();
        config.clients.mode = ClientMode::Http;
        config.clients.company_base_url = "http://companies:8080".to_string();
        config.clients.review_base_url = "http://reviews:8080".to_string();

        // Client construction must not require the remotes to be up
        let (state, handle) = build_state(&config).await.unwrap();
        assert!(!handle.is_finished());

        // The stores behind the REST surface remain local
        let company = state
            .companies
            .create_company("Acme".to_string(), "Anvils".to_string())
            .await
            .unwrap();
        assert_eq!(company.id, CompanyId(1));
    }
}
