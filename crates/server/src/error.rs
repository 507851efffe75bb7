//! REST error handling
//!
//! Normalizes the per-module error enums into one structured API error
//! with a consistent three-way surface: not-found, bad request, remote
//! failure. Each variant logs at an appropriate level before mapping to
//! an HTTP status with a text body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jobhub_modules::{CompanyServiceError, JobServiceError, ReviewServiceError};
use tracing::{error, warn};

/// Structured error type for REST operations
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("remote service unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::RemoteUnavailable(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::NotFound(msg) => warn!(details = %msg, "resource not found"),
            ApiError::Validation(msg) => warn!(details = %msg, "invalid request"),
            ApiError::RemoteUnavailable(msg) => {
                error!(details = %msg, "remote service unavailable")
            }
            ApiError::Internal(msg) => error!(details = %msg, "internal error"),
        }
        (self.status(), self.to_string()).into_response()
    }
}

impl From<CompanyServiceError> for ApiError {
    fn from(error: CompanyServiceError) -> Self {
        match error {
            CompanyServiceError::NotFound(id) => {
                ApiError::NotFound(format!("company not found: {id}"))
            }
            CompanyServiceError::ReviewService(e) => ApiError::RemoteUnavailable(e.to_string()),
            CompanyServiceError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ReviewServiceError> for ApiError {
    fn from(error: ReviewServiceError) -> Self {
        match error {
            ReviewServiceError::NotFound(id) => {
                ApiError::NotFound(format!("review not found: {id}"))
            }
            ReviewServiceError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JobServiceError> for ApiError {
    fn from(error: JobServiceError) -> Self {
        match error {
            JobServiceError::NotFound(id) => ApiError::NotFound(format!("job not found: {id}")),
            JobServiceError::Enrichment(e) => ApiError::RemoteUnavailable(e.to_string()),
            JobServiceError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobhub_core::{CompanyId, JobId};
    use jobhub_ports::ClientError;

    #[test]
    fn test_not_found_maps_to_404() {
        let error: ApiError = CompanyServiceError::NotFound(CompanyId(3)).into();
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert!(error.to_string().contains("company not found: 3"));
    }

    #[test]
    fn test_remote_failure_maps_to_502() {
        let error: ApiError =
            JobServiceError::Enrichment(ClientError::Unavailable("refused".to_string())).into();
        assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let error = ApiError::Validation("minSalary cannot exceed maxSalary".to_string());
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_job_not_found_maps_to_404() {
        let error: ApiError = JobServiceError::NotFound(JobId(9)).into();
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }
}
