//! Job REST API Module
//!
//! CRUD surface for job postings. Reads answer with enriched records:
//! the owning company's snapshot and its review list, fetched from the
//! other domains per job.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{delete, get, post, put};
use axum::Router;
use jobhub_core::{CompanyId, Job, JobId};
use jobhub_modules::{JobDetails, JobUpdate};
use jobhub_ports::job_repository::JobDraft;
use serde::Deserialize;

use crate::bootstrap::AppState;
use crate::error::ApiError;

/// Request to create a new job posting
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    pub min_salary: f64,
    pub max_salary: f64,
    pub location: String,
    pub company_id: i64,
}

/// Get all jobs, enriched
pub async fn list_jobs_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobDetails>>, ApiError> {
    Ok(Json(state.jobs.list_jobs().await?))
}

/// Get a specific job, enriched
pub async fn get_job_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<JobDetails>, ApiError> {
    match state.jobs.get_job(JobId(id)).await? {
        Some(details) => Ok(Json(details)),
        None => Err(ApiError::NotFound(format!("job not found: {id}"))),
    }
}

/// Create a new job posting
pub async fn create_job_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.min_salary > payload.max_salary {
        return Err(ApiError::Validation(
            "minSalary cannot be greater than maxSalary".to_string(),
        ));
    }

    let job: Job = state
        .jobs
        .create_job(JobDraft {
            title: payload.title,
            description: payload.description,
            min_salary: payload.min_salary,
            max_salary: payload.max_salary,
            location: payload.location,
            company_id: CompanyId(payload.company_id),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// Update a job (full overwrite of the mutable fields)
pub async fn update_job_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<JobUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.min_salary > payload.max_salary {
        return Err(ApiError::Validation(
            "minSalary cannot be greater than maxSalary".to_string(),
        ));
    }

    state.jobs.update_job(JobId(id), payload).await?;
    Ok((StatusCode::OK, "Job updated successfully"))
}

/// Delete a job
pub async fn delete_job_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if state.jobs.delete_job(JobId(id)).await? {
        Ok((StatusCode::OK, "Job deleted successfully"))
    } else {
        Err(ApiError::NotFound(format!("job not found: {id}")))
    }
}

/// Create the job router
pub fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/api/jobs", get(list_jobs_handler))
        .route("/api/jobs", post(create_job_handler))
        .route("/api/jobs/{id}", get(get_job_handler))
        .route("/api/jobs/{id}", put(update_job_handler))
        .route("/api/jobs/{id}", delete(delete_job_handler))
}
