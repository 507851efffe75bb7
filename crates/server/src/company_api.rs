//! Company REST API Module
//!
//! CRUD surface for companies, including the idempotent soft delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{delete, get, post, put};
use axum::Router;
use jobhub_core::{Company, CompanyId};
use serde::Deserialize;

use crate::bootstrap::AppState;
use crate::error::ApiError;

/// Request to create a new company
#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    pub name: String,
    pub description: String,
}

/// Request to update a company's caller-mutable fields
#[derive(Debug, Deserialize)]
pub struct UpdateCompanyRequest {
    pub name: String,
    pub description: String,
}

/// Get all companies
pub async fn list_companies_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Company>>, ApiError> {
    Ok(Json(state.companies.list_companies().await?))
}

/// Get a specific company
pub async fn get_company_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Company>, ApiError> {
    match state.companies.get_company(CompanyId(id)).await? {
        Some(company) => Ok(Json(company)),
        None => Err(ApiError::NotFound(format!("company not found: {id}"))),
    }
}

/// Create a new company
pub async fn create_company_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateCompanyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let company = state
        .companies
        .create_company(payload.name, payload.description)
        .await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// Update a company (full overwrite of the mutable fields)
pub async fn update_company_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCompanyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .companies
        .update_company(CompanyId(id), payload.name, payload.description)
        .await?;
    Ok((StatusCode::OK, "Company updated successfully"))
}

/// Soft-delete a company
///
/// The second delete of the same company changes nothing and says so.
pub async fn delete_company_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let changed = state.companies.delete_company(CompanyId(id)).await?;
    if changed {
        Ok((StatusCode::OK, "Company deleted successfully"))
    } else {
        Ok((StatusCode::OK, "Company already deleted"))
    }
}

/// Create the company router
pub fn company_routes() -> Router<AppState> {
    Router::new()
        .route("/api/companies", get(list_companies_handler))
        .route("/api/companies", post(create_company_handler))
        .route("/api/companies/{id}", get(get_company_handler))
        .route("/api/companies/{id}", put(update_company_handler))
        .route("/api/companies/{id}", delete(delete_company_handler))
}
