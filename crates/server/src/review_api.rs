//! Review REST API Module
//!
//! CRUD surface for reviews plus the average-rating computation. A
//! successful creation publishes the rating update event for the owning
//! company. The average endpoint is registered under both historical
//! spellings; `averageRating` is the variant the Company domain's client
//! consumes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{delete, get, post, put};
use axum::Router;
use jobhub_core::{CompanyId, Review, ReviewId};
use serde::Deserialize;

use crate::bootstrap::AppState;
use crate::error::ApiError;

/// `?companyId=` query parameter
#[derive(Debug, Deserialize)]
pub struct CompanyIdQuery {
    #[serde(rename = "companyId")]
    pub company_id: i64,
}

/// Review payload for create and update
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub rating: f64,
    pub content: String,
}

/// Get all reviews for a company
pub async fn list_reviews_handler(
    State(state): State<AppState>,
    Query(query): Query<CompanyIdQuery>,
) -> Result<Json<Vec<Review>>, ApiError> {
    Ok(Json(
        state.reviews.list_reviews(CompanyId(query.company_id)).await?,
    ))
}

/// Create a review for a company
pub async fn add_review_handler(
    State(state): State<AppState>,
    Query(query): Query<CompanyIdQuery>,
    Json(payload): Json<ReviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let review = state
        .reviews
        .add_review(CompanyId(query.company_id), payload.rating, payload.content)
        .await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// Get a specific review
pub async fn get_review_handler(
    State(state): State<AppState>,
    Path(review_id): Path<i64>,
) -> Result<Json<Review>, ApiError> {
    match state.reviews.get_review(ReviewId(review_id)).await? {
        Some(review) => Ok(Json(review)),
        None => Err(ApiError::NotFound(format!(
            "review not found: {review_id}"
        ))),
    }
}

/// Update a review (full overwrite of the mutable fields)
pub async fn update_review_handler(
    State(state): State<AppState>,
    Path(review_id): Path<i64>,
    Json(payload): Json<ReviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .reviews
        .update_review(ReviewId(review_id), payload.rating, payload.content)
        .await?;
    Ok((StatusCode::OK, "Review updated successfully"))
}

/// Delete a review
pub async fn delete_review_handler(
    State(state): State<AppState>,
    Path(review_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if state.reviews.delete_review(ReviewId(review_id)).await? {
        Ok((StatusCode::OK, "Review deleted successfully"))
    } else {
        Err(ApiError::NotFound(format!(
            "review not found: {review_id}"
        )))
    }
}

/// Compute the average rating for a company
pub async fn average_rating_handler(
    State(state): State<AppState>,
    Query(query): Query<CompanyIdQuery>,
) -> Result<Json<f64>, ApiError> {
    Ok(Json(
        state
            .reviews
            .average_rating(CompanyId(query.company_id))
            .await?,
    ))
}

/// Create the review router
pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/api/reviews", get(list_reviews_handler))
        .route("/api/reviews", post(add_review_handler))
        .route("/api/reviews/averagerating", get(average_rating_handler))
        .route("/api/reviews/averageRating", get(average_rating_handler))
        .route("/api/reviews/{reviewId}", get(get_review_handler))
        .route("/api/reviews/{reviewId}", put(update_review_handler))
        .route("/api/reviews/{reviewId}", delete(delete_review_handler))
}
