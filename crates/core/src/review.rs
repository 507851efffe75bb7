//! Review Domain Entity

use crate::company::CompanyId;
use serde::{Deserialize, Serialize};

/// Review identifier (store-allocated numeric id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReviewId(pub i64);

impl ReviewId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ReviewId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review entity: a numeric rating plus free-text body for one company
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub company_id: CompanyId,
    pub rating: f64,
    pub content: String,
}

impl Review {
    pub fn new(id: ReviewId, company_id: CompanyId, rating: f64, content: String) -> Self {
        Self {
            id,
            company_id,
            rating,
            content,
        }
    }

    /// Overwrite the caller-mutable fields
    pub fn apply_update(&mut self, rating: f64, content: String) {
        self.rating = rating;
        self.content = content;
    }
}

/// Arithmetic mean of the ratings, 0.0 for an empty set
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    reviews.iter().map(|r| r.rating).sum::<f64>() / reviews.len() as f64
}
