//! Company Domain Entity
//!
//! A company carries a cached average rating that is recomputed from the
//! Review domain whenever a rating update event arrives, and a soft-delete
//! tombstone instead of physical removal.

use serde::{Deserialize, Serialize};

/// Company identifier (store-allocated numeric id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompanyId(pub i64);

impl CompanyId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for CompanyId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Company entity
///
/// `rating` is `None` until the first rating update event has been
/// processed for this company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub description: String,
    pub rating: Option<f64>,
    pub deleted: bool,
}

impl Company {
    pub fn new(id: CompanyId, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
            rating: None,
            deleted: false,
        }
    }

    /// Overwrite the caller-mutable fields (name and description)
    pub fn apply_update(&mut self, name: String, description: String) {
        self.name = name;
        self.description = description;
    }

    /// Mark the company as deleted
    ///
    /// Returns `false` if the company was already deleted (idempotent
    /// tombstone: the second call reports no state change).
    pub fn mark_deleted(&mut self) -> bool {
        if self.deleted {
            return false;
        }
        self.deleted = true;
        true
    }

    /// Replace the cached average rating with an authoritative value
    pub fn set_rating(&mut self, rating: f64) {
        self.rating = Some(rating);
    }
}
