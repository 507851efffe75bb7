//! Job Domain Entity
//!
//! A job posting owned by a company. The salary range is caller-provided
//! and not enforced by the domain; the owning company id is a plain
//! foreign reference with no cascading.

use crate::company::CompanyId;
use serde::{Deserialize, Serialize};

/// Job identifier (store-allocated numeric id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub i64);

impl JobId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for JobId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Job posting entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub min_salary: f64,
    pub max_salary: f64,
    pub location: String,
    pub company_id: CompanyId,
}

impl Job {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: JobId,
        title: String,
        description: String,
        min_salary: f64,
        max_salary: f64,
        location: String,
        company_id: CompanyId,
    ) -> Self {
        Self {
            id,
            title,
            description,
            min_salary,
            max_salary,
            location,
            company_id,
        }
    }

    /// Overwrite the caller-mutable fields; the owning company never changes
    pub fn apply_update(
        &mut self,
        title: String,
        description: String,
        min_salary: f64,
        max_salary: f64,
        location: String,
    ) {
        self.title = title;
        self.description = description;
        self.min_salary = min_salary;
        self.max_salary = max_salary;
        self.location = location;
    }
}
