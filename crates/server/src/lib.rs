//! Jobhub Server - REST surface for the Company, Job and Review domains

pub mod bootstrap;
pub mod company_api;
pub mod error;
pub mod job_api;
pub mod review_api;

pub use crate::bootstrap::{api_router, build_state, AppState, BootstrapError};
pub use crate::error::ApiError;
