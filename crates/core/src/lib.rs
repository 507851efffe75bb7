//! Domain Core - Business Logic and Shared Types
//!
//! This crate contains the domain entities shared by the Company, Job and
//! Review services.

pub mod company;
pub mod job;
pub mod review;

pub use crate::company::{Company, CompanyId};
pub use crate::job::{Job, JobId};
pub use crate::review::{Review, ReviewId};
