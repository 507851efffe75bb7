//! Application Modules
//!
//! Service layer for the three domains plus the asynchronous rating
//! update listener. Modules are generic over the ports they consume and
//! carry no transport concerns.

pub mod company;
pub mod job;
pub mod rating_listener;
pub mod review;

pub use crate::company::{CompanyModule, CompanyServiceError};
pub use crate::job::{JobDetails, JobModule, JobServiceError, JobUpdate};
pub use crate::rating_listener::{ListenerConfig, RatingUpdateListener};
pub use crate::review::{ReviewModule, ReviewServiceError};
