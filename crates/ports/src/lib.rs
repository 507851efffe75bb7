//! Ports - Abstraction Layer
//!
//! This crate defines ports (traits) that represent the interfaces
//! needed by the application layer. These are implemented by adapters
//! in the infrastructure layer.

pub mod clients;
pub mod company_repository;
pub mod event_bus;
pub mod job_repository;
pub mod review_repository;

pub use crate::clients::{ClientError, CompanyClient, ReviewClient};
pub use crate::company_repository::{CompanyRepository, CompanyRepositoryError};
pub use crate::event_bus::{
    EventBusError, EventPublisher, EventReceiver, EventSubscriber, ListenerFailureMode,
    SystemEvent,
};
pub use crate::job_repository::{JobRepository, JobRepositoryError};
pub use crate::review_repository::{ReviewRepository, ReviewRepositoryError};
