//! Adapters - Infrastructure Implementations
//!
//! This crate contains the implementations of the ports defined in jobhub-ports.

pub mod bus;
pub mod clients;
pub mod config;
pub mod repositories;

pub use crate::bus::{InMemoryBus, InMemoryBusBuilder};
pub use crate::clients::http::{HttpCompanyClient, HttpReviewClient};
pub use crate::clients::local::{LocalCompanyClient, LocalReviewClient};
pub use crate::config::app_config::{
    AppConfig, ClientMode, ClientsConfig, ConfigError, EventBusConfig, LoggingConfig,
    ServerConfig,
};
pub use crate::repositories::{
    InMemoryCompanyRepository, InMemoryJobRepository, InMemoryReviewRepository,
};
