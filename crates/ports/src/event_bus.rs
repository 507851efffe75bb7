//! Event Bus Port
//!
//! Defines the interfaces for the asynchronous channel between the Review
//! and Company domains ("company rating" channel).

use async_trait::async_trait;
use jobhub_core::CompanyId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::error::RecvError;

/// System events carried by the bus
///
/// `ReviewCreated` is the rating update event: a review affecting the
/// company changed, so its aggregate rating must be recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemEvent {
    /// A review was stored for this company
    ReviewCreated { company_id: CompanyId },
}

/// Event bus error types
#[derive(thiserror::Error, Debug)]
pub enum EventBusError {
    #[error("bus full (capacity: {0})")]
    Full(usize),

    #[error("subscriber dropped")]
    Dropped,

    #[error("channel closed")]
    Closed,
}

/// Event publisher port
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: SystemEvent) -> Result<(), EventBusError>;
}

/// Event receiver wrapper
#[derive(Debug)]
pub struct EventReceiver {
    pub receiver: tokio::sync::broadcast::Receiver<SystemEvent>,
}

impl EventReceiver {
    pub async fn recv(&mut self) -> Result<SystemEvent, EventBusError> {
        match self.receiver.recv().await {
            Ok(event) => Ok(event),
            Err(RecvError::Closed) => Err(EventBusError::Closed),
            Err(RecvError::Lagged(_)) => Err(EventBusError::Dropped),
        }
    }

    pub fn try_recv(&mut self) -> Result<SystemEvent, EventBusError> {
        self.receiver.try_recv().map_err(|_| EventBusError::Dropped)
    }
}

/// What an event consumer does with an event whose processing failed
///
/// A deliberate configuration choice rather than a framework default:
/// `Drop` logs and discards, `Requeue` republishes the event onto the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListenerFailureMode {
    Drop,
    Requeue,
}

/// Event subscriber port
#[async_trait]
pub trait EventSubscriber: Send + Sync {
    async fn subscribe(&self) -> Result<EventReceiver, EventBusError>;
}
