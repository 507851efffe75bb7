//! Rating Update Listener
//!
//! Consumes rating update events from the bus and drives the company
//! rating refresh: look up the company, fetch the authoritative average
//! from the Review domain, persist the new value.
//!
//! The listener is wired explicitly at startup: `start` subscribes to the
//! channel before spawning the consumer task, so events published after
//! startup are never missed. Nothing serializes events per company;
//! concurrent events for the same company are last-writer-wins.

use crate::company::{CompanyModule, CompanyServiceError};
use jobhub_ports::{
    CompanyRepository, EventBusError, EventPublisher, EventSubscriber, ListenerFailureMode,
    ReviewClient, SystemEvent,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Pause before redelivering a failed event; without it a persistently
/// failing remote would spin the consumer loop at full speed.
const REQUEUE_DELAY: Duration = Duration::from_millis(50);

/// Listener configuration
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    pub on_failure: ListenerFailureMode,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            on_failure: ListenerFailureMode::Drop,
        }
    }
}

pub struct RatingUpdateListener<R, C, B>
where
    R: CompanyRepository + 'static,
    C: ReviewClient + ?Sized + 'static,
    B: EventSubscriber + EventPublisher + 'static,
{
    company: CompanyModule<R, C>,
    bus: Arc<B>,
    config: ListenerConfig,
}

impl<R, C, B> RatingUpdateListener<R, C, B>
where
    R: CompanyRepository + 'static,
    C: ReviewClient + ?Sized + 'static,
    B: EventSubscriber + EventPublisher + 'static,
{
    pub fn new(company: CompanyModule<R, C>, bus: Arc<B>, config: ListenerConfig) -> Self {
        Self {
            company,
            bus,
            config,
        }
    }

    /// Subscribe to the channel and spawn the consumer task
    pub async fn start(self) -> Result<JoinHandle<()>, EventBusError> {
        let mut receiver = self.bus.subscribe().await?;
        info!(on_failure = ?self.config.on_failure, "rating update listener subscribed");

        Ok(tokio::spawn(async move {
            loop {
                match receiver.recv().await {
                    Ok(event) => self.process(event).await,
                    Err(EventBusError::Dropped) => {
                        // Receiver lagged behind the channel; skipped
                        // events mean stale ratings until the next event
                        // for the affected companies.
                        warn!("rating update listener lagged, events skipped");
                    }
                    Err(_) => {
                        info!("rating update channel closed, listener stopping");
                        break;
                    }
                }
            }
        }))
    }

    async fn process(&self, event: SystemEvent) {
        if let Err(error) = self.handle_event(&event).await {
            match (&error, self.config.on_failure) {
                // A missing company is terminal for the event; requeueing
                // could never succeed.
                (CompanyServiceError::NotFound(id), _) => {
                    warn!(company_id = %id, "rating update for unknown company, event dropped");
                }
                (_, ListenerFailureMode::Requeue) => {
                    warn!(%error, "rating update failed, requeueing event");
                    tokio::time::sleep(REQUEUE_DELAY).await;
                    if let Err(publish_error) = self.bus.publish(event).await {
                        warn!(%publish_error, "failed to requeue rating update event");
                    }
                }
                (_, ListenerFailureMode::Drop) => {
                    warn!(%error, "rating update failed, event dropped");
                }
            }
        }
    }

    /// Handle a single event
    pub async fn handle_event(&self, event: &SystemEvent) -> Result<(), CompanyServiceError> {
        match event {
            SystemEvent::ReviewCreated { company_id } => {
                self.company.refresh_rating(*company_id).await?;
                Ok(())
            }
        }
    }
}
