//! InMemoryBus adapter using tokio::broadcast
//!
//! This is the concrete implementation of the EventPublisher and
//! EventSubscriber ports: the in-process "company rating" channel between
//! the Review and Company domains.

use async_trait::async_trait;
use jobhub_ports::event_bus::{
    EventBusError, EventPublisher, EventReceiver, EventSubscriber, SystemEvent,
};
use tokio::sync::broadcast;

/// In-memory event bus for inter-module communication
///
/// Events are fanned out to every active subscriber. A publish with no
/// subscribers fails, which the caller treats as a bus-full condition;
/// consumers are subscribed at startup before any review can be created.
pub struct InMemoryBus {
    sender: broadcast::Sender<SystemEvent>,
    capacity: usize,
}

impl InMemoryBus {
    /// Create a new InMemoryBus with the specified capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender, capacity }
    }

    /// Get the configured capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of active receivers
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[async_trait]
impl EventPublisher for InMemoryBus {
    async fn publish(&self, event: SystemEvent) -> Result<(), EventBusError> {
        match self.sender.send(event) {
            Ok(_) => Ok(()),
            Err(broadcast::error::SendError(_)) => Err(EventBusError::Full(self.capacity)),
        }
    }
}

#[async_trait]
impl EventSubscriber for InMemoryBus {
    async fn subscribe(&self) -> Result<EventReceiver, EventBusError> {
        let receiver = self.sender.subscribe();
        Ok(EventReceiver { receiver })
    }
}

impl Default for InMemoryBus {
    fn default() -> Self {
        Self::new(10_000)
    }
}

/// Builder pattern for InMemoryBus configuration
pub struct InMemoryBusBuilder {
    capacity: usize,
}

impl InMemoryBusBuilder {
    pub fn new() -> Self {
        Self { capacity: 10_000 }
    }

    /// Set the channel capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn build(self) -> InMemoryBus {
        InMemoryBus::new(self.capacity)
    }
}

impl Default for InMemoryBusBuilder {
    fn default() -> Self {
        Self::new()
    }
}
