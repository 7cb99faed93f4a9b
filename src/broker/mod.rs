//! Broker module
//!
//! Publishes topic-keyed change notifications. The registry hands every
//! created, updated or deleted record to a [`Broker`] after the write.

mod topics;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;

pub use topics::{topics, Action, TopicScope, Topics};

/// Message delivered to subscribers, one per topic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokerMessage {
    pub topic: String,
    pub payload: Value,
}

/// Broker errors
#[derive(Debug, thiserror::Error)]
pub enum BrokerError {
    #[error("Broker channel is closed")]
    Closed,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Destination for change notifications
pub trait Broker: Send + Sync {
    /// Publish `payload` under every topic in `topics`
    fn dispatch(&self, topics: &[String], payload: &Value) -> Result<(), BrokerError>;
}

/// Shared broker handle
pub type SharedBroker = Arc<dyn Broker>;

/// In-process broker backed by a broadcast channel
#[derive(Debug, Clone)]
pub struct InMemoryBroker {
    sender: broadcast::Sender<BrokerMessage>,
}

impl InMemoryBroker {
    /// Create a broker whose subscribers may lag by at most `capacity` messages
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribe to every topic
    pub fn subscribe(&self) -> broadcast::Receiver<BrokerMessage> {
        self.sender.subscribe()
    }

    /// Subscribe to topics starting with `prefix`
    pub fn subscribe_topic(&self, prefix: impl Into<String>) -> TopicSubscription {
        TopicSubscription {
            prefix: prefix.into(),
            receiver: self.sender.subscribe(),
        }
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for InMemoryBroker {
    fn default() -> Self {
        Self::new(1024)
    }
}

impl Broker for InMemoryBroker {
    fn dispatch(&self, topics: &[String], payload: &Value) -> Result<(), BrokerError> {
        for topic in topics {
            // No subscribers is fine: the notification is simply dropped
            let _ = self.sender.send(BrokerMessage {
                topic: topic.clone(),
                payload: payload.clone(),
            });
        }
        tracing::debug!(topics = topics.len(), "Dispatched change notification");
        Ok(())
    }
}

/// Subscription filtered by topic prefix
#[derive(Debug)]
pub struct TopicSubscription {
    prefix: String,
    receiver: broadcast::Receiver<BrokerMessage>,
}

impl TopicSubscription {
    /// Wait for the next message matching the prefix
    pub async fn recv(&mut self) -> Result<BrokerMessage, BrokerError> {
        loop {
            match self.receiver.recv().await {
                Ok(message) if message.topic.starts_with(&self.prefix) => return Ok(message),
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, prefix = %self.prefix, "Topic subscriber lagged");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return Err(BrokerError::Closed),
            }
        }
    }
}

/// Broker that discards everything (seeding, tooling)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBroker;

impl Broker for NoopBroker {
    fn dispatch(&self, _topics: &[String], _payload: &Value) -> Result<(), BrokerError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_in_memory_broker_delivers_each_topic() {
        let broker = InMemoryBroker::new(16);
        let mut rx = broker.subscribe();

        let topics = vec!["bank.create".to_string(), "bank.create.abc".to_string()];
        broker.dispatch(&topics, &json!({"name": "HSBC"})).unwrap();

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first.topic, "bank.create");
        assert_eq!(second.topic, "bank.create.abc");
        assert_eq!(second.payload["name"], "HSBC");
    }

    #[tokio::test]
    async fn test_topic_subscription_filters_prefix() {
        let broker = InMemoryBroker::new(16);
        let mut sub = broker.subscribe_topic("timesheet.");

        broker
            .dispatch(&["bank.delete".to_string()], &json!(null))
            .unwrap();
        broker
            .dispatch(&["timesheet.update".to_string()], &json!({"id": 1}))
            .unwrap();

        let message = sub.recv().await.unwrap();
        assert_eq!(message.topic, "timesheet.update");
    }

    #[test]
    fn test_dispatch_without_subscribers_is_ok() {
        let broker = InMemoryBroker::default();
        assert_eq!(broker.subscriber_count(), 0);
        assert!(broker
            .dispatch(&["currency.create".to_string()], &json!({}))
            .is_ok());
        assert!(NoopBroker.dispatch(&[], &json!({})).is_ok());
    }
}
