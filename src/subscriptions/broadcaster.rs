//! Topic-keyed broadcaster for status change events.

use crossbeam_channel::{bounded, unbounded, Sender, TrySendError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::types::{DropReason, ResortEvent, SubscriptionHandle, SubscriptionId};
use crate::types::Topic;

/// Outcome of a single delivery attempt.
enum Delivery {
    Sent,
    /// Bounded buffer is full (slow consumer).
    Full,
    /// Receiving end was dropped.
    Gone,
}

/// Internal subscriber state.
struct Subscriber {
    id: SubscriptionId,
    sender: Sender<ResortEvent>,
}

impl Subscriber {
    fn try_send(&self, event: ResortEvent) -> Delivery {
        match self.sender.try_send(event) {
            Ok(()) => Delivery::Sent,
            Err(TrySendError::Full(_)) => Delivery::Full,
            Err(TrySendError::Disconnected(_)) => Delivery::Gone,
        }
    }
}

/// Publish/subscribe hub keyed by topic.
///
/// Subscribers of a topic are kept in registration order and each one owns a
/// channel. Publishing never blocks. By default channels are unbounded, so a
/// subscriber keeps every event until it cancels; with a buffer limit set, a
/// subscriber whose buffer is full is dropped instead. A subscriber whose
/// receiver has gone away is pruned.
pub struct Broadcaster {
    /// Active subscribers per topic, in registration order.
    topics: RwLock<HashMap<Topic, Vec<Subscriber>>>,
    /// Counter for generating subscription IDs.
    next_id: AtomicU64,
    /// Per-subscriber channel capacity (None = unbounded).
    buffer_size: Option<usize>,
}

impl Broadcaster {
    /// Create a broadcaster with unbounded subscriber channels.
    pub fn new() -> Self {
        Self::with_buffer_limit(None)
    }

    /// Create a broadcaster that drops subscribers more than `buffer_size`
    /// events behind.
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self::with_buffer_limit(Some(buffer_size))
    }

    /// Create a broadcaster with an optional per-subscriber buffer limit.
    pub fn with_buffer_limit(buffer_size: Option<usize>) -> Self {
        Self {
            topics: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            buffer_size: buffer_size.map(|n| n.max(1)),
        }
    }

    /// Register a new subscriber on `topic`.
    ///
    /// Only events published after this call are delivered.
    pub fn subscribe(&self, topic: Topic) -> SubscriptionHandle {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let (sender, receiver) = match self.buffer_size {
            Some(n) => bounded(n),
            None => unbounded(),
        };

        self.topics
            .write()
            .entry(topic)
            .or_default()
            .push(Subscriber { id, sender });

        tracing::debug!(topic = %topic, id = id.0, "subscribed");
        SubscriptionHandle {
            id,
            topic,
            receiver,
        }
    }

    /// Remove a subscriber from `topic`. Returns false if it was not registered.
    pub fn unsubscribe(&self, topic: Topic, id: SubscriptionId) -> bool {
        let mut topics = self.topics.write();
        let Some(subscribers) = topics.get_mut(&topic) else {
            return false;
        };
        let Some(pos) = subscribers.iter().position(|s| s.id == id) else {
            return false;
        };

        let sub = subscribers.remove(pos);
        // Best effort
        let _ = sub.sender.try_send(ResortEvent::Dropped {
            reason: DropReason::Unsubscribed,
        });
        tracing::debug!(topic = %topic, id = id.0, "unsubscribed");
        true
    }

    /// Number of active subscribers on `topic`.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.topics.read().get(&topic).map_or(0, Vec::len)
    }

    /// Deliver `event` to every subscriber of `topic`, in registration order.
    ///
    /// Returns the number of subscribers that received it.
    pub fn publish(&self, topic: Topic, event: ResortEvent) -> usize {
        let mut delivered = 0;
        let mut overflowed = Vec::new();
        let mut gone = Vec::new();

        {
            let topics = self.topics.read();
            if let Some(subscribers) = topics.get(&topic) {
                for sub in subscribers {
                    match sub.try_send(event.clone()) {
                        Delivery::Sent => delivered += 1,
                        Delivery::Full => overflowed.push(sub.id),
                        Delivery::Gone => gone.push(sub.id),
                    }
                }
            }
        }

        if !overflowed.is_empty() || !gone.is_empty() {
            let mut topics = self.topics.write();
            if let Some(subscribers) = topics.get_mut(&topic) {
                subscribers.retain(|sub| {
                    if overflowed.contains(&sub.id) {
                        tracing::warn!(topic = %topic, id = sub.id.0, "dropping slow subscriber");
                        // Might fail, that's ok
                        let _ = sub.sender.try_send(ResortEvent::Dropped {
                            reason: DropReason::BufferOverflow,
                        });
                        false
                    } else {
                        !gone.contains(&sub.id)
                    }
                });
            }
        }

        tracing::debug!(topic = %topic, delivered, "published");
        delivered
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new()
    }
}
