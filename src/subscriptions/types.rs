//! Subscription types for live status changes.

use crate::types::{Lift, Topic, Trail};
use serde::{Deserialize, Serialize};

/// Events delivered to subscribers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResortEvent {
    /// A lift's status was changed. Carries the new snapshot.
    LiftStatusChange { lift: Lift },

    /// A trail's status was changed. Carries the new snapshot.
    TrailStatusChange { trail: Trail },

    /// Subscription was dropped by the broadcaster.
    Dropped { reason: DropReason },
}

/// Why a subscription was dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Bounded send buffer overflowed (slow consumer).
    BufferOverflow,
    /// Explicitly unsubscribed.
    Unsubscribed,
}

/// Unique identifier for a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Raw receiving end of a subscription.
pub struct SubscriptionHandle {
    pub id: SubscriptionId,
    pub topic: Topic,
    /// Channel to receive events.
    pub receiver: crossbeam_channel::Receiver<ResortEvent>,
}

impl SubscriptionHandle {
    /// Receive the next event (blocking).
    pub fn recv(&self) -> Result<ResortEvent, crossbeam_channel::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive an event (non-blocking).
    pub fn try_recv(&self) -> Result<ResortEvent, crossbeam_channel::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Receive with timeout.
    pub fn recv_timeout(
        &self,
        timeout: std::time::Duration,
    ) -> Result<ResortEvent, crossbeam_channel::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}
