//! Typed, per-topic streams of entity snapshots.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{RecvTimeoutError, TryRecvError};

use super::broadcaster::Broadcaster;
use super::types::{ResortEvent, SubscriptionHandle, SubscriptionId};
use crate::error::{ResortError, Result};
use crate::types::{Lift, Topic, Trail};

/// An entity type that has a status change topic.
pub trait StatusEvent: Sized {
    const TOPIC: Topic;

    /// Wrap a snapshot for publishing.
    fn into_event(self) -> ResortEvent;

    /// Unwrap a snapshot published on [`Self::TOPIC`].
    fn from_event(event: ResortEvent) -> Option<Self>;
}

impl StatusEvent for Lift {
    const TOPIC: Topic = Topic::LiftStatusChange;

    fn into_event(self) -> ResortEvent {
        ResortEvent::LiftStatusChange { lift: self }
    }

    fn from_event(event: ResortEvent) -> Option<Self> {
        match event {
            ResortEvent::LiftStatusChange { lift } => Some(lift),
            _ => None,
        }
    }
}

impl StatusEvent for Trail {
    const TOPIC: Topic = Topic::TrailStatusChange;

    fn into_event(self) -> ResortEvent {
        ResortEvent::TrailStatusChange { trail: self }
    }

    fn from_event(event: ResortEvent) -> Option<Self> {
        match event {
            ResortEvent::TrailStatusChange { trail } => Some(trail),
            _ => None,
        }
    }
}

/// Forward-only stream of snapshots for one topic.
///
/// Iterating blocks until the next change arrives. The iterator ends once the
/// subscription is cancelled or dropped by the broadcaster. Dropping the
/// stream unsubscribes it.
pub struct StatusStream<T: StatusEvent> {
    handle: SubscriptionHandle,
    broadcaster: Arc<Broadcaster>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: StatusEvent> StatusStream<T> {
    fn new(broadcaster: Arc<Broadcaster>) -> Self {
        let handle = broadcaster.subscribe(T::TOPIC);
        Self {
            handle,
            broadcaster,
            _entity: PhantomData,
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.handle.id
    }

    /// Next snapshot if one is already buffered.
    ///
    /// `Ok(None)` means nothing is waiting yet; `SubscriptionDropped` means the
    /// stream has ended.
    pub fn try_next(&self) -> Result<Option<T>> {
        loop {
            match self.handle.try_recv() {
                Ok(event) => match Self::unwrap_event(event)? {
                    Some(item) => return Ok(Some(item)),
                    None => continue,
                },
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Disconnected) => return Err(ResortError::SubscriptionDropped),
            }
        }
    }

    /// Wait up to `timeout` for the next snapshot.
    pub fn next_timeout(&self, timeout: Duration) -> Result<Option<T>> {
        match self.handle.recv_timeout(timeout) {
            Ok(event) => match Self::unwrap_event(event)? {
                Some(item) => Ok(Some(item)),
                // Foreign event; treat as a spurious wakeup
                None => self.try_next(),
            },
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(ResortError::SubscriptionDropped),
        }
    }

    /// Stop receiving. Consumes the stream.
    pub fn cancel(self) {
        // Drop impl unsubscribes
    }

    fn unwrap_event(event: ResortEvent) -> Result<Option<T>> {
        match event {
            ResortEvent::Dropped { reason } => {
                tracing::debug!(?reason, "stream ended");
                Err(ResortError::SubscriptionDropped)
            }
            other => Ok(T::from_event(other)),
        }
    }
}

impl<T: StatusEvent> Iterator for StatusStream<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let event = self.handle.recv().ok()?;
            match Self::unwrap_event(event) {
                Ok(Some(item)) => return Some(item),
                Ok(None) => continue,
                Err(_) => return None,
            }
        }
    }
}

impl<T: StatusEvent> Drop for StatusStream<T> {
    fn drop(&mut self) {
        self.broadcaster.unsubscribe(self.handle.topic, self.handle.id);
    }
}

/// Hands out status change streams.
#[derive(Clone)]
pub struct SubscriptionEngine {
    broadcaster: Arc<Broadcaster>,
}

impl SubscriptionEngine {
    pub fn new(broadcaster: Arc<Broadcaster>) -> Self {
        Self { broadcaster }
    }

    /// Stream of lift snapshots, one per committed lift status change.
    pub fn lift_status_change(&self) -> StatusStream<Lift> {
        StatusStream::new(Arc::clone(&self.broadcaster))
    }

    /// Stream of trail snapshots, one per committed trail status change.
    pub fn trail_status_change(&self) -> StatusStream<Trail> {
        StatusStream::new(Arc::clone(&self.broadcaster))
    }
}
