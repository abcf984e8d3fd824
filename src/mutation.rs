//! Status mutations.
//!
//! A mutation copies the stored entity with a new status, writes the copy back
//! into the store, publishes it on the entity's topic and returns it. The
//! publish always happens before the caller gets the result.

use crate::entities::{Collection, EntityStore};
use crate::error::{ResortError, Result};
use crate::subscriptions::{Broadcaster, StatusEvent};
use crate::types::{Entity, Lift, LiftStatus, Trail, TrailStatus};
use parking_lot::Mutex;
use std::sync::Arc;

/// Applies status changes and fans them out.
pub struct MutationEngine {
    store: Arc<EntityStore>,
    broadcaster: Arc<Broadcaster>,
    /// Serializes lift mutations so snapshots are published in commit order.
    lift_lock: Mutex<()>,
    /// Same, for trails.
    trail_lock: Mutex<()>,
}

impl MutationEngine {
    pub fn new(store: Arc<EntityStore>, broadcaster: Arc<Broadcaster>) -> Self {
        Self {
            store,
            broadcaster,
            lift_lock: Mutex::new(()),
            trail_lock: Mutex::new(()),
        }
    }

    /// Set a lift's status and publish the new snapshot.
    pub fn set_lift_status(&self, id: &str, status: LiftStatus) -> Result<Lift> {
        self.apply(&self.lift_lock, self.store.lifts(), id, |lift| {
            lift.with_status(status)
        })
    }

    /// Set a trail's status and publish the new snapshot.
    pub fn set_trail_status(&self, id: &str, status: TrailStatus) -> Result<Trail> {
        self.apply(&self.trail_lock, self.store.trails(), id, |trail| {
            trail.with_status(status)
        })
    }

    fn apply<T, F>(&self, lock: &Mutex<()>, collection: &Collection<T>, id: &str, f: F) -> Result<T>
    where
        T: Entity + StatusEvent,
        F: FnOnce(&T) -> T,
    {
        let missing = || ResortError::MutationTargetMissing {
            kind: T::KIND,
            id: id.to_string(),
        };

        // Held across find, replace and publish
        let _lock = lock.lock();

        let current = collection.find_by_id(id).ok_or_else(missing)?;
        let updated = f(&current);
        collection.replace(updated.clone()).ok_or_else(missing)?;

        tracing::debug!(kind = %T::KIND, id, status = ?updated.status(), "status changed");
        self.broadcaster.publish(T::TOPIC, updated.clone().into_event());

        Ok(updated)
    }
}
