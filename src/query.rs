//! Read-only queries over the entity store.

use crate::entities::{self, EntityStore};
use crate::types::{Lift, LiftStatus, Trail, TrailStatus};
use std::sync::Arc;

/// Answers read requests. Never mutates the store.
#[derive(Clone)]
pub struct QueryEngine {
    store: Arc<EntityStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    pub fn lift_count(&self) -> usize {
        self.store.lifts().len()
    }

    pub fn trail_count(&self) -> usize {
        self.store.trails().len()
    }

    /// Lifts with the given status, or every lift when `status` is None.
    pub fn all_lifts(&self, status: Option<LiftStatus>) -> Vec<Lift> {
        self.store.lifts().filter_by_status(status)
    }

    /// Trails with the given status, or every trail when `status` is None.
    pub fn all_trails(&self, status: Option<TrailStatus>) -> Vec<Trail> {
        self.store.trails().filter_by_status(status)
    }

    pub fn find_lift_by_id(&self, id: &str) -> Option<Lift> {
        self.store.lifts().find_by_id(id)
    }

    pub fn find_lift_by_name(&self, name: &str) -> Option<Lift> {
        self.store.lifts().find_by_name(name)
    }

    pub fn find_trail_by_id(&self, id: &str) -> Option<Trail> {
        self.store.trails().find_by_id(id)
    }

    /// First trail with this exact name.
    pub fn find_trail_by_name(&self, name: &str) -> Option<Trail> {
        self.store.trails().find_by_name(name)
    }

    /// Trails served by `lift`, resolved against the current store.
    pub fn lift_trails(&self, lift: &Lift) -> Vec<Trail> {
        entities::trails_for_lift(&self.store, lift)
    }

    /// Lifts serving `trail`, resolved against the current store.
    pub fn trail_lifts(&self, trail: &Trail) -> Vec<Lift> {
        entities::lifts_for_trail(&self.store, trail)
    }
}
