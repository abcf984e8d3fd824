//! In-memory entity store.
//!
//! Two collections (lifts and trails) are seeded once and afterwards only
//! change through in-place replacement of individual records.

mod collection;
mod xref;

pub use collection::Collection;
pub use xref::{dangling_refs, lifts_for_trail, trails_for_lift, DanglingRef};

use crate::error::Result;
use crate::seed::Seed;
use crate::types::{Lift, Trail};

/// Holds the lift and trail collections.
pub struct EntityStore {
    lifts: Collection<Lift>,
    trails: Collection<Trail>,
}

impl EntityStore {
    /// Build the store from seed data, preserving seed order.
    pub fn new(seed: Seed) -> Result<Self> {
        Ok(Self {
            lifts: Collection::new(seed.lifts)?,
            trails: Collection::new(seed.trails)?,
        })
    }

    pub fn lifts(&self) -> &Collection<Lift> {
        &self.lifts
    }

    pub fn trails(&self) -> &Collection<Trail> {
        &self.trails
    }
}
