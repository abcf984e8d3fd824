//! Static seed data for the entity store.
//!
//! A seed directory contains two JSON arrays, `lifts.json` and
//! `trails.json`, whose objects use the same field names as the serialized
//! [`Lift`] and [`Trail`] types.

use crate::error::Result;
use crate::types::{Lift, Trail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name of the lift collection inside a seed directory.
pub const LIFTS_FILE: &str = "lifts.json";

/// File name of the trail collection inside a seed directory.
pub const TRAILS_FILE: &str = "trails.json";

/// The two entity collections supplied at startup, in their original order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub lifts: Vec<Lift>,
    pub trails: Vec<Trail>,
}

impl Seed {
    /// Parse a seed from the contents of the two JSON documents.
    pub fn from_json(lifts: &str, trails: &str) -> Result<Self> {
        Ok(Self {
            lifts: serde_json::from_str(lifts)?,
            trails: serde_json::from_str(trails)?,
        })
    }

    /// Read `lifts.json` and `trails.json` from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let lifts = fs::read_to_string(dir.join(LIFTS_FILE))?;
        let trails = fs::read_to_string(dir.join(TRAILS_FILE))?;

        let seed = Self::from_json(&lifts, &trails)?;
        tracing::info!(
            dir = %dir.display(),
            lifts = seed.lifts.len(),
            trails = seed.trails.len(),
            "loaded seed"
        );
        Ok(seed)
    }
}
