//! Transport-agnostic request/response surface.
//!
//! A [`Request`] names one query or mutation with its arguments, using the
//! camelCase operation names of the public schema. Status arguments travel
//! as strings and are parsed here, so an unknown value never reaches the
//! mutation engine.

use crate::error::Result;
use crate::types::{Lift, LiftStatus, Trail, TrailStatus};
use serde::{Deserialize, Serialize};

/// One query or mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Request {
    LiftCount,
    TrailCount,
    AllLifts {
        #[serde(default)]
        status: Option<String>,
    },
    AllTrails {
        #[serde(default)]
        status: Option<String>,
    },
    FindLiftById {
        id: String,
    },
    FindTrailByName {
        name: String,
    },
    /// Resolved `trails` field of a lift.
    LiftTrails {
        id: String,
    },
    /// Resolved `lifts` field of a trail.
    TrailLifts {
        id: String,
    },
    SetLiftStatus {
        id: String,
        status: String,
    },
    SetTrailStatus {
        id: String,
        status: String,
    },
}

impl Request {
    /// Parse a request from JSON, e.g. `{"op":"setLiftStatus","id":"jazz-cat","status":"HOLD"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Typed result of a [`Request`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Count(usize),
    Lifts(Vec<Lift>),
    Trails(Vec<Trail>),
    Lift(Option<Lift>),
    Trail(Option<Trail>),
}

impl Response {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Parse an optional status filter argument.
pub(crate) fn parse_lift_status(status: Option<&str>) -> Result<Option<LiftStatus>> {
    status.map(str::parse).transpose()
}

/// Parse an optional status filter argument.
pub(crate) fn parse_trail_status(status: Option<&str>) -> Result<Option<TrailStatus>> {
    status.map(str::parse).transpose()
}
