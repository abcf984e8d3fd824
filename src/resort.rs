//! Main Resort struct tying all components together.

use crate::api::{self, Request, Response};
use crate::entities::{self, EntityStore};
use crate::error::Result;
use crate::mutation::MutationEngine;
use crate::query::QueryEngine;
use crate::seed::Seed;
use crate::subscriptions::{Broadcaster, StatusStream, SubscriptionEngine};
use crate::types::{Lift, LiftStatus, Trail, TrailStatus};
use std::path::PathBuf;
use std::sync::Arc;

/// Resort configuration.
#[derive(Clone, Debug)]
pub struct ResortConfig {
    /// Directory holding `lifts.json` and `trails.json`.
    pub data_dir: PathBuf,

    /// Max buffered events per subscriber before it is dropped.
    /// None (the default) buffers without limit until the stream is cancelled.
    pub subscription_buffer: Option<usize>,
}

impl Default for ResortConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            subscription_buffer: None,
        }
    }
}

/// The resort graph.
///
/// Constructed once at startup and shared (it is `Send + Sync`) with
/// whatever transport serves it. Provides:
/// - Queries over lifts and trails
/// - Status mutations that persist in memory and notify subscribers
/// - Per-topic status change streams
///
/// The entity store itself is not exposed: the only way to change an entity
/// is a status mutation, which always publishes.
///
/// ```compile_fail
/// fn bypass(resort: &snowtooth::Resort) {
///     let _ = resort.store();
/// }
/// ```
pub struct Resort {
    broadcaster: Arc<Broadcaster>,
    queries: QueryEngine,
    mutations: MutationEngine,
    subscriptions: SubscriptionEngine,
}

impl Resort {
    /// Load the seed from `config.data_dir` and build the resort.
    pub fn open(config: ResortConfig) -> Result<Self> {
        let seed = Seed::load(&config.data_dir)?;
        Self::from_seed(seed, &config)
    }

    /// Build the resort from an in-memory seed.
    pub fn from_seed(seed: Seed, config: &ResortConfig) -> Result<Self> {
        let store = Arc::new(EntityStore::new(seed)?);

        for dangling in entities::dangling_refs(&store) {
            tracing::warn!(?dangling, "cross reference points at unknown id");
        }

        let broadcaster = Arc::new(Broadcaster::with_buffer_limit(config.subscription_buffer));

        tracing::info!(
            lifts = store.lifts().len(),
            trails = store.trails().len(),
            "resort ready"
        );

        Ok(Self {
            queries: QueryEngine::new(Arc::clone(&store)),
            mutations: MutationEngine::new(Arc::clone(&store), Arc::clone(&broadcaster)),
            subscriptions: SubscriptionEngine::new(Arc::clone(&broadcaster)),
            broadcaster,
        })
    }

    pub fn queries(&self) -> &QueryEngine {
        &self.queries
    }

    pub fn broadcaster(&self) -> &Arc<Broadcaster> {
        &self.broadcaster
    }

    // --- Queries ---

    pub fn lift_count(&self) -> usize {
        self.queries.lift_count()
    }

    pub fn trail_count(&self) -> usize {
        self.queries.trail_count()
    }

    pub fn all_lifts(&self, status: Option<LiftStatus>) -> Vec<Lift> {
        self.queries.all_lifts(status)
    }

    pub fn all_trails(&self, status: Option<TrailStatus>) -> Vec<Trail> {
        self.queries.all_trails(status)
    }

    pub fn find_lift_by_id(&self, id: &str) -> Option<Lift> {
        self.queries.find_lift_by_id(id)
    }

    pub fn find_trail_by_name(&self, name: &str) -> Option<Trail> {
        self.queries.find_trail_by_name(name)
    }

    pub fn lift_trails(&self, lift: &Lift) -> Vec<Trail> {
        self.queries.lift_trails(lift)
    }

    pub fn trail_lifts(&self, trail: &Trail) -> Vec<Lift> {
        self.queries.trail_lifts(trail)
    }

    // --- Mutations ---

    pub fn set_lift_status(&self, id: &str, status: LiftStatus) -> Result<Lift> {
        self.mutations.set_lift_status(id, status)
    }

    pub fn set_trail_status(&self, id: &str, status: TrailStatus) -> Result<Trail> {
        self.mutations.set_trail_status(id, status)
    }

    // --- Subscriptions ---

    pub fn lift_status_change(&self) -> StatusStream<Lift> {
        self.subscriptions.lift_status_change()
    }

    pub fn trail_status_change(&self) -> StatusStream<Trail> {
        self.subscriptions.trail_status_change()
    }

    /// Run one request.
    ///
    /// Unknown lift or trail ids in the resolved-field requests yield an empty
    /// list, matching how lookups report absence.
    pub fn execute(&self, request: Request) -> Result<Response> {
        let response = match request {
            Request::LiftCount => Response::Count(self.lift_count()),
            Request::TrailCount => Response::Count(self.trail_count()),
            Request::AllLifts { status } => {
                let status = api::parse_lift_status(status.as_deref())?;
                Response::Lifts(self.all_lifts(status))
            }
            Request::AllTrails { status } => {
                let status = api::parse_trail_status(status.as_deref())?;
                Response::Trails(self.all_trails(status))
            }
            Request::FindLiftById { id } => Response::Lift(self.find_lift_by_id(&id)),
            Request::FindTrailByName { name } => Response::Trail(self.find_trail_by_name(&name)),
            Request::LiftTrails { id } => Response::Trails(
                self.find_lift_by_id(&id)
                    .map(|lift| self.lift_trails(&lift))
                    .unwrap_or_default(),
            ),
            Request::TrailLifts { id } => Response::Lifts(
                self.queries
                    .find_trail_by_id(&id)
                    .map(|trail| self.trail_lifts(&trail))
                    .unwrap_or_default(),
            ),
            Request::SetLiftStatus { id, status } => {
                let status: LiftStatus = status.parse()?;
                Response::Lift(Some(self.set_lift_status(&id, status)?))
            }
            Request::SetTrailStatus { id, status } => {
                let status: TrailStatus = status.parse()?;
                Response::Trail(Some(self.set_trail_status(&id, status)?))
            }
        };
        Ok(response)
    }
}
