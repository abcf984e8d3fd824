//! # Snowtooth
//!
//! An in-memory graph of ski lifts and trails with status mutations and live
//! change subscriptions.
//!
//! ## Core Concepts
//!
//! - **Entities**: Lifts and trails, seeded once and linked by id lists
//! - **Queries**: Counts, status filters and lookups, plus resolved cross references
//! - **Mutations**: Status changes that replace the stored entity and publish a snapshot
//! - **Subscriptions**: Per-topic streams of snapshots, no replay
//!
//! ## Example
//!
//! ```ignore
//! use snowtooth::{LiftStatus, Resort, ResortConfig};
//!
//! let resort = Resort::open(ResortConfig {
//!     data_dir: "./data".into(),
//!     ..Default::default()
//! })?;
//!
//! let changes = resort.lift_status_change();
//! let lift = resort.set_lift_status("jazz-cat", LiftStatus::Hold)?;
//! assert_eq!(changes.try_next()?, Some(lift));
//!
//! let open = resort.all_lifts(Some(LiftStatus::Open));
//! ```

pub mod api;
pub mod entities;
pub mod error;
pub mod mutation;
pub mod query;
pub mod resort;
pub mod seed;
pub mod subscriptions;
pub mod types;

// Re-exports
pub use api::{Request, Response};
pub use entities::{Collection, DanglingRef, EntityStore};
pub use error::{ResortError, Result};
pub use mutation::MutationEngine;
pub use query::QueryEngine;
pub use resort::{Resort, ResortConfig};
pub use seed::Seed;
pub use subscriptions::{
    Broadcaster, DropReason, ResortEvent, StatusEvent, StatusStream, SubscriptionEngine,
    SubscriptionHandle, SubscriptionId,
};
pub use types::*;
