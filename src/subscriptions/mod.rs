//! Live status change subscriptions.
//!
//! Mutations publish a snapshot of the changed entity on its topic; every
//! subscriber registered on that topic gets its own copy. There is no replay:
//! a new subscriber only sees changes published after it subscribed.
//!
//! # Example
//!
//! ```ignore
//! let resort = Resort::open(ResortConfig::default())?;
//! let changes = resort.lift_status_change();
//!
//! std::thread::spawn(move || {
//!     for lift in changes {
//!         println!("{} is now {}", lift.name, lift.status);
//!     }
//! });
//!
//! resort.set_lift_status("jazz-cat", LiftStatus::Hold)?;
//! ```

mod broadcaster;
mod stream;
mod types;

pub use broadcaster::Broadcaster;
pub use stream::{StatusEvent, StatusStream, SubscriptionEngine};
pub use types::{DropReason, ResortEvent, SubscriptionHandle, SubscriptionId};
