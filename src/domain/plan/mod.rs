//! Plan bounded context.
//!
//! The plan aggregate and its collaborators: the ownership roster, the
//! capacity ledger, lifecycle status, events, read model, and the legacy
//! single-owner migration adapter.

mod aggregate;
mod capacity;
mod errors;
mod events;
mod legacy;
mod roster;
mod snapshot;
mod status;

pub use aggregate::Plan;
pub use capacity::CapacityLedger;
pub use errors::PlanError;
pub use events::PlanEvent;
pub use legacy::LegacyPlanRecord;
pub use roster::{OwnerRole, OwnershipEntry, OwnershipRoster, RosterPolicy};
pub use snapshot::{EnrollmentCounts, PlanSnapshot};
pub use status::PlanStatus;
