//! Status lifecycles
//!
//! Transition tables for donations and deliveries. The backend owns the
//! state machines; these tables mirror them so a client can reject an
//! action before sending it and knows what to re-fetch afterwards.

pub mod delivery;
pub mod donation;

pub use delivery::{ActorRule, DeliveryAction, check_creation, check_deletable};
pub use donation::{DonationContext, DonationTransition, can_transition, check_guard};

use serde::{Deserialize, Serialize};

use crate::models::DonationStatus;

/// Server-side consequence implied by a transition.
///
/// Advisory only: the client never applies these locally, it re-fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Effect {
    /// Accepted donation now counts against its center's load
    CenterLoadIncreased,
    /// Linked donation moves to the given status
    DonationStatus(DonationStatus),
    /// Driver returns to the available pool
    DriverReleased,
    /// Affected lists must be fetched again
    RefetchRequired,
}
