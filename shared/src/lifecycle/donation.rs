//! Donation transition table
//!
//! | From      | To        | Roles        | Guard                                    |
//! |-----------|-----------|--------------|------------------------------------------|
//! | PENDING   | COLLECTED | STAFF, ADMIN | center set, or assigned atomically       |
//! | PENDING   | REJECTED  | STAFF, ADMIN | none                                     |
//! | COLLECTED | DELIVERED | STAFF, ADMIN | no linked delivery still in progress     |
//! | DELIVERED | PROCESSED | STAFF, ADMIN | none                                     |
//!
//! DONOR and DRIVER never change a donation's status. ASSIGNED and
//! IN_TRANSIT are only reached through delivery side effects.

use super::Effect;
use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::{Delivery, DeliveryStatus, Donation, DonationStatus, Role};

/// A legal donation status change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DonationTransition {
    Accept,
    Reject,
    MarkDelivered,
    MarkProcessed,
}

impl DonationTransition {
    pub const ALL: [DonationTransition; 4] = [
        DonationTransition::Accept,
        DonationTransition::Reject,
        DonationTransition::MarkDelivered,
        DonationTransition::MarkProcessed,
    ];

    pub fn from(&self) -> DonationStatus {
        match self {
            DonationTransition::Accept | DonationTransition::Reject => DonationStatus::Pending,
            DonationTransition::MarkDelivered => DonationStatus::Collected,
            DonationTransition::MarkProcessed => DonationStatus::Delivered,
        }
    }

    pub fn to(&self) -> DonationStatus {
        match self {
            DonationTransition::Accept => DonationStatus::Collected,
            DonationTransition::Reject => DonationStatus::Rejected,
            DonationTransition::MarkDelivered => DonationStatus::Delivered,
            DonationTransition::MarkProcessed => DonationStatus::Processed,
        }
    }

    /// Look up the transition between two statuses, if one exists
    pub fn between(from: DonationStatus, to: DonationStatus) -> Option<DonationTransition> {
        Self::ALL
            .into_iter()
            .find(|t| t.from() == from && t.to() == to)
    }

    /// Roles allowed to trigger the transition
    pub fn permits(&self, role: Role) -> bool {
        role.is_staff_or_admin()
    }

    pub fn effects(&self) -> Vec<Effect> {
        match self {
            DonationTransition::Accept => vec![Effect::CenterLoadIncreased, Effect::RefetchRequired],
            _ => vec![Effect::RefetchRequired],
        }
    }
}

/// `canTransition(role, from, to)`: table lookup without guards
pub fn can_transition(role: Role, from: DonationStatus, to: DonationStatus) -> bool {
    DonationTransition::between(from, to).is_some_and(|t| t.permits(role))
}

/// Facts the guards need about the donation being changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DonationContext {
    /// Donation already has a collection center
    pub has_center: bool,
    /// Center assignment happens in the same request as the accept
    pub atomic_accept: bool,
    /// Status of the most relevant linked delivery, if any
    pub linked_delivery: Option<DeliveryStatus>,
}

impl DonationContext {
    /// Build the context from a donation and the deliveries known for it.
    ///
    /// An active delivery wins over finished ones.
    pub fn for_donation(donation: &Donation, deliveries: &[Delivery]) -> Self {
        let linked: Vec<DeliveryStatus> = deliveries
            .iter()
            .filter(|d| d.donation_id == donation.id)
            .map(|d| d.status)
            .collect();
        let linked_delivery = linked
            .iter()
            .copied()
            .find(DeliveryStatus::is_active)
            .or_else(|| linked.last().copied());
        Self {
            has_center: donation.has_center(),
            atomic_accept: false,
            linked_delivery,
        }
    }

    pub fn atomic_accept(mut self) -> Self {
        self.atomic_accept = true;
        self
    }
}

/// Evaluate the guard of `transition` against `ctx`
pub fn check_guard(transition: DonationTransition, ctx: &DonationContext) -> AppResult<()> {
    match transition {
        DonationTransition::Accept => {
            if !ctx.has_center && !ctx.atomic_accept {
                return Err(AppError::new(ErrorCode::DonationCenterRequired));
            }
        }
        DonationTransition::MarkDelivered => {
            if let Some(status) = ctx.linked_delivery.filter(DeliveryStatus::is_active) {
                return Err(AppError::new(ErrorCode::DonationHasActiveDelivery)
                    .with_detail("delivery_status", status.as_str()));
            }
        }
        DonationTransition::Reject | DonationTransition::MarkProcessed => {}
    }
    Ok(())
}

/// Resolve and guard a status change, ignoring who asks for it
pub fn plan(from: DonationStatus, to: DonationStatus, ctx: &DonationContext) -> AppResult<DonationTransition> {
    let transition = DonationTransition::between(from, to).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::DonationInvalidTransition,
            format!("Cannot change donation from {} to {}", from, to),
        )
    })?;
    check_guard(transition, ctx)?;
    Ok(transition)
}
