//! Delivery transition table
//!
//! | From                | To         | Action   | Actors                   |
//! |---------------------|------------|----------|--------------------------|
//! | ASSIGNED            | PICKED_UP  | pickup   | assignee driver          |
//! | ASSIGNED            | CANCELLED  | cancel   | assignee driver, staff   |
//! | PICKED_UP           | IN_TRANSIT | transit  | assignee driver          |
//! | IN_TRANSIT          | DELIVERED  | complete | assignee driver          |
//! | DELIVERED/CANCELLED | (removed)  | delete   | staff                    |
//!
//! Single step, forward only. "Staff" includes ADMIN. Creating a delivery
//! does not touch driver availability; only complete and cancel release
//! the driver. Removing a delivery puts its donation back to COLLECTED.

use super::Effect;
use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::{Delivery, DeliveryStatus, Donation, DonationStatus, Driver, Recipient, Role};

/// Action on an existing delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryAction {
    Pickup,
    Transit,
    Complete,
    Cancel,
    Delete,
}

/// Who may perform a delivery action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorRule {
    AssigneeDriver,
    AssigneeDriverOrStaff,
    Staff,
}

impl ActorRule {
    /// Whether an actor with `role` passes, given whether they are the assignee
    pub fn admits(&self, role: Role, is_assignee: bool) -> bool {
        let driver_ok = role == Role::Driver && is_assignee;
        match self {
            ActorRule::AssigneeDriver => driver_ok,
            ActorRule::AssigneeDriverOrStaff => driver_ok || role.is_staff_or_admin(),
            ActorRule::Staff => role.is_staff_or_admin(),
        }
    }
}

impl DeliveryAction {
    pub const ALL: [DeliveryAction; 5] = [
        DeliveryAction::Pickup,
        DeliveryAction::Transit,
        DeliveryAction::Complete,
        DeliveryAction::Cancel,
        DeliveryAction::Delete,
    ];

    /// Statuses the action applies to
    pub fn sources(&self) -> &'static [DeliveryStatus] {
        match self {
            DeliveryAction::Pickup | DeliveryAction::Cancel => &[DeliveryStatus::Assigned],
            DeliveryAction::Transit => &[DeliveryStatus::PickedUp],
            DeliveryAction::Complete => &[DeliveryStatus::InTransit],
            DeliveryAction::Delete => &[DeliveryStatus::Delivered, DeliveryStatus::Cancelled],
        }
    }

    /// Resulting status; `None` for deletion
    pub fn target(&self) -> Option<DeliveryStatus> {
        match self {
            DeliveryAction::Pickup => Some(DeliveryStatus::PickedUp),
            DeliveryAction::Transit => Some(DeliveryStatus::InTransit),
            DeliveryAction::Complete => Some(DeliveryStatus::Delivered),
            DeliveryAction::Cancel => Some(DeliveryStatus::Cancelled),
            DeliveryAction::Delete => None,
        }
    }

    pub fn actors(&self) -> ActorRule {
        match self {
            DeliveryAction::Pickup | DeliveryAction::Transit | DeliveryAction::Complete => {
                ActorRule::AssigneeDriver
            }
            DeliveryAction::Cancel => ActorRule::AssigneeDriverOrStaff,
            DeliveryAction::Delete => ActorRule::Staff,
        }
    }

    /// Trailing path segment of `PUT deliveries/{id}/{segment}`
    pub fn path_segment(&self) -> Option<&'static str> {
        match self {
            DeliveryAction::Pickup => Some("pickup"),
            DeliveryAction::Transit => Some("in-transit"),
            DeliveryAction::Complete => Some("complete"),
            DeliveryAction::Cancel => Some("cancel"),
            DeliveryAction::Delete => None,
        }
    }

    pub fn applies_to(&self, status: DeliveryStatus) -> bool {
        self.sources().contains(&status)
    }

    /// Find the action moving `from` to `to`
    pub fn between(from: DeliveryStatus, to: DeliveryStatus) -> Option<DeliveryAction> {
        Self::ALL
            .into_iter()
            .find(|a| a.target() == Some(to) && a.applies_to(from))
    }

    /// Check the action against the current status and return the next one
    /// (`None` when the record is removed)
    pub fn apply(&self, from: DeliveryStatus) -> AppResult<Option<DeliveryStatus>> {
        if !self.applies_to(from) {
            let code = match self {
                DeliveryAction::Delete => ErrorCode::DeliveryNotFinished,
                _ => ErrorCode::DeliveryInvalidTransition,
            };
            return Err(AppError::with_message(
                code,
                format!("Cannot {} a delivery that is {}", self.verb(), from),
            )
            .with_detail("status", from.as_str()));
        }
        Ok(self.target())
    }

    pub fn verb(&self) -> &'static str {
        match self {
            DeliveryAction::Pickup => "pick up",
            DeliveryAction::Transit => "dispatch",
            DeliveryAction::Complete => "complete",
            DeliveryAction::Cancel => "cancel",
            DeliveryAction::Delete => "delete",
        }
    }

    pub fn effects(&self) -> Vec<Effect> {
        match self {
            DeliveryAction::Pickup => vec![
                Effect::DonationStatus(DonationStatus::InTransit),
                Effect::RefetchRequired,
            ],
            DeliveryAction::Complete => vec![
                Effect::DonationStatus(DonationStatus::Delivered),
                Effect::DriverReleased,
                Effect::RefetchRequired,
            ],
            DeliveryAction::Cancel => vec![
                Effect::DonationStatus(DonationStatus::Collected),
                Effect::DriverReleased,
                Effect::RefetchRequired,
            ],
            DeliveryAction::Delete => vec![
                Effect::DonationStatus(DonationStatus::Collected),
                Effect::RefetchRequired,
            ],
            DeliveryAction::Transit => vec![Effect::RefetchRequired],
        }
    }
}

/// Deleting only removes finished records
pub fn check_deletable(delivery: &Delivery) -> AppResult<()> {
    DeliveryAction::Delete.apply(delivery.status).map(|_| ())
}

/// Preconditions for creating a delivery.
///
/// `existing` is every delivery known for the donation. Returns the
/// implied effects on success.
pub fn check_creation(
    donation: &Donation,
    driver: &Driver,
    recipient: &Recipient,
    existing: &[Delivery],
) -> AppResult<Vec<Effect>> {
    // 1. Donation must be collected (never rejected or already moving)
    match donation.status {
        DonationStatus::Collected => {}
        other => {
            return Err(AppError::new(ErrorCode::DeliveryDonationNotCollected)
                .with_detail("donation_status", other.as_str()));
        }
    }

    // 2. At most one active delivery per donation
    if let Some(active) = existing
        .iter()
        .find(|d| d.donation_id == donation.id && d.status.is_active())
    {
        return Err(AppError::new(ErrorCode::DeliveryAlreadyActive).with_detail("delivery_id", active.id));
    }

    // 3. Driver must be free
    if !driver.is_available {
        return Err(AppError::new(ErrorCode::DriverUnavailable).with_detail("driver_id", driver.id));
    }

    // 4. Recipient must be active
    if !recipient.is_active {
        return Err(AppError::new(ErrorCode::RecipientInactive).with_detail("recipient_id", recipient.id));
    }

    Ok(vec![
        Effect::DonationStatus(DonationStatus::Assigned),
        Effect::RefetchRequired,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipientType;

    fn delivery(id: i64, donation_id: i64, status: DeliveryStatus) -> Delivery {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "donationId": donation_id,
            "driverId": 1,
            "recipientId": 1,
            "status": status,
        }))
        .unwrap()
    }

    fn donation(status: DonationStatus) -> Donation {
        serde_json::from_value(serde_json::json!({"id": 7, "name": "Rice", "status": status})).unwrap()
    }

    fn driver(available: bool) -> Driver {
        serde_json::from_value(serde_json::json!({"id": 3, "name": "Sam", "isAvailable": available}))
            .unwrap()
    }

    fn recipient(active: bool) -> Recipient {
        Recipient {
            id: 2,
            name: "Shelter".into(),
            recipient_type: RecipientType::Shelter,
            address: None,
            contact_person: None,
            phone: None,
            email: None,
            is_active: active,
        }
    }

    #[test]
    fn test_forward_chain() {
        let mut status = DeliveryStatus::Assigned;
        for action in [DeliveryAction::Pickup, DeliveryAction::Transit, DeliveryAction::Complete] {
            status = action.apply(status).unwrap().unwrap();
        }
        assert_eq!(status, DeliveryStatus::Delivered);
        assert_eq!(DeliveryAction::Delete.apply(status).unwrap(), None);
    }

    #[test]
    fn test_no_skips_or_rollbacks() {
        assert!(DeliveryAction::Complete.apply(DeliveryStatus::Assigned).is_err());
        assert!(DeliveryAction::Transit.apply(DeliveryStatus::Assigned).is_err());
        assert!(DeliveryAction::Cancel.apply(DeliveryStatus::PickedUp).is_err());
        assert!(DeliveryAction::between(DeliveryStatus::Delivered, DeliveryStatus::InTransit).is_none());
        assert_eq!(
            DeliveryAction::between(DeliveryStatus::PickedUp, DeliveryStatus::InTransit),
            Some(DeliveryAction::Transit)
        );
    }

    #[test]
    fn test_terminal_only_allow_delete() {
        for status in [DeliveryStatus::Delivered, DeliveryStatus::Cancelled] {
            for action in DeliveryAction::ALL {
                assert_eq!(action.apply(status).is_ok(), action == DeliveryAction::Delete);
            }
        }
        let err = check_deletable(&delivery(1, 7, DeliveryStatus::InTransit)).unwrap_err();
        assert_eq!(err.code, ErrorCode::DeliveryNotFinished);
    }

    #[test]
    fn test_actor_rules() {
        assert!(DeliveryAction::Pickup.actors().admits(Role::Driver, true));
        assert!(!DeliveryAction::Pickup.actors().admits(Role::Driver, false));
        assert!(!DeliveryAction::Pickup.actors().admits(Role::Staff, false));
        assert!(DeliveryAction::Cancel.actors().admits(Role::Staff, false));
        assert!(DeliveryAction::Cancel.actors().admits(Role::Driver, true));
        assert!(DeliveryAction::Delete.actors().admits(Role::Admin, false));
        assert!(!DeliveryAction::Delete.actors().admits(Role::Driver, true));
        for action in DeliveryAction::ALL {
            assert!(!action.actors().admits(Role::Donor, true));
        }
    }

    #[test]
    fn test_creation_preconditions() {
        let effects = check_creation(&donation(DonationStatus::Collected), &driver(true), &recipient(true), &[])
            .unwrap();
        assert_eq!(
            effects,
            vec![Effect::DonationStatus(DonationStatus::Assigned), Effect::RefetchRequired]
        );

        let err = check_creation(&donation(DonationStatus::Rejected), &driver(true), &recipient(true), &[])
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DeliveryDonationNotCollected);

        let existing = [delivery(1, 7, DeliveryStatus::PickedUp)];
        let err = check_creation(&donation(DonationStatus::Collected), &driver(true), &recipient(true), &existing)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DeliveryAlreadyActive);

        let finished = [delivery(1, 7, DeliveryStatus::Cancelled), delivery(2, 8, DeliveryStatus::Assigned)];
        assert!(check_creation(&donation(DonationStatus::Collected), &driver(true), &recipient(true), &finished).is_ok());

        let err = check_creation(&donation(DonationStatus::Collected), &driver(false), &recipient(true), &[])
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DriverUnavailable);

        let err = check_creation(&donation(DonationStatus::Collected), &driver(true), &recipient(false), &[])
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RecipientInactive);
    }

    #[test]
    fn test_effects_follow_backend_side_effects() {
        assert_eq!(
            DeliveryAction::Delete.effects(),
            vec![Effect::DonationStatus(DonationStatus::Collected), Effect::RefetchRequired]
        );
        assert!(DeliveryAction::Cancel.effects().contains(&Effect::DriverReleased));
        assert!(DeliveryAction::Complete.effects().contains(&Effect::DriverReleased));
        for action in [DeliveryAction::Pickup, DeliveryAction::Transit, DeliveryAction::Delete] {
            assert!(!action.effects().contains(&Effect::DriverReleased));
        }
    }

    #[test]
    fn test_path_segments() {
        assert_eq!(DeliveryAction::Transit.path_segment(), Some("in-transit"));
        assert_eq!(DeliveryAction::Delete.path_segment(), None);
    }
}
