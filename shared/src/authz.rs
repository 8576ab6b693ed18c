//! Authorization predicate
//!
//! `authorize(actor, action, target)` decides whether an action may be
//! attempted. The client uses it to gate controls and to refuse a request
//! before sending it; the backend still checks every call.
//!
//! # Rules
//!
//! 1. ADMIN has every right STAFF has
//! 2. DONOR changes no status, it only submits donations and reads its own content
//! 3. DRIVER acts only on deliveries assigned to it
//! 4. Transition tables and guards come from [`crate::lifecycle`]

use crate::error::{AppError, ErrorCode};
use crate::lifecycle::{self, DeliveryAction, DonationContext};
use crate::models::{Delivery, Donation, DonationStatus, Driver, Recipient, Role, User};

/// Who is asking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub username: String,
    pub role: Role,
    /// Driver profile id, known for DRIVER actors once loaded
    pub driver_id: Option<i64>,
    /// Center run by a STAFF actor, once loaded
    pub center_id: Option<i64>,
}

impl Actor {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
            driver_id: None,
            center_id: None,
        }
    }

    pub fn with_driver(mut self, driver_id: i64) -> Self {
        self.driver_id = Some(driver_id);
        self
    }

    pub fn with_center(mut self, center_id: i64) -> Self {
        self.center_id = Some(center_id);
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// STAFF or ADMIN
    pub fn is_staff(&self) -> bool {
        self.role.is_staff_or_admin()
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Actor::new(user.username.clone(), user.role)
    }
}

/// What the actor wants to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move a donation to the given status
    ChangeDonationStatus(DonationStatus),
    CreateDonation,
    DeleteDonation,
    /// Assign a donation to a collection center
    AssignDonationToCenter,
    CreateDelivery,
    Delivery(DeliveryAction),
    /// Create, update or delete collection centers
    ManageCenters,
    /// Create, update or deactivate recipients
    ManageRecipients,
    SetDriverAvailability,
    AssignDriverToCenter,
    SaveGeneratedContent,
    ListOwnThankYouMessages,
}

/// What the action is applied to
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    /// Nothing specific; role rules only
    None,
    Donation {
        donation: &'a Donation,
        ctx: DonationContext,
    },
    /// Donation about to be created, with the center it goes to.
    /// `donor_id` is set when recording on behalf of another donor.
    NewDonation {
        center_id: Option<i64>,
        donor_id: Option<i64>,
    },
    Delivery(&'a Delivery),
    /// Delivery about to be created
    NewDelivery {
        donation: &'a Donation,
        driver: &'a Driver,
        recipient: &'a Recipient,
        existing: &'a [Delivery],
    },
    Driver(&'a Driver),
}

/// Why an action was refused
#[derive(Debug, Clone, PartialEq)]
pub enum DenyReason {
    /// The actor's role may never perform this action
    RoleNotPermitted(Role),
    /// No transition exists from the current status
    InvalidTransition(AppError),
    /// The delivery belongs to another driver
    NotAssignee,
    /// The record belongs to another driver or center
    NotOwner,
    /// The transition exists but its guard failed
    GuardFailed(AppError),
    /// A non-transition precondition failed
    PreconditionFailed(AppError),
    /// The target does not fit the action
    WrongTarget,
}

impl DenyReason {
    pub fn code(&self) -> ErrorCode {
        match self {
            DenyReason::RoleNotPermitted(_) => ErrorCode::RoleRequired,
            DenyReason::NotAssignee => ErrorCode::NotAssignee,
            DenyReason::NotOwner => ErrorCode::PermissionDenied,
            DenyReason::InvalidTransition(e)
            | DenyReason::GuardFailed(e)
            | DenyReason::PreconditionFailed(e) => e.code,
            DenyReason::WrongTarget => ErrorCode::InvalidRequest,
        }
    }
}

impl From<DenyReason> for AppError {
    fn from(reason: DenyReason) -> Self {
        match reason {
            DenyReason::RoleNotPermitted(role) => AppError::with_message(
                ErrorCode::RoleRequired,
                format!("{} accounts cannot do this", role),
            )
            .with_detail("role", role.as_str()),
            DenyReason::NotAssignee => AppError::new(ErrorCode::NotAssignee),
            DenyReason::NotOwner => {
                AppError::permission_denied("This record belongs to someone else")
            }
            DenyReason::InvalidTransition(e)
            | DenyReason::GuardFailed(e)
            | DenyReason::PreconditionFailed(e) => e,
            DenyReason::WrongTarget => {
                AppError::with_message(ErrorCode::InvalidRequest, "Action does not apply to this record")
            }
        }
    }
}

/// Outcome of [`authorize`]
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn into_result(self) -> Result<(), AppError> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => Err(reason.into()),
        }
    }
}

fn deny(reason: DenyReason) -> Decision {
    Decision::Deny(reason)
}

fn staff_only(actor: &Actor) -> Decision {
    if actor.is_staff() {
        Decision::Allow
    } else {
        deny(DenyReason::RoleNotPermitted(actor.role))
    }
}

/// Decide whether `actor` may perform `action` on `target`
pub fn authorize(actor: &Actor, action: Action, target: Target<'_>) -> Decision {
    let decision = match action {
        Action::ChangeDonationStatus(to) => donation_status(actor, to, target),
        Action::CreateDonation => create_donation(actor, target),
        Action::Delivery(delivery_action) => delivery(actor, delivery_action, target),
        Action::CreateDelivery => create_delivery(actor, target),
        Action::SetDriverAvailability => driver_availability(actor, target),
        Action::ListOwnThankYouMessages => match actor.role {
            Role::Donor => Decision::Allow,
            role => deny(DenyReason::RoleNotPermitted(role)),
        },
        Action::DeleteDonation
        | Action::AssignDonationToCenter
        | Action::ManageCenters
        | Action::ManageRecipients
        | Action::AssignDriverToCenter
        | Action::SaveGeneratedContent => staff_only(actor),
    };

    if let Decision::Deny(reason) = &decision {
        tracing::debug!(
            username = %actor.username,
            role = %actor.role,
            ?action,
            ?reason,
            "action denied"
        );
    }
    decision
}

fn donation_status(actor: &Actor, to: DonationStatus, target: Target<'_>) -> Decision {
    // 1. Role
    if !actor.is_staff() {
        return deny(DenyReason::RoleNotPermitted(actor.role));
    }
    let Target::Donation { donation, ctx } = target else {
        return deny(DenyReason::WrongTarget);
    };

    // 2. Center scope: staff act on their own center's donations
    if let (Role::Staff, Some(own), Some(center)) = (actor.role, actor.center_id, donation.center_id()) {
        if own != center {
            return deny(DenyReason::NotOwner);
        }
    }

    // 3. Table, then guard
    let Some(transition) = lifecycle::DonationTransition::between(donation.status, to) else {
        return deny(DenyReason::InvalidTransition(AppError::with_message(
            ErrorCode::DonationInvalidTransition,
            format!("Cannot change donation from {} to {}", donation.status, to),
        )));
    };
    match lifecycle::check_guard(transition, &ctx) {
        Ok(()) => Decision::Allow,
        Err(e) => deny(DenyReason::GuardFailed(e)),
    }
}

fn create_donation(actor: &Actor, target: Target<'_>) -> Decision {
    let (center_id, on_behalf) = match target {
        Target::NewDonation { center_id, donor_id } => (center_id, donor_id.is_some()),
        Target::None => (None, false),
        _ => return deny(DenyReason::WrongTarget),
    };
    match (actor.role, on_behalf) {
        (Role::Donor, false) => Decision::Allow,
        (Role::Donor, true) => deny(DenyReason::NotOwner),
        // Staff-driven entry names the donor and a center up front
        (Role::Staff | Role::Admin, true) if center_id.is_some() => Decision::Allow,
        (Role::Staff | Role::Admin, true) => deny(DenyReason::PreconditionFailed(AppError::new(
            ErrorCode::DonationCenterRequired,
        ))),
        (Role::Staff | Role::Admin, false) => deny(DenyReason::PreconditionFailed(AppError::required(
            "donorId",
            "Choose the donor this donation is recorded for",
        ))),
        (Role::Driver, _) => deny(DenyReason::RoleNotPermitted(Role::Driver)),
    }
}

fn delivery(actor: &Actor, action: DeliveryAction, target: Target<'_>) -> Decision {
    let rule = action.actors();

    // 1. Role, assuming the actor were the assignee
    if !rule.admits(actor.role, true) {
        return deny(DenyReason::RoleNotPermitted(actor.role));
    }
    let Target::Delivery(delivery) = target else {
        return deny(DenyReason::WrongTarget);
    };

    // 2. Table
    if let Err(e) = action.apply(delivery.status) {
        return deny(DenyReason::InvalidTransition(e));
    }

    // 3. Assignee
    let is_assignee = actor.driver_id.is_some_and(|id| delivery.is_assigned_to(id));
    if !rule.admits(actor.role, is_assignee) {
        return deny(DenyReason::NotAssignee);
    }
    Decision::Allow
}

fn create_delivery(actor: &Actor, target: Target<'_>) -> Decision {
    if !actor.is_staff() {
        return deny(DenyReason::RoleNotPermitted(actor.role));
    }
    match target {
        Target::None => Decision::Allow,
        Target::NewDelivery {
            donation,
            driver,
            recipient,
            existing,
        } => match lifecycle::check_creation(donation, driver, recipient, existing) {
            Ok(_) => Decision::Allow,
            Err(e) => deny(DenyReason::PreconditionFailed(e)),
        },
        _ => deny(DenyReason::WrongTarget),
    }
}

fn driver_availability(actor: &Actor, target: Target<'_>) -> Decision {
    match (actor.role, target) {
        (Role::Staff | Role::Admin, Target::Driver(_) | Target::None) => Decision::Allow,
        // `None` is the driver's own profile
        (Role::Driver, Target::None) => Decision::Allow,
        (Role::Driver, Target::Driver(driver)) if actor.driver_id == Some(driver.id) => Decision::Allow,
        (Role::Driver, Target::Driver(_)) => deny(DenyReason::NotOwner),
        (Role::Donor, _) => deny(DenyReason::RoleNotPermitted(Role::Donor)),
        _ => deny(DenyReason::WrongTarget),
    }
}
