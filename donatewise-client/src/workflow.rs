//! Guarded workflows
//!
//! Every operation here resolves the actor, runs the authorization
//! predicate against freshly fetched records, and only then calls the
//! backend. A refusal returns [`ClientError::Denied`] without a request
//! being sent. Successful operations report the side effects the backend
//! is expected to have applied, so views know what to refetch.

use shared::AppError;
use shared::authz::{Action, Actor, Decision, Target, authorize};
use shared::lifecycle::{DeliveryAction, DonationContext, DonationTransition, Effect};
use shared::models::{
    CenterInput, CollectionCenter, CreateDeliveryRequest, Delivery, Donation, DonationCreate,
    DonationStatus, Donor, DonorInput, Driver, ItemDraft, Recipient, RecipientInput, Role,
    SavedContent, ThankYouGenerateRequest,
};
use shared::validation;

use crate::{ClientError, ClientResult, DonateWiseClient, HttpClient};

/// Result of a workflow step and the effects it implies
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub value: T,
    pub effects: Vec<Effect>,
}

impl<T> Outcome<T> {
    fn new(value: T, effects: Vec<Effect>) -> Self {
        Self { value, effects }
    }

    pub fn needs_refetch(&self) -> bool {
        self.effects.contains(&Effect::RefetchRequired)
    }
}

fn check(actor: &Actor, action: Action, target: Target<'_>) -> ClientResult<()> {
    match authorize(actor, action, target) {
        Decision::Allow => Ok(()),
        Decision::Deny(reason) => {
            let err = AppError::from(reason);
            tracing::debug!(code = %err.code, reason = %err.message, "refused before sending");
            Err(ClientError::Denied(err))
        }
    }
}

impl<H: HttpClient> DonateWiseClient<H> {
    // ========== Donations ==========

    /// Submit the caller's own donation with its items.
    ///
    /// 1. Validate the form locally
    /// 2. Find the donor profile, creating a placeholder on first use
    /// 3. Create the donation as PENDING
    /// 4. Create the items one by one against the new donation id
    ///
    /// Staff record donations through [`Self::submit_donation_for`].
    pub async fn submit_donation(&self, name: &str, items: Vec<ItemDraft>) -> ClientResult<Donation> {
        validation::validate_donation_form(name, &items)?;
        let actor = self.actor().await?;
        check(
            &actor,
            Action::CreateDonation,
            Target::NewDonation { center_id: None, donor_id: None },
        )?;

        let donor = self.find_or_create_donor(&actor.username).await?;
        self.create_with_items(donor.id, name, items, None).await
    }

    /// Record a donation on behalf of an existing donor, into the staff
    /// user's center. The donor is looked up first, so an unknown id fails
    /// before anything is written.
    pub async fn submit_donation_for(
        &self,
        donor_id: i64,
        name: &str,
        items: Vec<ItemDraft>,
    ) -> ClientResult<Donation> {
        validation::validate_donation_form(name, &items)?;
        let actor = self.actor().await?;
        let center_id = if actor.is_staff() { actor.center_id } else { None };
        check(
            &actor,
            Action::CreateDonation,
            Target::NewDonation { center_id, donor_id: Some(donor_id) },
        )?;

        let donor = self.donors().get(donor_id).await?;
        self.create_with_items(donor.id, name, items, center_id).await
    }

    async fn create_with_items(
        &self,
        donor_id: i64,
        name: &str,
        items: Vec<ItemDraft>,
        center_id: Option<i64>,
    ) -> ClientResult<Donation> {
        let mut donation = self
            .donations()
            .create_for_donor(donor_id, &DonationCreate::pending(name.trim()))
            .await?;
        tracing::info!(donation_id = donation.id, donor_id, items = items.len(), "donation created");

        // Items need the donation id, so they go after it, in order
        let mut created = Vec::with_capacity(items.len());
        for draft in items {
            let item = self.items().create(&draft.into_create(donation.id, center_id)).await?;
            created.push(item);
        }
        donation.donation_items = created;
        Ok(donation)
    }

    async fn find_or_create_donor(&self, username: &str) -> ClientResult<Donor> {
        if let Some(donor) = self.donors().me().await? {
            return Ok(donor);
        }
        tracing::info!(%username, "creating donor profile");
        self.donors().create(&DonorInput::placeholder(username)).await
    }

    /// Accept a pending donation into the staff user's center.
    ///
    /// Center assignment and the status change happen in one backend call.
    pub async fn accept_donation(&self, donation_id: i64) -> ClientResult<Outcome<Donation>> {
        let actor = self.actor().await?;
        let donation = self.donations().get(donation_id).await?;
        let ctx = DonationContext::for_donation(&donation, &[]).atomic_accept();
        check(
            &actor,
            Action::ChangeDonationStatus(DonationStatus::Collected),
            Target::Donation { donation: &donation, ctx },
        )?;

        let updated = self.donations().accept(donation_id).await?;
        tracing::info!(donation_id, "donation accepted");
        Ok(Outcome::new(updated, DonationTransition::Accept.effects()))
    }

    pub async fn reject_donation(&self, donation_id: i64) -> ClientResult<Outcome<Donation>> {
        let actor = self.actor().await?;
        let donation = self.donations().get(donation_id).await?;
        let ctx = DonationContext::for_donation(&donation, &[]);
        check(
            &actor,
            Action::ChangeDonationStatus(DonationStatus::Rejected),
            Target::Donation { donation: &donation, ctx },
        )?;

        let updated = self.donations().reject(donation_id).await?;
        tracing::info!(donation_id, "donation rejected");
        Ok(Outcome::new(updated, DonationTransition::Reject.effects()))
    }

    /// Generic status change through `PUT donations/{id}/status`
    pub async fn change_donation_status(
        &self,
        donation_id: i64,
        to: DonationStatus,
    ) -> ClientResult<Outcome<Donation>> {
        let actor = self.actor().await?;
        let donation = self.donations().get(donation_id).await?;

        // Linked deliveries only matter for the COLLECTED -> DELIVERED guard
        let deliveries = if to == DonationStatus::Delivered {
            self.deliveries().list().await?
        } else {
            Vec::new()
        };
        let ctx = DonationContext::for_donation(&donation, &deliveries);
        check(
            &actor,
            Action::ChangeDonationStatus(to),
            Target::Donation { donation: &donation, ctx },
        )?;

        let effects = DonationTransition::between(donation.status, to)
            .map(|t| t.effects())
            .unwrap_or_default();
        let updated = self.donations().update_status(donation_id, to).await?;
        tracing::info!(donation_id, from = %donation.status, %to, "donation status changed");
        Ok(Outcome::new(updated, effects))
    }

    pub async fn delete_donation(&self, donation_id: i64) -> ClientResult<()> {
        let actor = self.actor().await?;
        check(&actor, Action::DeleteDonation, Target::None)?;
        self.donations().delete(donation_id).await
    }

    pub async fn assign_donation_to_center(
        &self,
        center_id: i64,
        donation_id: i64,
    ) -> ClientResult<CollectionCenter> {
        let actor = self.actor().await?;
        check(&actor, Action::AssignDonationToCenter, Target::None)?;
        self.centers().assign_donation(center_id, donation_id).await
    }

    // ========== Deliveries ==========

    /// Create a delivery for a collected donation.
    ///
    /// Donation, driver, recipient and existing deliveries are fetched
    /// together; creation is refused locally when any precondition fails.
    pub async fn create_delivery(&self, request: &CreateDeliveryRequest) -> ClientResult<Outcome<Delivery>> {
        let actor = self.actor().await?;
        check(&actor, Action::CreateDelivery, Target::None)?;

        let (donations, drivers, recipients, deliveries) =
            (self.donations(), self.drivers(), self.recipients(), self.deliveries());
        let (donation, driver, recipient, existing) = tokio::try_join!(
            donations.get(request.donation_id),
            drivers.get(request.driver_id),
            recipients.get(request.recipient_id),
            deliveries.list(),
        )?;
        check(
            &actor,
            Action::CreateDelivery,
            Target::NewDelivery {
                donation: &donation,
                driver: &driver,
                recipient: &recipient,
                existing: &existing,
            },
        )?;
        let effects = shared::lifecycle::check_creation(&donation, &driver, &recipient, &existing)?;

        let delivery = self.deliveries().create(request).await?;
        tracing::info!(
            delivery_id = delivery.id,
            donation_id = request.donation_id,
            driver_id = request.driver_id,
            "delivery created"
        );
        Ok(Outcome::new(delivery, effects))
    }

    /// Pickup, transit, complete, cancel or delete an existing delivery
    pub async fn advance_delivery(&self, delivery_id: i64, action: DeliveryAction) -> ClientResult<Outcome<Delivery>> {
        let actor = self.actor().await?;
        let delivery = self.load_delivery_for(&actor, delivery_id).await?;
        check(&actor, Action::Delivery(action), Target::Delivery(&delivery))?;

        let updated = self.deliveries().transition(delivery_id, action).await?;
        tracing::info!(delivery_id, action = action.verb(), status = %updated.status, "delivery updated");
        Ok(Outcome::new(updated, action.effects()))
    }

    /// Drivers read their deliveries through their own list
    async fn load_delivery_for(&self, actor: &Actor, delivery_id: i64) -> ClientResult<Delivery> {
        if actor.role != Role::Driver {
            return self.deliveries().get(delivery_id).await;
        }
        self.deliveries()
            .mine()
            .await?
            .into_iter()
            .find(|d| d.id == delivery_id)
            .ok_or_else(|| ClientError::NotFound(format!("Delivery {} not found", delivery_id)))
    }

    // ========== Drivers ==========

    pub async fn set_my_availability(&self, available: bool) -> ClientResult<Driver> {
        let actor = self.actor().await?;
        check(&actor, Action::SetDriverAvailability, Target::None)?;
        self.drivers().set_my_availability(available).await
    }

    pub async fn set_driver_availability(&self, driver_id: i64, available: bool) -> ClientResult<Driver> {
        let actor = self.actor().await?;
        let driver = self.drivers().get(driver_id).await?;
        check(&actor, Action::SetDriverAvailability, Target::Driver(&driver))?;
        self.drivers().set_availability(driver_id, available).await
    }

    pub async fn assign_driver_to_center(&self, driver_id: i64, center_id: i64) -> ClientResult<Driver> {
        let actor = self.actor().await?;
        check(&actor, Action::AssignDriverToCenter, Target::None)?;
        self.drivers().assign_center(driver_id, center_id).await
    }

    // ========== Centers and recipients ==========

    pub async fn create_center(&self, input: &CenterInput) -> ClientResult<CollectionCenter> {
        validation::validate_required_text(&input.name, "name")?;
        validation::validate_required_text(&input.location, "location")?;
        if input.max_capacity < validation::MIN_CENTER_CAPACITY {
            return Err(AppError::new(shared::ErrorCode::CenterInvalidCapacity)
                .with_detail("field", "maxCapacity")
                .into());
        }
        let actor = self.actor().await?;
        check(&actor, Action::ManageCenters, Target::None)?;
        self.centers().create(input).await
    }

    pub async fn delete_center(&self, center_id: i64) -> ClientResult<()> {
        let actor = self.actor().await?;
        check(&actor, Action::ManageCenters, Target::None)?;
        self.centers().delete(center_id).await
    }

    pub async fn create_recipient(&self, input: &RecipientInput) -> ClientResult<Recipient> {
        validation::validate_required_text(&input.name, "name")?;
        validation::validate_required_text(&input.address, "address")?;
        let actor = self.actor().await?;
        check(&actor, Action::ManageRecipients, Target::None)?;
        self.recipients().create(input).await
    }

    pub async fn deactivate_recipient(&self, recipient_id: i64) -> ClientResult<()> {
        let actor = self.actor().await?;
        check(&actor, Action::ManageRecipients, Target::None)?;
        self.recipients().deactivate(recipient_id).await
    }

    // ========== Generated content ==========

    pub async fn save_thank_you(&self, request: &ThankYouGenerateRequest) -> ClientResult<String> {
        let actor = self.actor().await?;
        check(&actor, Action::SaveGeneratedContent, Target::None)?;
        self.ai().save_thank_you(request).await
    }

    pub async fn my_thank_you_messages(&self) -> ClientResult<Vec<SavedContent>> {
        let actor = self.actor().await?;
        check(&actor, Action::ListOwnThankYouMessages, Target::None)?;
        self.ai().my_thank_you_messages().await
    }
}
