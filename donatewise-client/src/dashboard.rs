//! Dashboard loaders
//!
//! Each loader fires its independent fetches concurrently and keeps every
//! section's outcome separately, so one failing endpoint leaves the rest of
//! the view populated.

use chrono::NaiveDateTime;
use shared::models::{
    CollectionCenter, Delivery, Donation, DonationStatus, Donor, Driver, SavedContent,
};
use shared::projection::{self, CapacityTier, DeliveryCounts, DonationCounts};

use crate::{ClientResult, DonateWiseClient, HttpClient};

/// Log a failed section and pass the result through
fn section<T>(name: &str, result: ClientResult<T>) -> ClientResult<T> {
    if let Err(e) = &result {
        tracing::warn!(section = name, error = %e, "dashboard section failed to load");
    }
    result
}

/// Staff view: own center, its pending queue and its full history
#[derive(Debug)]
pub struct StaffDashboard {
    pub center: ClientResult<Option<CollectionCenter>>,
    pub pending: ClientResult<Vec<Donation>>,
    pub all: ClientResult<Vec<Donation>>,
}

impl StaffDashboard {
    pub fn counts(&self) -> Option<DonationCounts> {
        self.all.as_ref().ok().map(|d| DonationCounts::from_donations(d))
    }

    pub fn capacity(&self) -> Option<(i64, CapacityTier)> {
        let center = self.center.as_ref().ok()?.as_ref()?;
        let pct = projection::capacity_percentage(center);
        Some((pct, projection::capacity_tier(pct)))
    }
}

/// Driver view: profile, all assigned deliveries and those awaiting pickup
#[derive(Debug)]
pub struct DriverDashboard {
    pub profile: ClientResult<Option<Driver>>,
    pub deliveries: ClientResult<Vec<Delivery>>,
    pub pending: ClientResult<Vec<Delivery>>,
}

impl DriverDashboard {
    pub fn counts(&self) -> Option<DeliveryCounts> {
        self.deliveries
            .as_ref()
            .ok()
            .map(|d| DeliveryCounts::from_deliveries(d))
    }

    /// Deliveries the driver is currently working on
    pub fn active(&self) -> Vec<&Delivery> {
        match &self.deliveries {
            Ok(all) => all.iter().filter(|d| d.status.is_active()).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn is_available(&self) -> Option<bool> {
        match &self.profile {
            Ok(Some(driver)) => Some(driver.is_available),
            _ => None,
        }
    }
}

/// Admin view: platform-wide totals
#[derive(Debug)]
pub struct AdminDashboard {
    pub donations: ClientResult<Vec<Donation>>,
    pub donors: ClientResult<Vec<Donor>>,
    pub centers: ClientResult<Vec<CollectionCenter>>,
}

impl AdminDashboard {
    pub fn counts(&self) -> Option<DonationCounts> {
        self.donations
            .as_ref()
            .ok()
            .map(|d| DonationCounts::from_donations(d))
    }

    pub fn total_donors(&self) -> Option<usize> {
        self.donors.as_ref().ok().map(Vec::len)
    }

    pub fn total_centers(&self) -> Option<usize> {
        self.centers.as_ref().ok().map(Vec::len)
    }

    /// Donation growth of the month containing `now` over the previous one
    pub fn growth(&self, now: NaiveDateTime) -> Option<f64> {
        self.donations
            .as_ref()
            .ok()
            .map(|d| projection::month_over_month_growth(d, now))
    }

    pub fn average_capacity(&self) -> Option<i64> {
        self.centers
            .as_ref()
            .ok()
            .map(|c| projection::average_capacity_percentage(c))
    }

    /// Centers with their fill percentage and tier, fullest first
    pub fn center_capacity(&self) -> Vec<(&CollectionCenter, i64, CapacityTier)> {
        let Ok(centers) = &self.centers else {
            return Vec::new();
        };
        let mut rows: Vec<_> = centers
            .iter()
            .map(|c| {
                let pct = projection::capacity_percentage(c);
                (c, pct, projection::capacity_tier(pct))
            })
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }
}

/// Donor view: profile, own donations and thank-you notes
#[derive(Debug)]
pub struct DonorDashboard {
    pub profile: ClientResult<Option<Donor>>,
    pub donations: ClientResult<Vec<Donation>>,
    pub thank_you: ClientResult<Vec<SavedContent>>,
}

impl DonorDashboard {
    pub fn counts(&self) -> Option<DonationCounts> {
        self.donations
            .as_ref()
            .ok()
            .map(|d| DonationCounts::from_donations(d))
    }

    /// Donations still waiting for a center to accept them
    pub fn awaiting_review(&self) -> usize {
        match &self.donations {
            Ok(all) => all.iter().filter(|d| d.status == DonationStatus::Pending).count(),
            Err(_) => 0,
        }
    }
}

impl<H: HttpClient> DonateWiseClient<H> {
    pub async fn staff_dashboard(&self) -> StaffDashboard {
        let centers = self.centers();
        let donations = self.donations();
        let (center, pending, all) = tokio::join!(
            centers.me(),
            donations.center_pending(),
            donations.center_all(),
        );
        StaffDashboard {
            center: section("center", center),
            pending: section("pending_donations", pending),
            all: section("center_donations", all),
        }
    }

    pub async fn driver_dashboard(&self) -> DriverDashboard {
        let drivers = self.drivers();
        let deliveries = self.deliveries();
        let (profile, mine, pending) = tokio::join!(
            drivers.me(),
            deliveries.mine(),
            deliveries.mine_pending(),
        );
        if let Ok(Some(driver)) = &profile {
            self.session().set_driver_id(driver.id).await;
        }
        DriverDashboard {
            profile: section("driver_profile", profile),
            deliveries: section("deliveries", mine),
            pending: section("pending_deliveries", pending),
        }
    }

    pub async fn admin_dashboard(&self) -> AdminDashboard {
        let (donations_api, donors_api, centers_api) = (self.donations(), self.donors(), self.centers());
        let (donations, donors, centers) = tokio::join!(
            donations_api.list(),
            donors_api.list(),
            centers_api.list(),
        );
        AdminDashboard {
            donations: section("donations", donations),
            donors: section("donors", donors),
            centers: section("centers", centers),
        }
    }

    pub async fn donor_dashboard(&self) -> DonorDashboard {
        let (donors, donations_api, ai) = (self.donors(), self.donations(), self.ai());
        let (profile, donations, thank_you) = tokio::join!(
            donors.me(),
            donations_api.mine(),
            ai.my_thank_you_messages(),
        );
        DonorDashboard {
            profile: section("donor_profile", profile),
            donations: section("donations", donations),
            thank_you: section("thank_you", thank_you),
        }
    }
}
