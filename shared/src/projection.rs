//! Derived view projections
//!
//! Pure functions over fetched records. Nothing here touches the network
//! or mutates its input.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{CollectionCenter, Delivery, DeliveryStatus, Donation, DonationStatus};

/// Center utilization in whole percent; 0 when the center has no capacity
pub fn capacity_percentage(center: &CollectionCenter) -> i64 {
    if center.max_capacity <= 0 {
        return 0;
    }
    (center.current_load as f64 / center.max_capacity as f64 * 100.0).round() as i64
}

/// Colour band of a utilization gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityTier {
    Green,
    Yellow,
    Red,
}

impl CapacityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapacityTier::Green => "green",
            CapacityTier::Yellow => "yellow",
            CapacityTier::Red => "red",
        }
    }
}

impl fmt::Display for CapacityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Red from 90, yellow from 70, green below
pub fn capacity_tier(pct: i64) -> CapacityTier {
    if pct >= 90 {
        CapacityTier::Red
    } else if pct >= 70 {
        CapacityTier::Yellow
    } else {
        CapacityTier::Green
    }
}

/// Mean of the per-center percentages, rounded; 0 for no centers
pub fn average_capacity_percentage(centers: &[CollectionCenter]) -> i64 {
    if centers.is_empty() {
        return 0;
    }
    let sum: i64 = centers.iter().map(capacity_percentage).sum();
    (sum as f64 / centers.len() as f64).round() as i64
}

/// Percent change between two counts, rounded to one decimal.
///
/// 100 when the previous count is zero and the current one is not,
/// 0 when both are zero.
pub fn growth_rate(this_month: usize, last_month: usize) -> f64 {
    if last_month == 0 {
        return if this_month > 0 { 100.0 } else { 0.0 };
    }
    let change = (this_month as f64 - last_month as f64) / last_month as f64 * 100.0;
    (change * 10.0).round() / 10.0
}

/// Month-over-month growth of donation counts relative to `now`.
///
/// Donations without a date are not counted.
pub fn month_over_month_growth(donations: &[Donation], now: NaiveDateTime) -> f64 {
    let this_month = (now.year(), now.month());
    let last_month = if now.month() == 1 {
        (now.year() - 1, 12)
    } else {
        (now.year(), now.month() - 1)
    };

    let (mut current, mut previous) = (0usize, 0usize);
    for date in donations.iter().filter_map(|d| d.donation_date) {
        let key = (date.year(), date.month());
        if key == this_month {
            current += 1;
        } else if key == last_month {
            previous += 1;
        }
    }
    growth_rate(current, previous)
}

/// Position in the progress indicator `PENDING, COLLECTED, DELIVERED, PROCESSED`.
///
/// REJECTED is off-track (`-1`). Delivery-driven states sit on the
/// COLLECTED step until the delivery completes.
pub fn status_step_index(status: DonationStatus) -> i32 {
    match status {
        DonationStatus::Pending => 0,
        DonationStatus::Collected | DonationStatus::Assigned | DonationStatus::InTransit => 1,
        DonationStatus::Delivered => 2,
        DonationStatus::Processed => 3,
        DonationStatus::Rejected => -1,
    }
}

/// Whether to draw the step indicator; a rejection banner replaces it
pub fn show_progress(status: DonationStatus) -> bool {
    status_step_index(status) >= 0
}

/// Dashboard counters over donations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationCounts {
    pub total: usize,
    pub pending: usize,
    /// COLLECTED plus the delivery-driven states
    pub collected: usize,
    pub delivered: usize,
    pub rejected: usize,
    pub processed: usize,
}

impl DonationCounts {
    pub fn from_donations(donations: &[Donation]) -> Self {
        donations.iter().fold(Self::default(), |mut counts, d| {
            counts.total += 1;
            match d.status {
                DonationStatus::Pending => counts.pending += 1,
                DonationStatus::Collected | DonationStatus::Assigned | DonationStatus::InTransit => {
                    counts.collected += 1
                }
                DonationStatus::Delivered => counts.delivered += 1,
                DonationStatus::Rejected => counts.rejected += 1,
                DonationStatus::Processed => counts.processed += 1,
            }
            counts
        })
    }
}

/// Dashboard counters over deliveries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryCounts {
    pub total: usize,
    pub assigned: usize,
    pub picked_up: usize,
    pub in_transit: usize,
    pub delivered: usize,
    pub cancelled: usize,
}

impl DeliveryCounts {
    pub fn from_deliveries(deliveries: &[Delivery]) -> Self {
        deliveries.iter().fold(Self::default(), |mut counts, d| {
            counts.total += 1;
            match d.status {
                DeliveryStatus::Assigned => counts.assigned += 1,
                DeliveryStatus::PickedUp => counts.picked_up += 1,
                DeliveryStatus::InTransit => counts.in_transit += 1,
                DeliveryStatus::Delivered => counts.delivered += 1,
                DeliveryStatus::Cancelled => counts.cancelled += 1,
            }
            counts
        })
    }

    /// Not yet delivered or cancelled
    pub fn active(&self) -> usize {
        self.assigned + self.picked_up + self.in_transit
    }
}
