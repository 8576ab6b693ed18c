//! Donation and Donation Item Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{CollectionCenter, Donor};

/// Donation lifecycle status
///
/// `Assigned` and `InTransit` are set by the backend as side effects of the
/// linked delivery; no role triggers them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DonationStatus {
    Pending,
    Collected,
    Rejected,
    Assigned,
    InTransit,
    Delivered,
    Processed,
}

impl DonationStatus {
    pub const ALL: [DonationStatus; 7] = [
        DonationStatus::Pending,
        DonationStatus::Collected,
        DonationStatus::Rejected,
        DonationStatus::Assigned,
        DonationStatus::InTransit,
        DonationStatus::Delivered,
        DonationStatus::Processed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Pending => "PENDING",
            DonationStatus::Collected => "COLLECTED",
            DonationStatus::Rejected => "REJECTED",
            DonationStatus::Assigned => "ASSIGNED",
            DonationStatus::InTransit => "IN_TRANSIT",
            DonationStatus::Delivered => "DELIVERED",
            DonationStatus::Processed => "PROCESSED",
        }
    }

    /// REJECTED and PROCESSED accept no further transition
    pub fn is_terminal(&self) -> bool {
        matches!(self, DonationStatus::Rejected | DonationStatus::Processed)
    }

    /// Set only through delivery side effects
    pub fn is_delivery_driven(&self) -> bool {
        matches!(self, DonationStatus::Assigned | DonationStatus::InTransit)
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DonationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        DonationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == upper)
            .ok_or_else(|| format!("unknown donation status: {}", s))
    }
}

/// Donation batch offered by a donor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub donation_date: Option<NaiveDateTime>,
    pub status: DonationStatus,
    #[serde(default)]
    pub donor: Option<Donor>,
    /// Flat donor reference, sent by list endpoints instead of `donor`
    #[serde(default)]
    pub donor_id: Option<i64>,
    #[serde(default)]
    pub collection_center: Option<CollectionCenter>,
    #[serde(default)]
    pub donation_items: Vec<DonationItem>,
}

impl Donation {
    /// Donor id from either the embedded donor or the flat reference
    pub fn donor_ref(&self) -> Option<i64> {
        self.donor.as_ref().map(|d| d.id).or(self.donor_id)
    }

    pub fn center_id(&self) -> Option<i64> {
        self.collection_center.as_ref().map(|c| c.id)
    }

    pub fn has_center(&self) -> bool {
        self.collection_center.is_some()
    }

    /// Item names, used as prompt input for generated content
    pub fn item_names(&self) -> Vec<String> {
        self.donation_items
            .iter()
            .map(|i| i.item_name.clone())
            .collect()
    }
}

/// Create donation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationCreate {
    pub name: String,
    pub status: DonationStatus,
}

impl DonationCreate {
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DonationStatus::Pending,
        }
    }
}

/// Measurement unit of a donation item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Unit {
    Kg,
    Liters,
    Pieces,
    Boxes,
    /// Anything the backend sends that this client does not know
    #[serde(other)]
    Other,
}

/// Kind of goods in a donation item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Food,
    Grocery,
    HouseholdSupplies,
    #[serde(other)]
    Other,
}

/// One line of a donation. Quantity and unit are fixed after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationItem {
    pub id: i64,
    pub item_name: String,
    pub quantity: i32,
    pub unit: Unit,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub donation_id: i64,
    #[serde(default)]
    pub collection_center_id: Option<i64>,
}

/// Create donation item payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationItemCreate {
    pub item_name: String,
    pub quantity: i32,
    pub unit: Unit,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub donation_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_center_id: Option<i64>,
}

/// Item line as entered in the donation form, before a donation id exists
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub item_name: String,
    pub quantity: i32,
    pub unit: Unit,
    pub item_type: ItemType,
}

impl ItemDraft {
    pub fn into_create(self, donation_id: i64, center_id: Option<i64>) -> DonationItemCreate {
        DonationItemCreate {
            item_name: self.item_name.trim().to_string(),
            quantity: self.quantity,
            unit: self.unit,
            item_type: self.item_type,
            donation_id,
            collection_center_id: center_id,
        }
    }
}
