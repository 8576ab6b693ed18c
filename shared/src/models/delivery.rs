//! Delivery Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delivery lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Assigned,
    PickedUp,
    InTransit,
    Delivered,
    Cancelled,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 5] = [
        DeliveryStatus::Assigned,
        DeliveryStatus::PickedUp,
        DeliveryStatus::InTransit,
        DeliveryStatus::Delivered,
        DeliveryStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Assigned => "ASSIGNED",
            DeliveryStatus::PickedUp => "PICKED_UP",
            DeliveryStatus::InTransit => "IN_TRANSIT",
            DeliveryStatus::Delivered => "DELIVERED",
            DeliveryStatus::Cancelled => "CANCELLED",
        }
    }

    /// DELIVERED and CANCELLED permit nothing but deletion
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeliveryStatus::Delivered | DeliveryStatus::Cancelled)
    }

    /// Still occupying its donation and driver
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        DeliveryStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == upper)
            .ok_or_else(|| format!("unknown delivery status: {}", s))
    }
}

/// Logistics task moving a collected donation to a recipient.
///
/// Driver and recipient are nullable on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub id: i64,
    pub donation_id: i64,
    #[serde(default)]
    pub driver_id: Option<i64>,
    #[serde(default)]
    pub recipient_id: Option<i64>,
    pub status: DeliveryStatus,
    #[serde(default)]
    pub scheduled_pickup_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub notes: Option<String>,

    // Display fields, denormalized by the backend
    #[serde(default)]
    pub donation_name: Option<String>,
    #[serde(default)]
    pub from_center_id: Option<i64>,
    #[serde(default)]
    pub from_center_name: Option<String>,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub driver_phone: Option<String>,
    #[serde(default)]
    pub recipient_name: Option<String>,
    #[serde(default)]
    pub recipient_address: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub actual_pickup_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub delivered_time: Option<NaiveDateTime>,
}

impl Delivery {
    pub fn is_assigned_to(&self, driver_id: i64) -> bool {
        self.driver_id == Some(driver_id)
    }
}

/// Create delivery payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeliveryRequest {
    pub donation_id: i64,
    pub driver_id: i64,
    pub recipient_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_pickup_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
