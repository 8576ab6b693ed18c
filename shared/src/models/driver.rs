//! Driver Model

use serde::{Deserialize, Serialize};

use super::UserSummary;

/// Delivery partner. `is_available` gates eligibility for new deliveries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub collection_center_id: Option<i64>,
    #[serde(default)]
    pub collection_center_name: Option<String>,
    #[serde(default)]
    pub user: Option<UserSummary>,
}

impl Driver {
    pub fn belongs_to_center(&self, center_id: i64) -> bool {
        self.collection_center_id == Some(center_id)
    }
}

/// Profile update payload. `None` fields are left unchanged by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
}
