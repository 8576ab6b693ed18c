//! Recipient Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recipient organization kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipientType {
    Shelter,
    FoodBank,
    CommunityCenter,
    Ngo,
    Orphanage,
    OldAgeHome,
    #[serde(other)]
    Other,
}

impl RecipientType {
    /// Path segment for `recipients/type/{type}`
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipientType::Shelter => "SHELTER",
            RecipientType::FoodBank => "FOOD_BANK",
            RecipientType::CommunityCenter => "COMMUNITY_CENTER",
            RecipientType::Ngo => "NGO",
            RecipientType::Orphanage => "ORPHANAGE",
            RecipientType::OldAgeHome => "OLD_AGE_HOME",
            RecipientType::Other => "OTHER",
        }
    }
}

impl fmt::Display for RecipientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Organization eligible to receive delivered donations.
///
/// Never hard-deleted: `DELETE recipients/{id}` flips `is_active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub recipient_type: RecipientType,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Create / update recipient payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientInput {
    pub name: String,
    #[serde(rename = "type")]
    pub recipient_type: RecipientType,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
