//! Donor Model

use serde::{Deserialize, Serialize};

use super::UserSummary;

/// Donor profile. Created lazily: a DONOR user may exist without one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub user: Option<UserSummary>,
}

/// Create / update donor payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorInput {
    pub name: String,
    pub contact: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
}

impl DonorInput {
    /// Placeholder profile created on a donor's first submission
    pub fn placeholder(username: &str) -> Self {
        Self {
            name: username.to_string(),
            contact: "N/A".to_string(),
            location: "N/A".to_string(),
            user: Some(UserSummary {
                username: username.to_string(),
                ..Default::default()
            }),
        }
    }
}
