//! Collection Center Model

use serde::{Deserialize, Serialize};

use super::UserSummary;

/// Physical site with bounded capacity that accepts donations.
///
/// `0 <= current_load <= max_capacity` is advisory here; the backend owns
/// the accounting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCenter {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub max_capacity: i64,
    #[serde(default)]
    pub current_load: i64,
    /// Staff account running the center
    #[serde(default, alias = "staffUser")]
    pub user: Option<UserSummary>,
}

impl CollectionCenter {
    /// Units left before the center is full, never negative
    pub fn remaining_capacity(&self) -> i64 {
        (self.max_capacity - self.current_load).max(0)
    }

    pub fn is_over_capacity(&self) -> bool {
        self.current_load > self.max_capacity
    }

    /// Whether `username` is the staff account of this center
    pub fn is_staffed_by(&self, username: &str) -> bool {
        self.user.as_ref().is_some_and(|u| u.username == username)
    }
}

/// Create / update center payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterInput {
    pub name: String,
    pub location: String,
    pub max_capacity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_load: Option<i64>,
}
