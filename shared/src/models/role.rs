//! Role and User Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role. Determines which pages are reachable and which
/// transitions an actor may trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Donor,
    Staff,
    Driver,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Donor, Role::Staff, Role::Driver, Role::Admin];

    /// Wire name (`"STAFF"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Donor => "DONOR",
            Role::Staff => "STAFF",
            Role::Driver => "DRIVER",
            Role::Admin => "ADMIN",
        }
    }

    /// Granted-authority name used in token claims (`"ROLE_STAFF"`)
    pub fn authority(&self) -> &'static str {
        match self {
            Role::Donor => "ROLE_DONOR",
            Role::Staff => "ROLE_STAFF",
            Role::Driver => "ROLE_DRIVER",
            Role::Admin => "ROLE_ADMIN",
        }
    }

    /// Resolve a role from a comma-separated authority list.
    ///
    /// Priority is ADMIN > STAFF > DRIVER; anything else is a donor.
    pub fn from_authorities(authorities: &str) -> Role {
        let granted: Vec<Role> = authorities
            .split(',')
            .filter_map(|a| a.trim().parse().ok())
            .collect();
        [Role::Admin, Role::Staff, Role::Driver]
            .into_iter()
            .find(|r| granted.contains(r))
            .unwrap_or(Role::Donor)
    }

    /// STAFF or ADMIN: the roles that manage donations and centers
    pub fn is_staff_or_admin(&self) -> bool {
        matches!(self, Role::Staff | Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    /// Accepts both `STAFF` and `ROLE_STAFF`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let name = upper.strip_prefix("ROLE_").unwrap_or(&upper);
        match name {
            "DONOR" => Ok(Role::Donor),
            "STAFF" => Ok(Role::Staff),
            "DRIVER" => Ok(Role::Driver),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// Authenticated user as seen by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub role: Role,
}

/// User summary embedded in center and driver records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}
