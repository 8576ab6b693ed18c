//! Auth request/response types exchanged with the backend

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Signup request. Built from a validated [`crate::validation::SignupForm`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    /// Center created together with a STAFF account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_center: Option<CenterSignup>,
    /// Driver profile created together with a DRIVER account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_info: Option<DriverSignup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterSignup {
    pub name: String,
    pub location: String,
    pub max_capacity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverSignup {
    pub name: String,
    pub phone: String,
    pub vehicle_number: Option<String>,
    pub vehicle_type: Option<String>,
}

/// Login / signup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
