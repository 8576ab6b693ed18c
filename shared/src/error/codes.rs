//! Error codes for the DonateWise client core
//!
//! Error codes are organized by numeric range:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Donation errors
//! - 4xxx: Delivery errors
//! - 5xxx: Center / driver / recipient errors
//!
//! Only locally decided failures carry a code. The backend answers with
//! plain text messages, see [`ApiErrorBody`](super::ApiErrorBody).

use std::fmt;

/// Error code of a locally decided failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Request does not fit the record it targets
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// Token is invalid
    TokenInvalid = 1004,
    /// Passwords entered at signup differ
    PasswordMismatch = 1005,
    /// Password too short
    PasswordTooShort = 1006,

    // ==================== 2xxx: Permission ====================
    /// Record belongs to someone else
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Action is scoped to the assigned driver
    NotAssignee = 2003,

    // ==================== 3xxx: Donation ====================
    /// Transition not present in the donation table
    DonationInvalidTransition = 3002,
    /// Donation has no collection center
    DonationCenterRequired = 3003,
    /// Donation still has an active delivery
    DonationHasActiveDelivery = 3004,
    /// Donation has no items
    DonationEmpty = 3005,

    // ==================== 4xxx: Delivery ====================
    /// Transition not present in the delivery table
    DeliveryInvalidTransition = 4002,
    /// Donation is not COLLECTED
    DeliveryDonationNotCollected = 4003,
    /// Donation already referenced by an active delivery
    DeliveryAlreadyActive = 4004,
    /// Only finished deliveries can be removed
    DeliveryNotFinished = 4005,

    // ==================== 5xxx: Center / Driver / Recipient ====================
    /// Invalid capacity value
    CenterInvalidCapacity = 5003,
    /// Driver is not available for assignment
    DriverUnavailable = 5102,
    /// Recipient is inactive
    RecipientInactive = 5202,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field missing",

            // Auth
            ErrorCode::TokenInvalid => "Invalid token",
            ErrorCode::PasswordMismatch => "Passwords do not match",
            ErrorCode::PasswordTooShort => "Password must be at least 6 characters",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Role required",
            ErrorCode::NotAssignee => "Delivery is assigned to another driver",

            // Donation
            ErrorCode::DonationInvalidTransition => "Donation status change not allowed",
            ErrorCode::DonationCenterRequired => "Donation must be assigned to a collection center",
            ErrorCode::DonationHasActiveDelivery => "Donation has an active delivery",
            ErrorCode::DonationEmpty => "At least one item is required",

            // Delivery
            ErrorCode::DeliveryInvalidTransition => "Delivery status change not allowed",
            ErrorCode::DeliveryDonationNotCollected => {
                "Donation must be in COLLECTED status to create delivery"
            }
            ErrorCode::DeliveryAlreadyActive => "Donation already has an active delivery",
            ErrorCode::DeliveryNotFinished => "Only delivered or cancelled deliveries can be removed",

            // Center / Driver / Recipient
            ErrorCode::CenterInvalidCapacity => "Maximum capacity must be at least 1",
            ErrorCode::DriverUnavailable => "Driver is not available",
            ErrorCode::RecipientInactive => "Recipient is not active",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
