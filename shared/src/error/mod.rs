//! Error system
//!
//! - [`ErrorCode`]: Codes for failures decided before a request is sent
//! - [`AppError`]: Error with code, message and details
//! - [`ApiErrorBody`]: Wire shape of backend error responses
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::DonationEmpty);
//! assert_eq!(err.to_string(), "At least one item is required");
//!
//! let err = AppError::required("name", "Please enter a donation name");
//! assert_eq!(err.field(), Some("name"));
//! ```

mod codes;
mod types;

pub use codes::ErrorCode;
pub use types::{ApiErrorBody, AppError, AppResult};
