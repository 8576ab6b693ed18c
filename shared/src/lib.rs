//! Shared types for the DonateWise client
//!
//! Entity definitions, status lifecycles, the authorization predicate,
//! view projections and form validation. No I/O lives here; the HTTP
//! client crate builds on these types.

pub mod authz;
pub mod client;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod projection;
pub mod token;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use authz::{Action, Actor, Decision, DenyReason, Target, authorize};
pub use error::{AppError, AppResult, ErrorCode};
pub use lifecycle::Effect;
