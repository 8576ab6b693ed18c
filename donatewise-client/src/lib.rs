//! DonateWise Client - typed REST client for the DonateWise backend
//!
//! Provides the session lifecycle, per-resource API surfaces, dashboard
//! loaders and guarded workflows on top of a pluggable HTTP transport:
//! [`NetworkHttpClient`] for a live server, [`OneshotHttpClient`] for an
//! in-process axum router.

pub mod api;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod scope;
pub mod session;
pub mod token_store;
pub mod workflow;

pub use client::{
    ApiRequest, ApiResponse, DonateWiseClient, HttpClient, NetworkHttpClient, OneshotHttpClient,
};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use scope::{LoadingFlag, LoadingGuard, ViewScope};
pub use session::{Session, SessionState};
pub use token_store::TokenStore;
pub use workflow::Outcome;

// Re-export shared types for convenience
pub use shared::authz::{Action, Actor, Decision, DenyReason};
pub use shared::lifecycle::{DeliveryAction, Effect};
pub use shared::models;
