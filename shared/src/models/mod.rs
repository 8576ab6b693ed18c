//! Data models
//!
//! Client-side copies of server-owned records. Every mutation is a round
//! trip to the backend followed by a re-fetch; nothing here is authoritative.
//! All IDs are `i64`, timestamps are zone-less `NaiveDateTime`.

pub mod ai;
pub mod center;
pub mod delivery;
pub mod donation;
pub mod donor;
pub mod driver;
pub mod recipient;
pub mod role;

// Re-exports
pub use ai::*;
pub use center::*;
pub use delivery::*;
pub use donation::*;
pub use donor::*;
pub use driver::*;
pub use recipient::*;
pub use role::*;
