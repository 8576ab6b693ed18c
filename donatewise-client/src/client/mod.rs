// donatewise-client/src/client/mod.rs
// Client facade and transports

mod donatewise_client;
pub mod http;
pub mod oneshot;

pub use donatewise_client::DonateWiseClient;
pub use http::{ApiRequest, ApiResponse, HttpClient, NetworkHttpClient};
pub use oneshot::OneshotHttpClient;
