//! Per-resource API surfaces
//!
//! Each surface borrows the client: `client.donations().list().await`.
//! Paths are relative to the API root.

mod ai;
mod centers;
mod deliveries;
mod donations;
mod donors;
mod drivers;
mod items;
mod recipients;

pub use ai::AiApi;
pub use centers::CentersApi;
pub use deliveries::DeliveriesApi;
pub use donations::DonationsApi;
pub use donors::DonorsApi;
pub use drivers::DriversApi;
pub use items::ItemsApi;
pub use recipients::RecipientsApi;

use crate::{DonateWiseClient, HttpClient};

impl<H: HttpClient> DonateWiseClient<H> {
    pub fn ai(&self) -> AiApi<'_, H> {
        AiApi::new(self)
    }

    pub fn centers(&self) -> CentersApi<'_, H> {
        CentersApi::new(self)
    }

    pub fn deliveries(&self) -> DeliveriesApi<'_, H> {
        DeliveriesApi::new(self)
    }

    pub fn donations(&self) -> DonationsApi<'_, H> {
        DonationsApi::new(self)
    }

    pub fn donors(&self) -> DonorsApi<'_, H> {
        DonorsApi::new(self)
    }

    pub fn drivers(&self) -> DriversApi<'_, H> {
        DriversApi::new(self)
    }

    pub fn items(&self) -> ItemsApi<'_, H> {
        ItemsApi::new(self)
    }

    pub fn recipients(&self) -> RecipientsApi<'_, H> {
        RecipientsApi::new(self)
    }
}
