use shared::models::{Driver, DriverUpdate};

use crate::{ClientResult, DonateWiseClient, HttpClient};

/// `drivers/*`
pub struct DriversApi<'a, H: HttpClient> {
    client: &'a DonateWiseClient<H>,
}

impl<'a, H: HttpClient> DriversApi<'a, H> {
    pub(crate) fn new(client: &'a DonateWiseClient<H>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<Driver>> {
        self.client.get("drivers").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Driver> {
        self.client.get(&format!("drivers/{}", id)).await
    }

    /// Driver profile of the logged-in user
    pub async fn me(&self) -> ClientResult<Option<Driver>> {
        self.client.get_optional("drivers/me").await
    }

    pub async fn by_center(&self, center_id: i64) -> ClientResult<Vec<Driver>> {
        self.client.get(&format!("drivers/center/{}", center_id)).await
    }

    pub async fn available_for_center(&self, center_id: i64) -> ClientResult<Vec<Driver>> {
        self.client.get(&format!("drivers/center/{}/available", center_id)).await
    }

    /// Body is a bare JSON boolean
    pub async fn set_availability(&self, id: i64, available: bool) -> ClientResult<Driver> {
        self.client.put(&format!("drivers/{}/availability", id), &available).await
    }

    pub async fn set_my_availability(&self, available: bool) -> ClientResult<Driver> {
        self.client.put("drivers/me/availability", &available).await
    }

    pub async fn assign_center(&self, driver_id: i64, center_id: i64) -> ClientResult<Driver> {
        self.client
            .put_empty(&format!("drivers/{}/assign-center/{}", driver_id, center_id))
            .await
    }

    pub async fn update(&self, id: i64, update: &DriverUpdate) -> ClientResult<Driver> {
        self.client.put(&format!("drivers/{}", id), update).await
    }
}
