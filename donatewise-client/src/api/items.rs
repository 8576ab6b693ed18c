use shared::models::{DonationItem, DonationItemCreate};

use crate::{ClientResult, DonateWiseClient, HttpClient};

/// `donations/item/*`
pub struct ItemsApi<'a, H: HttpClient> {
    client: &'a DonateWiseClient<H>,
}

impl<'a, H: HttpClient> ItemsApi<'a, H> {
    pub(crate) fn new(client: &'a DonateWiseClient<H>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<DonationItem>> {
        self.client.get("donations/item").await
    }

    pub async fn by_donation(&self, donation_id: i64) -> ClientResult<Vec<DonationItem>> {
        self.client.get(&format!("donations/item/donation/{}", donation_id)).await
    }

    pub async fn create(&self, item: &DonationItemCreate) -> ClientResult<DonationItem> {
        self.client.post("donations/item", item).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("donations/item/{}", id)).await
    }
}
