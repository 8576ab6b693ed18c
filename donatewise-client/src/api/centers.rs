use shared::models::{CenterInput, CollectionCenter};

use crate::{ClientResult, DonateWiseClient, HttpClient};

/// `centers/*`
pub struct CentersApi<'a, H: HttpClient> {
    client: &'a DonateWiseClient<H>,
}

impl<'a, H: HttpClient> CentersApi<'a, H> {
    pub(crate) fn new(client: &'a DonateWiseClient<H>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<CollectionCenter>> {
        self.client.get("centers").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<CollectionCenter> {
        self.client.get(&format!("centers/{}", id)).await
    }

    /// Center run by the logged-in staff user, `None` when there is none
    pub async fn me(&self) -> ClientResult<Option<CollectionCenter>> {
        self.client.get_optional("centers/me").await
    }

    pub async fn create(&self, input: &CenterInput) -> ClientResult<CollectionCenter> {
        self.client.post("centers", input).await
    }

    pub async fn update(&self, id: i64, input: &CenterInput) -> ClientResult<CollectionCenter> {
        self.client.put(&format!("centers/{}", id), input).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("centers/{}", id)).await
    }

    /// Attach a donation to a center; returns the updated center
    pub async fn assign_donation(&self, center_id: i64, donation_id: i64) -> ClientResult<CollectionCenter> {
        self.client
            .put_empty(&format!("centers/{}/assign/{}", center_id, donation_id))
            .await
    }
}
