use shared::models::{Donor, DonorInput};

use crate::{ClientResult, DonateWiseClient, HttpClient};

/// `donors/*`
pub struct DonorsApi<'a, H: HttpClient> {
    client: &'a DonateWiseClient<H>,
}

impl<'a, H: HttpClient> DonorsApi<'a, H> {
    pub(crate) fn new(client: &'a DonateWiseClient<H>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<Donor>> {
        self.client.get("donors").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Donor> {
        self.client.get(&format!("donors/{}", id)).await
    }

    /// Donor profile of the logged-in user; `None` until one is created
    pub async fn me(&self) -> ClientResult<Option<Donor>> {
        self.client.get_optional("donors/me").await
    }

    pub async fn create(&self, input: &DonorInput) -> ClientResult<Donor> {
        self.client.post("donors", input).await
    }

    pub async fn update(&self, id: i64, input: &DonorInput) -> ClientResult<Donor> {
        self.client.put(&format!("donors/{}", id), input).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("donors/{}", id)).await
    }
}
