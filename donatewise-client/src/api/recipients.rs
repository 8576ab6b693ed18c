use shared::models::{Recipient, RecipientInput, RecipientType};

use crate::{ClientResult, DonateWiseClient, HttpClient};

/// `recipients/*`
pub struct RecipientsApi<'a, H: HttpClient> {
    client: &'a DonateWiseClient<H>,
}

impl<'a, H: HttpClient> RecipientsApi<'a, H> {
    pub(crate) fn new(client: &'a DonateWiseClient<H>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<Recipient>> {
        self.client.get("recipients").await
    }

    pub async fn active(&self) -> ClientResult<Vec<Recipient>> {
        self.client.get("recipients/active").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Recipient> {
        self.client.get(&format!("recipients/{}", id)).await
    }

    pub async fn by_type(&self, recipient_type: RecipientType) -> ClientResult<Vec<Recipient>> {
        self.client.get(&format!("recipients/type/{}", recipient_type)).await
    }

    pub async fn create(&self, input: &RecipientInput) -> ClientResult<Recipient> {
        self.client.post("recipients", input).await
    }

    pub async fn update(&self, id: i64, input: &RecipientInput) -> ClientResult<Recipient> {
        self.client.put(&format!("recipients/{}", id), input).await
    }

    /// Soft delete: the recipient is marked inactive
    pub async fn deactivate(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("recipients/{}", id)).await
    }
}
