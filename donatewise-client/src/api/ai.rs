use shared::models::{
    AiResponse, ContentType, FoodTips, FoodTipsGenerateRequest, ItemsRequest, SavedContent,
    ThankYouGenerateRequest, ThankYouRequest,
};

use crate::{ClientError, ClientResult, DonateWiseClient, HttpClient};

/// `ai/*`: generated descriptions, food tips and thank-you notes
pub struct AiApi<'a, H: HttpClient> {
    client: &'a DonateWiseClient<H>,
}

impl<'a, H: HttpClient> AiApi<'a, H> {
    pub(crate) fn new(client: &'a DonateWiseClient<H>) -> Self {
        Self { client }
    }

    pub async fn generate_description(&self, items: Vec<String>) -> ClientResult<String> {
        let resp: AiResponse = self.client.post("ai/generate-description", &ItemsRequest { items }).await?;
        content_of(resp)
    }

    /// Tips for the items, not saved
    pub async fn food_tips(&self, items: Vec<String>) -> ClientResult<FoodTips> {
        let resp: AiResponse = self.client.post("ai/food-tips", &ItemsRequest { items }).await?;
        content_of(resp).map(|c| FoodTips::parse(&c))
    }

    /// Generate and store tips for a donation
    pub async fn save_food_tips(&self, donation_id: i64, items: Vec<String>) -> ClientResult<FoodTips> {
        let req = FoodTipsGenerateRequest { donation_id, items };
        let resp: AiResponse = self.client.post("ai/food-tips/save", &req).await?;
        content_of(resp).map(|c| FoodTips::parse(&c))
    }

    pub async fn saved_food_tips(&self, donation_id: i64) -> ClientResult<Option<SavedContent>> {
        self.saved(&format!("ai/food-tips/{}", donation_id)).await
    }

    pub async fn thank_you(&self, req: &ThankYouRequest) -> ClientResult<String> {
        let resp: AiResponse = self.client.post("ai/thank-you", req).await?;
        content_of(resp)
    }

    pub async fn save_thank_you(&self, req: &ThankYouGenerateRequest) -> ClientResult<String> {
        let resp: AiResponse = self.client.post("ai/thank-you/save", req).await?;
        content_of(resp)
    }

    pub async fn saved_thank_you(&self, donation_id: i64) -> ClientResult<Option<SavedContent>> {
        self.saved(&format!("ai/thank-you/{}", donation_id)).await
    }

    /// Thank-you notes addressed to the logged-in donor
    pub async fn my_thank_you_messages(&self) -> ClientResult<Vec<SavedContent>> {
        let all: Vec<SavedContent> = self.client.get("ai/thank-you/my").await?;
        Ok(all.into_iter().filter_map(SavedContent::into_option).collect())
    }

    pub async fn exists(&self, donation_id: i64, content_type: ContentType) -> ClientResult<bool> {
        self.client
            .get(&format!("ai/exists/{}/{}", donation_id, content_type))
            .await
    }

    /// Saved content, where both a 404 and `exists: false` mean absent
    async fn saved(&self, path: &str) -> ClientResult<Option<SavedContent>> {
        let found: Option<SavedContent> = self.client.get_optional(path).await?;
        Ok(found.and_then(SavedContent::into_option))
    }
}

/// Unwrap a generation response; `success: false` carries the reason in `error`
fn content_of(resp: AiResponse) -> ClientResult<String> {
    if !resp.success {
        return Err(ClientError::Api {
            status: 200,
            message: resp.error.unwrap_or_else(|| "Content generation failed".to_string()),
        });
    }
    resp.content
        .ok_or_else(|| ClientError::InvalidResponse("Missing generated content".into()))
}
