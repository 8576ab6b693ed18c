//! Generated Content Model
//!
//! Text produced by the backend's language-model integration. The client
//! treats it as opaque, apart from the best-effort food-tips parse.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of saved generated content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    FoodTips,
    ThankYou,
}

impl ContentType {
    /// Path segment for `ai/exists/{donationId}/{contentType}`
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::FoodTips => "FOOD_TIPS",
            ContentType::ThankYou => "THANK_YOU",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generation result envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiResponse {
    #[serde(default)]
    pub content: Option<String>,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl AiResponse {
    pub fn ok(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            content: None,
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Persisted content for a donation. `exists == false` means nothing saved
/// yet; every other field is then empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedContent {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub donation_id: Option<i64>,
    #[serde(default)]
    pub donation_name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub content_type: Option<ContentType>,
    #[serde(default)]
    pub generated_by_username: Option<String>,
    #[serde(default)]
    pub center_name: Option<String>,
    #[serde(default)]
    pub generated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub exists: bool,
}

impl SavedContent {
    /// `Some(self)` when content was saved, else `None`
    pub fn into_option(self) -> Option<SavedContent> {
        self.exists.then_some(self)
    }
}

/// Sections of a structured food-tips answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodTipsSections {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub storage_tips: String,
    #[serde(default)]
    pub shelf_life: String,
    #[serde(default)]
    pub spoilage_signs: String,
    #[serde(default)]
    pub handling_tips: String,
}

impl FoodTipsSections {
    /// No known section carried any text
    pub fn is_empty(&self) -> bool {
        [
            &self.summary,
            &self.storage_tips,
            &self.shelf_life,
            &self.spoilage_signs,
            &self.handling_tips,
        ]
        .iter()
        .all(|s| s.trim().is_empty())
    }
}

/// Food-handling tips, structured when the model answered in JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoodTips {
    Structured(FoodTipsSections),
    PlainText(String),
}

impl FoodTips {
    /// Parse generated text. Anything that is not a JSON object with at
    /// least one non-empty known section is kept verbatim as plain text.
    pub fn parse(content: &str) -> FoodTips {
        match serde_json::from_str::<FoodTipsSections>(content.trim()) {
            Ok(sections) if !sections.is_empty() => FoodTips::Structured(sections),
            Ok(_) => {
                tracing::debug!("food tips object has no known sections, keeping plain text");
                FoodTips::PlainText(content.to_string())
            }
            Err(e) => {
                tracing::debug!(error = %e, "food tips are not structured, keeping plain text");
                FoodTips::PlainText(content.to_string())
            }
        }
    }

    /// Headline text: the summary section, or the whole plain text
    pub fn summary(&self) -> &str {
        match self {
            FoodTips::Structured(sections) => &sections.summary,
            FoodTips::PlainText(text) => text,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, FoodTips::Structured(_))
    }
}

/// `POST ai/food-tips` and `POST ai/generate-description` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsRequest {
    pub items: Vec<String>,
}

/// `POST ai/food-tips/save` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodTipsGenerateRequest {
    pub donation_id: i64,
    pub items: Vec<String>,
}

/// `POST ai/thank-you` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThankYouRequest {
    pub donor_name: String,
    pub items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// `POST ai/thank-you/save` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThankYouGenerateRequest {
    pub donation_id: i64,
    pub donor_name: String,
    pub items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}
