//! Company domain — the profile used as generation context, and website parsing.

#[cfg(feature = "http")]
pub mod client;

use crate::poll::{JobSnapshot, PollOutcome};
use crate::shared::{Envelope, JobState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─── Preferences ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentLength {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingStyle {
    Educational,
    Conversational,
    Professional,
    Casual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Friendly,
    Formal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<ContentLength>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<WritingStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_examples: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_statistics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_custom_templates: Option<bool>,
}

// ─── CompanyInfo ─────────────────────────────────────────────────────────────

/// Company description passed to the generator, and the partial body of
/// `PUT /company`. Every field is optional; unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_preferences: Option<ContentPreferences>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expertise: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(rename = "socialMedia", skip_serializing_if = "Option::is_none")]
    pub social_media: Option<HashMap<String, String>>,
}

impl CompanyInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_target_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = Some(audience.into());
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }
}

/// Stored company profile: the known fields plus whatever else the server keeps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyData {
    #[serde(flatten)]
    pub info: CompanyInfo,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// `GET /company`, `PUT /company`
pub type CompanyResponse = Envelope<CompanyData>;

// ─── Website parsing ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct CompanyParsingRequest {
    pub website_url: String,
}

/// State of the most recent website-parsing job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsingProgress {
    pub status: JobState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Extracted profile, once parsing completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CompanyData>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// `POST /company/parse`
pub type CompanyParsingResponse = Envelope<ParsingProgress>;

/// `GET /company/parsing-status`
pub type CompanyParsingStatus = Envelope<ParsingProgress>;

impl JobSnapshot for CompanyParsingStatus {
    fn outcome(&self) -> PollOutcome {
        match &self.data {
            Some(d) if self.success && d.status.is_completed() => PollOutcome::Completed,
            Some(d) if self.success && d.status.is_failed() => PollOutcome::Failed,
            _ => PollOutcome::Pending,
        }
    }
}
