//! Wire types for publication requests and responses.

use crate::domain::company::CompanyInfo;
use crate::domain::publication::Publication;
use crate::domain::subscription::UserLimits;
use crate::poll::{JobSnapshot, PollOutcome};
use crate::shared::{Envelope, JobState, Pagination, SessionId};
use serde::{Deserialize, Serialize};

// ─── Listing ─────────────────────────────────────────────────────────────────

/// Aggregate counters returned alongside publication listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationStats {
    pub total: u32,
    pub published: u32,
    pub draft: u32,
    pub archived: u32,
    pub this_month: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_quality_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_content_length: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationsPage {
    pub publications: Vec<Publication>,
    pub pagination: Pagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<PublicationStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limits: Option<UserLimits>,
}

/// `GET /publications`
pub type PublicationsResponse = Envelope<PublicationsPage>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationData {
    pub publication: Publication,
}

/// Single-publication endpoints (get, create, update, publish, archive).
pub type PublicationResponse = Envelope<PublicationData>;

// ─── Download ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct DownloadRequest {
    pub format: super::DownloadFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadLink {
    pub url: String,
}

/// `POST /publications/:id/download`
pub type DownloadResponse = Envelope<DownloadLink>;

// ─── Generation ──────────────────────────────────────────────────────────────

/// Body of `POST /publications/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_info: Option<CompanyInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            company_info: None,
            keywords: None,
        }
    }

    pub fn with_company_info(mut self, info: CompanyInfo) -> Self {
        self.company_info = Some(info);
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }
}

/// Job handle returned when a generation starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStarted {
    pub publication_id: String,
    pub session_id: SessionId,
    pub status: JobState,
}

/// `POST /publications/generate`
pub type GenerationResponse = Envelope<GenerationStarted>;

/// One status snapshot of a generation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationProgress {
    pub publication_id: String,
    pub session_id: SessionId,
    pub status: JobState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Server clock value, passed through as sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// `GET /publications/generation-status/:sessionId`
pub type GenerationStatus = Envelope<GenerationProgress>;

impl JobSnapshot for GenerationStatus {
    fn outcome(&self) -> PollOutcome {
        match &self.data {
            Some(d) if self.success && d.status.is_completed() => PollOutcome::Completed,
            Some(d) if self.success && d.status.is_failed() => PollOutcome::Failed,
            _ => PollOutcome::Pending,
        }
    }
}

// ─── Bulk generation ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_info: Option<CompanyInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// Body of `POST /publications/bulk-generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkGenerationRequest {
    pub prompts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<BulkSettings>,
}

impl BulkGenerationRequest {
    pub fn new<I, S>(prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompts: prompts.into_iter().map(Into::into).collect(),
            settings: None,
        }
    }

    pub fn with_settings(mut self, settings: BulkSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkPublicationRef {
    pub id: String,
    pub session_id: SessionId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkGenerationStarted {
    pub total_prompts: u32,
    pub success_count: u32,
    pub error_count: u32,
    pub publications: Vec<BulkPublicationRef>,
}

impl BulkGenerationStarted {
    /// Publication ids to pass to the bulk status check.
    pub fn publication_ids(&self) -> Vec<String> {
        self.publications.iter().map(|p| p.id.clone()).collect()
    }
}

/// `POST /publications/bulk-generate`
pub type BulkGenerationResponse = Envelope<BulkGenerationStarted>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BulkStatusRequest {
    pub publication_ids: Vec<String>,
}

/// Status of one publication inside a bulk job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationJobStatus {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
    pub status: JobState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(rename = "created_at", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Aggregate status of a set of publications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkStatus {
    pub publication_statuses: Vec<PublicationJobStatus>,
    pub total_checked: u32,
    pub completed_count: u32,
    pub failed_count: u32,
    pub in_progress_count: u32,
    pub created_count: u32,
}

impl BulkStatus {
    /// True once no job out of `total` is still pending.
    pub fn is_resolved(&self, total: usize) -> bool {
        (self.completed_count as usize + self.failed_count as usize) >= total
    }
}

/// `POST /publications/bulk-status`
pub type BulkGenerationStatus = Envelope<BulkStatus>;

/// A bulk status response paired with the number of jobs being tracked.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkSnapshot {
    pub tracked: usize,
    pub status: BulkGenerationStatus,
}

impl JobSnapshot for BulkSnapshot {
    fn outcome(&self) -> PollOutcome {
        let data = match &self.status.data {
            Some(d) if self.status.success => d,
            _ => return PollOutcome::Pending,
        };
        if !data.is_resolved(self.tracked) {
            return PollOutcome::Pending;
        }
        if self.tracked > 0 && data.completed_count == 0 {
            PollOutcome::Failed
        } else {
            PollOutcome::Completed
        }
    }
}
