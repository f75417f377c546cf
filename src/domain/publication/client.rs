//! Publications sub-client — CRUD, lifecycle, generation, and waiting on jobs.

use crate::client::ContentGemClient;
use crate::domain::publication::wire::{
    BulkGenerationRequest, BulkGenerationResponse, BulkGenerationStatus, BulkSnapshot,
    BulkStatusRequest, DownloadRequest, DownloadResponse, GenerationRequest, GenerationResponse,
    GenerationStatus, PublicationResponse, PublicationsResponse,
};
use crate::domain::publication::{DownloadFormat, PublicationUpdate};
use crate::error::{JobKind, SdkError};
use crate::poll::{poll_until_done, PollConfig};
use crate::shared::{Ack, ListParams};

/// Sub-client for publication operations.
pub struct Publications<'a> {
    pub(crate) client: &'a ContentGemClient,
}

impl<'a> Publications<'a> {
    /// List publications, one page at a time.
    pub async fn list(&self, params: &ListParams) -> Result<PublicationsResponse, SdkError> {
        let path = format!("/publications{}", params.to_query_string());
        Ok(self.client.http.get(&path).await?)
    }

    pub async fn get(&self, id: &str) -> Result<PublicationResponse, SdkError> {
        Ok(self.client.http.get(&item_path(id, "")).await?)
    }

    pub async fn create(&self, data: &PublicationUpdate) -> Result<PublicationResponse, SdkError> {
        Ok(self.client.http.post("/publications", data).await?)
    }

    pub async fn update(
        &self,
        id: &str,
        data: &PublicationUpdate,
    ) -> Result<PublicationResponse, SdkError> {
        Ok(self.client.http.put(&item_path(id, ""), data).await?)
    }

    pub async fn delete(&self, id: &str) -> Result<Ack, SdkError> {
        Ok(self.client.http.delete(&item_path(id, "")).await?)
    }

    pub async fn publish(&self, id: &str) -> Result<PublicationResponse, SdkError> {
        Ok(self.client.http.post_empty(&item_path(id, "/publish")).await?)
    }

    pub async fn archive(&self, id: &str) -> Result<PublicationResponse, SdkError> {
        Ok(self.client.http.post_empty(&item_path(id, "/archive")).await?)
    }

    /// Request a download link for the publication in `format`.
    pub async fn download(
        &self,
        id: &str,
        format: DownloadFormat,
    ) -> Result<DownloadResponse, SdkError> {
        let body = DownloadRequest { format };
        Ok(self.client.http.post(&item_path(id, "/download"), &body).await?)
    }

    // ── Generation ───────────────────────────────────────────────────────

    /// Start generating a publication. The returned session id is the handle
    /// for [`generation_status`](Self::generation_status).
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, SdkError> {
        Ok(self.client.http.post("/publications/generate", request).await?)
    }

    pub async fn generation_status(&self, session_id: &str) -> Result<GenerationStatus, SdkError> {
        let path = format!(
            "/publications/generation-status/{}",
            urlencoding::encode(session_id)
        );
        Ok(self.client.http.get(&path).await?)
    }

    pub async fn bulk_generate(
        &self,
        request: &BulkGenerationRequest,
    ) -> Result<BulkGenerationResponse, SdkError> {
        Ok(self.client.http.post("/publications/bulk-generate", request).await?)
    }

    /// Check a whole set of publications in one round-trip.
    pub async fn bulk_status(
        &self,
        publication_ids: &[String],
    ) -> Result<BulkGenerationStatus, SdkError> {
        let body = BulkStatusRequest {
            publication_ids: publication_ids.to_vec(),
        };
        Ok(self.client.http.post("/publications/bulk-status", &body).await?)
    }

    // ── Waiting ──────────────────────────────────────────────────────────

    /// Poll the generation session until it completes, fails, or the attempt
    /// budget runs out. Use [`PollConfig::generation`] for the defaults.
    pub async fn wait_for_generation(
        &self,
        session_id: &str,
        config: PollConfig,
    ) -> Result<GenerationStatus, SdkError> {
        poll_until_done(JobKind::Generation, config, move || {
            self.generation_status(session_id)
        })
        .await
    }

    /// Poll a set of publications until every one has completed or failed.
    ///
    /// Returns the final bulk status; individual failures are visible in its
    /// counters. Fails only if every tracked publication failed.
    pub async fn wait_for_bulk_generation(
        &self,
        publication_ids: &[String],
        config: PollConfig,
    ) -> Result<BulkGenerationStatus, SdkError> {
        let tracked = publication_ids.len();
        let snapshot = poll_until_done(JobKind::BulkGeneration, config, move || async move {
            let status = self.bulk_status(publication_ids).await?;
            Ok(BulkSnapshot { tracked, status })
        })
        .await?;
        Ok(snapshot.status)
    }
}

fn item_path(id: &str, suffix: &str) -> String {
    format!("/publications/{}{}", urlencoding::encode(id), suffix)
}
