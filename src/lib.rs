//! # ContentGem SDK
//!
//! A typed Rust client for the ContentGem content-generation API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Envelopes, domain models, errors, and the polling coordinator
//!    (always available, no transport)
//! 2. **HTTP API** — `ContentGemHttp`: one request per call, API-key auth,
//!    error normalization
//! 3. **High-Level Client** — `ContentGemClient` with nested per-resource
//!    sub-clients and `wait_for_*` helpers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use contentgem::prelude::*;
//!
//! let client = ContentGemClient::builder()
//!     .api_key("your-api-key")
//!     .build()?;
//!
//! let started = client
//!     .publications()
//!     .generate(&GenerationRequest::new("Write about AI in marketing"))
//!     .await?;
//! let session = started.into_data().unwrap().session_id;
//! let done = client
//!     .publications()
//!     .wait_for_generation(session.as_str(), PollConfig::generation())
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared envelope, pagination, and job-state types used across all domains.
pub mod shared;

/// Domain modules (vertical slices): entity types, wire types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and header constants.
pub mod network;

/// Status polling for long-running server jobs.
pub mod poll;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP transport with API-key authentication.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `ContentGemClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{Ack, Envelope, JobState, ListParams, Pagination, SessionId};

    // Domain types — publication
    pub use crate::domain::publication::wire::{BulkSettings, DownloadResponse};
    pub use crate::domain::publication::{
        BulkGenerationRequest, BulkGenerationResponse, BulkGenerationStatus, DownloadFormat,
        GenerationRequest, GenerationResponse, GenerationStatus, Publication, PublicationResponse,
        PublicationStatus, PublicationType, PublicationUpdate, PublicationsResponse,
    };

    // Domain types — image, company
    pub use crate::domain::company::{
        CompanyInfo, CompanyParsingStatus, CompanyResponse, ContentPreferences,
    };
    pub use crate::domain::image::{
        Image, ImageGenerationRequest, ImageResponse, ImageUpload, ImagesResponse,
    };

    // Domain types — account
    pub use crate::domain::health::HealthResponse;
    pub use crate::domain::statistics::StatisticsOverview;
    pub use crate::domain::subscription::{
        ApiLimitsResponse, PlansResponse, SubscriptionStatus, UserLimits,
    };

    // Errors
    pub use crate::error::{HttpError, JobKind, PollError, SdkError};

    // Polling
    pub use crate::poll::{JobSnapshot, PollConfig, PollOutcome};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CompanyClient, ContentGemClient, ContentGemClientBuilder, ImagesClient,
        PublicationsClient, StatisticsClient, SubscriptionSubClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::ContentGemHttp;
}
