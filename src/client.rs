//! High-level client — `ContentGemClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::company::client::Company;
use crate::domain::health::HealthResponse;
use crate::domain::image::client::Images;
use crate::domain::publication::client::Publications;
use crate::domain::statistics::client::Statistics;
use crate::domain::subscription::client::SubscriptionClient;
use crate::error::SdkError;
use crate::http::ContentGemHttp;
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT_MS};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::company::client::Company as CompanyClient;
pub use crate::domain::image::client::Images as ImagesClient;
pub use crate::domain::publication::client::Publications as PublicationsClient;
pub use crate::domain::statistics::client::Statistics as StatisticsClient;
pub use crate::domain::subscription::client::SubscriptionClient as SubscriptionSubClient;

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "CONTENTGEM_API_KEY";
/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "CONTENTGEM_BASE_URL";
/// Environment variable overriding the request timeout, in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "CONTENTGEM_TIMEOUT_MS";

/// The primary entry point for the ContentGem SDK.
///
/// Provides nested sub-client accessors for each resource:
/// `client.publications()`, `client.images()`, etc. Cloning is cheap; the
/// underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ContentGemClient {
    pub(crate) http: ContentGemHttp,
}

impl ContentGemClient {
    /// Client against the default base URL with the default timeout.
    pub fn new(api_key: &str) -> Result<Self, SdkError> {
        Self::builder().api_key(api_key).build()
    }

    pub fn builder() -> ContentGemClientBuilder {
        ContentGemClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn publications(&self) -> Publications<'_> {
        Publications { client: self }
    }

    pub fn images(&self) -> Images<'_> {
        Images { client: self }
    }

    pub fn company(&self) -> Company<'_> {
        Company { client: self }
    }

    pub fn subscription(&self) -> SubscriptionClient<'_> {
        SubscriptionClient { client: self }
    }

    pub fn statistics(&self) -> Statistics<'_> {
        Statistics { client: self }
    }

    /// Low-level HTTP handle, for endpoints without a typed wrapper.
    pub fn http(&self) -> &ContentGemHttp {
        &self.http
    }

    /// `GET /health`. Also validates the API key.
    pub async fn health_check(&self) -> Result<HealthResponse, SdkError> {
        Ok(self.http.get("/health").await?)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct ContentGemClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    headers: Vec<(String, String)>,
}

impl Default for ContentGemClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            headers: Vec::new(),
        }
    }
}

impl ContentGemClientBuilder {
    /// Builder seeded from `CONTENTGEM_API_KEY`, `CONTENTGEM_BASE_URL` and
    /// `CONTENTGEM_TIMEOUT_MS`. Unset variables keep the defaults.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SdkError> {
        let mut builder = Self::default();
        if let Some(key) = lookup(ENV_API_KEY) {
            builder = builder.api_key(&key);
        }
        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            builder = builder.base_url(&url);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let ms = raw.trim().parse::<u64>().map_err(|_| {
                SdkError::Validation(format!("{ENV_TIMEOUT_MS} must be an integer, got {raw:?}"))
            })?;
            builder = builder.timeout_ms(ms);
        }
        Ok(builder)
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout_ms(self, ms: u64) -> Self {
        self.timeout(Duration::from_millis(ms))
    }

    /// Extra header sent with every request. Replaces a default header of the
    /// same name.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn build(self) -> Result<ContentGemClient, SdkError> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| SdkError::Validation("API key is required".to_string()))?;

        let http = ContentGemHttp::new(&self.base_url, &api_key, self.timeout)?
            .with_headers(&self.headers)?;

        tracing::debug!(base_url = %http.base_url(), timeout = ?self.timeout, "ContentGem client ready");
        Ok(ContentGemClient { http })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio_test::{assert_err, assert_ok};

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_build_requires_api_key() {
        let err = assert_err!(ContentGemClient::builder().build());
        assert!(matches!(err, SdkError::Validation(_)));

        let err = assert_err!(ContentGemClient::new("   "));
        assert_eq!(err.to_string(), "Validation error: API key is required");
    }

    #[test]
    fn test_defaults() {
        let client = ContentGemClient::new("gem_test").unwrap();
        assert_eq!(client.http().base_url(), DEFAULT_API_URL);
        assert_eq!(client.http().timeout(), Duration::from_millis(30_000));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ContentGemClient::builder()
            .api_key("k")
            .base_url("http://localhost:3000/api/v1/")
            .timeout_ms(500)
            .build()
            .unwrap();
        assert_eq!(client.http().base_url(), "http://localhost:3000/api/v1");
        assert_eq!(client.http().timeout(), Duration::from_millis(500));
    }

    #[test]
    fn test_invalid_header_rejected() {
        let err = ContentGemClient::builder()
            .api_key("k")
            .header("bad header", "v")
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::Http(_)));
    }

    #[test]
    fn test_from_vars() {
        let env = vars(&[
            (ENV_API_KEY, "gem_env"),
            (ENV_BASE_URL, "http://127.0.0.1:9000"),
            (ENV_TIMEOUT_MS, "1500"),
        ]);
        let builder = assert_ok!(ContentGemClientBuilder::from_vars(|k| env.get(k).cloned()));
        assert_eq!(builder.api_key.as_deref(), Some("gem_env"));
        assert_eq!(builder.base_url, "http://127.0.0.1:9000");
        assert_eq!(builder.timeout, Duration::from_millis(1500));
    }

    #[test]
    fn test_from_vars_defaults_and_errors() {
        let env = vars(&[(ENV_BASE_URL, "")]);
        let builder = ContentGemClientBuilder::from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(builder.base_url, DEFAULT_API_URL);
        assert!(builder.build().is_err());

        let env = vars(&[(ENV_TIMEOUT_MS, "soon")]);
        let err = ContentGemClientBuilder::from_vars(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }
}
