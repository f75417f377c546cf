//! Low-level HTTP client — `ContentGemHttp`.
//!
//! Builds one request per call: base URL + path, the API-key header, JSON
//! content-type, and the configured timeout. Never retries. Resource
//! sub-clients (Layer 3) are thin wrappers over the helpers here.

use crate::error::HttpError;
use crate::network::API_KEY_HEADER;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the ContentGem REST API.
#[derive(Debug, Clone)]
pub struct ContentGemHttp {
    base_url: String,
    client: Client,
    /// API key, marked sensitive so it never shows up in `Debug` output.
    api_key: HeaderValue,
    /// Headers added to every request after the defaults.
    extra_headers: HeaderMap,
    timeout: Duration,
}

impl ContentGemHttp {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, HttpError> {
        let mut api_key = HeaderValue::from_str(api_key)
            .map_err(|e| HttpError::InvalidHeader(format!("Invalid API key: {}", e)))?;
        api_key.set_sensitive(true);

        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            api_key,
            extra_headers: HeaderMap::new(),
            timeout,
        })
    }

    /// Add headers sent on every request. Later entries replace earlier ones.
    pub fn with_headers(mut self, headers: &[(String, String)]) -> Result<Self, HttpError> {
        for (name, value) in headers {
            let (name, value) = parse_header(name, value)?;
            self.extra_headers.insert(name, value);
        }
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ── Request helpers ──────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.request(Method::GET, path, None::<&()>, &[]).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.request(Method::POST, path, Some(body), &[]).await
    }

    /// POST without a body (lifecycle actions such as publish/archive).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.request(Method::POST, path, None::<&()>, &[]).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.request(Method::PUT, path, Some(body), &[]).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.request(Method::DELETE, path, None::<&()>, &[]).await
    }

    /// Issue a JSON request. `overrides` replace default headers of the same name.
    pub async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        overrides: &[(&str, &str)],
    ) -> Result<T, HttpError> {
        let url = self.url(path);
        let mut headers = self.default_headers(true);
        for (name, value) in overrides {
            let (name, value) = parse_header(name, value)?;
            headers.insert(name, value);
        }

        tracing::debug!(method = %method, url = %url, "Sending request");

        let mut req = self.client.request(method, &url).headers(headers);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        self.handle_response(resp).await
    }

    /// POST a multipart form. The JSON content-type is left off so reqwest can
    /// set the multipart boundary.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, HttpError> {
        let url = self.url(path);
        tracing::debug!(method = "POST", url = %url, "Sending multipart request");

        let resp = self
            .client
            .post(&url)
            .headers(self.default_headers(false))
            .multipart(form)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn default_headers(&self, json: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), self.api_key.clone());
        if json {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        for (name, value) in &self.extra_headers {
            headers.insert(name.clone(), value.clone());
        }
        headers
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, HttpError> {
        let status = resp.status();

        if status.is_success() {
            let body = resp.text().await?;
            return serde_json::from_str(&body)
                .map_err(|e| HttpError::Decode(format!("Invalid response body: {}", e)));
        }

        tracing::debug!(status = status.as_u16(), url = %resp.url(), "Request returned error status");

        let body_text = match resp.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read error response body: {}", e);
                String::new()
            }
        };

        decode_error_body(status, &body_text)
    }
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), HttpError> {
    let header_name = HeaderName::try_from(name)
        .map_err(|e| HttpError::InvalidHeader(format!("Invalid header name '{}': {}", name, e)))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|e| HttpError::InvalidHeader(format!("Invalid header value for '{}': {}", name, e)))?;
    Ok((header_name, header_value))
}

/// Map a non-2xx body to a result.
///
/// On a 4xx, a `success: false` envelope that fits `T` is a domain failure and
/// is returned in-band. Anything else, including every 5xx, becomes
/// [`HttpError::Status`] carrying the body's `message`, or
/// `HTTP <code>: <reason>`.
fn decode_error_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, HttpError> {
    let value = serde_json::from_str::<serde_json::Value>(body).ok();

    if let Some(v) = value.as_ref().filter(|_| status.is_client_error()) {
        if v.get("success") == Some(&serde_json::Value::Bool(false)) {
            if let Ok(parsed) = serde_json::from_value::<T>(v.clone()) {
                return Ok(parsed);
            }
        }
    }

    let message = value
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status")
            )
        });

    Err(HttpError::Status {
        status: status.as_u16(),
        message,
    })
}
