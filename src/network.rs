//! Network constants for the ContentGem SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://gemcontent.com/api/v1";

/// Header carrying the API key on every request (`X-API-Key` on the wire;
/// header names are case-insensitive).
pub const API_KEY_HEADER: &str = "x-api-key";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
