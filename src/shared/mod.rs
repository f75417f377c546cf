//! Shared newtypes and wire shapes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in response
//! types without conversion.

pub mod query;

pub use query::ListParams;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── SessionId ───────────────────────────────────────────────────────────────

/// Opaque, server-assigned generation session identifier.
///
/// Returned by the generate endpoints and used as the key for status polls.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for SessionId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SessionId(s.to_string()))
    }
}

impl Serialize for SessionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SessionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SessionId(s))
    }
}

// ─── Envelope ────────────────────────────────────────────────────────────────

/// The `{ success, data, message, error }` wrapper every endpoint responds with.
///
/// A `success: false` envelope is a normal value, not an error: callers inspect
/// `success` themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Borrow the payload, if the server sent one.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Best human-readable failure text: `message`, then `error`.
    pub fn error_message(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

/// Envelope for endpoints that carry no payload (deletes).
pub type Ack = Envelope<serde_json::Value>;

// ─── Pagination ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
}

// ─── JobState ────────────────────────────────────────────────────────────────

/// Status of a server-side asynchronous job.
///
/// Values the SDK does not know about are kept verbatim in [`JobState::Unknown`]
/// and count as still pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    Created,
    Queued,
    Pending,
    Generating,
    InProgress,
    Parsing,
    Completed,
    Failed,
    #[serde(untagged)]
    Unknown(String),
}

impl JobState {
    pub fn is_completed(&self) -> bool {
        matches!(self, JobState::Completed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, JobState::Failed)
    }

    pub fn is_terminal(&self) -> bool {
        self.is_completed() || self.is_failed()
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JobState::Created => "created",
            JobState::Queued => "queued",
            JobState::Pending => "pending",
            JobState::Generating => "generating",
            JobState::InProgress => "in_progress",
            JobState::Parsing => "parsing",
            JobState::Completed => "completed",
            JobState::Failed => "failed",
            JobState::Unknown(s) => s,
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_transparent() {
        let id: SessionId = serde_json::from_str(r#""sess_456""#).unwrap();
        assert_eq!(id.as_str(), "sess_456");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""sess_456""#);
    }

    #[test]
    fn test_job_state_known_values() {
        let state: JobState = serde_json::from_str(r#""in_progress""#).unwrap();
        assert_eq!(state, JobState::InProgress);
        assert!(!state.is_terminal());

        let state: JobState = serde_json::from_str(r#""completed""#).unwrap();
        assert!(state.is_completed());
        assert!(state.is_terminal());

        let state: JobState = serde_json::from_str(r#""failed""#).unwrap();
        assert!(state.is_failed());
    }

    #[test]
    fn test_job_state_unknown_value_round_trips() {
        let state: JobState = serde_json::from_str(r#""waiting_for_images""#).unwrap();
        assert_eq!(state, JobState::Unknown("waiting_for_images".to_string()));
        assert!(!state.is_terminal());
        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            r#""waiting_for_images""#
        );
    }

    #[test]
    fn test_envelope_failure_in_band() {
        let json = r#"{"success":false,"error":"INVALID_PROMPT","message":"Prompt is too short"}"#;
        let env: Envelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(!env.is_success());
        assert!(env.data().is_none());
        assert_eq!(env.error.as_deref(), Some("INVALID_PROMPT"));
        assert_eq!(env.error_message(), Some("Prompt is too short"));
    }

    #[test]
    fn test_envelope_omits_absent_fields() {
        let env: Envelope<u32> = Envelope {
            success: true,
            data: Some(7),
            message: None,
            error: None,
        };
        assert_eq!(serde_json::to_string(&env).unwrap(), r#"{"success":true,"data":7}"#);
    }

    #[test]
    fn test_pagination_camel_case() {
        let json = r#"{"currentPage":1,"totalPages":3,"totalItems":25,"itemsPerPage":10}"#;
        let p: Pagination = serde_json::from_str(json).unwrap();
        assert_eq!(p.current_page, 1);
        assert_eq!(p.total_items, 25);
    }
}
