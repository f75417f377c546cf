//! Unified SDK error types.

use std::fmt;

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Poll(#[from] PollError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// HTTP-layer errors.
///
/// Every variant displays as `Request failed: ...`. Timeouts are reported
/// through [`HttpError::Reqwest`] like any other network failure.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Non-2xx response. `message` is the body's `message` field, or
    /// `HTTP <code>: <reason>` when the body has none.
    #[error("Request failed: {message}")]
    Status { status: u16, message: String },

    /// 2xx body that does not match the expected response shape.
    #[error("Request failed: {0}")]
    Decode(String),

    #[error("Request failed: {0}")]
    InvalidHeader(String),
}

impl HttpError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// The kind of server-side job a poll loop is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    Generation,
    BulkGeneration,
    CompanyParsing,
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobKind::Generation => write!(f, "Generation"),
            JobKind::BulkGeneration => write!(f, "Bulk generation"),
            JobKind::CompanyParsing => write!(f, "Company parsing"),
        }
    }
}

/// Errors raised by the polling coordinator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    /// The job reached its failure state.
    #[error("{0} failed")]
    Failed(JobKind),

    /// The attempt budget ran out before the job reached a terminal state.
    #[error("{0} timeout")]
    Timeout(JobKind),
}
