//! Error type for the API layer.
//!
//! The client distinguishes exactly two failure classes: the request never
//! produced a usable response (network / decode), or the backend answered
//! with a non-2xx status. Backend-provided messages are surfaced to the
//! user; everything else falls back to a generic line.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a single API call. No retries are attempted at this layer.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not reach the backend.
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Http { status: u16, message: Option<String> },

    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message shown in the toast: the backend's own message when it sent
    /// one, otherwise the provided generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { message: Some(msg), .. } => msg.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Result alias used throughout `net::api`.
pub type ApiResult<T> = Result<T, ApiError>;
