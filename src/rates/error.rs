//! Fetch error definitions.

use reqwest::StatusCode;
use thiserror::Error;

use crate::json::DecodeError;

/// Any failure to obtain a rate for one symbol.
///
/// Callers treat every variant the same way; the variants exist for logs.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, timeout or body read failure.
    #[error("Transport error: {0}")]
    Transport(reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("Upstream returned status {0}")]
    Status(StatusCode),

    /// Configured base URL could not be parsed.
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Body could not be turned into a record.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The task running the fetch did not complete.
    #[error("Fetch task failed: {0}")]
    TaskFailed(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        // request URLs carry the API key
        FetchError::Transport(e.without_url())
    }
}

impl FetchError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Status(_) => "status",
            FetchError::InvalidUrl(_) => "invalid_url",
            FetchError::Decode(_) => "decode",
            FetchError::TaskFailed(_) => "task",
        }
    }
}
