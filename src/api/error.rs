//! Errors raised while talking to the facility service

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
