//! Error type for the addon fetch.

use thiserror::Error;

/// Everything that can go wrong between building the request URL and having
/// a typed addon record.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API base or identifier did not form a valid URL.
    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// libcurl failed (DNS, connection refused, TLS, timeout, ...).
    #[error("request failed: {0}")]
    Transport(#[from] curl::Error),
    /// The server answered with something other than 200.
    #[error("HTTP {code} - {reason}")]
    Status { code: u32, reason: String },
    /// The body was not JSON or lacked a required field.
    #[error("malformed addon data: {0}")]
    Decode(#[from] serde_json::Error),
}
