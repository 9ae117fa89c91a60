//! Failures talking to the third-party code, livestream and event feeds.
//!
//! Every variant is recovered locally: the affected game is marked failed for the
//! current cycle and retried on the next tick.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The request did not complete within the configured timeout.
    #[error("Upstream request timed out")]
    Timeout,

    /// The upstream answered with a non-success HTTP status.
    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    /// The upstream answered 200 but reported an application-level failure.
    #[error("Upstream API error {retcode}: {message}")]
    Api { retcode: i64, message: String },

    /// Connection-level failure (DNS, TLS, reset).
    #[error("Upstream network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("Failed to decode upstream response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else if let Some(status) = err.status() {
            UpstreamError::Status(status.as_u16())
        } else if err.is_decode() {
            UpstreamError::Decode(err.to_string())
        } else {
            UpstreamError::Network(err.to_string())
        }
    }
}
