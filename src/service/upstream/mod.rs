//! HTTP clients for the third-party feeds.
//!
//! One `UpstreamClient` is shared by both pipelines. Every request carries the timeout the
//! underlying `reqwest::Client` was built with, and every failure is reported as an
//! `UpstreamError` so callers can isolate it to the affected game.

pub mod codes;
pub mod events;
pub mod livestream;

use serde::{de::DeserializeOwned, Deserialize};

use crate::error::upstream::UpstreamError;

/// Client for the redemption-code API and the HoYoLAB livestream and event feeds.
pub struct UpstreamClient {
    http: reqwest::Client,
    codes_url: String,
    livestream_url: String,
    events_url: String,
}

impl UpstreamClient {
    /// Creates a new UpstreamClient.
    ///
    /// # Arguments
    /// - `http` - HTTP client, already configured with the per-request timeout
    /// - `codes_url` - Endpoint of the redemption-code API
    /// - `livestream_url` - Endpoint of the HoYoLAB livestream material feed
    /// - `events_url` - Endpoint of the HoYoLAB event overview feed
    pub fn new(
        http: reqwest::Client,
        codes_url: String,
        livestream_url: String,
        events_url: String,
    ) -> Self {
        Self {
            http,
            codes_url,
            livestream_url,
            events_url,
        }
    }

    /// Sends a GET request and decodes the JSON body.
    ///
    /// Non-success statuses are turned into `UpstreamError::Status` before decoding.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, UpstreamError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

/// Envelope shared by the HoYoLAB endpoints.
#[derive(Debug, Deserialize)]
struct HoyolabResponse<T> {
    retcode: i64,
    #[serde(default)]
    message: String,
    data: Option<T>,
}

impl<T> HoyolabResponse<T> {
    /// Unwraps the payload, treating a non-zero retcode or a missing payload as an API error.
    fn into_data(self) -> Result<T, UpstreamError> {
        match (self.retcode, self.data) {
            (0, Some(data)) => Ok(data),
            (retcode, _) => Err(UpstreamError::Api {
                retcode,
                message: self.message,
            }),
        }
    }
}
