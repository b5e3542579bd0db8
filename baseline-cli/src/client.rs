//! Native HTTP implementation of the status source.

use async_trait::async_trait;
use baseline_core::FeatureStatusPayload;
use baseline_core::source::{
    CACHE_CONTROL, FetchError, StatusSource, cache_control_value, feature_url, parse_payload,
};
use reqwest::header::ACCEPT;

const USER_AGENT: &str = concat!("baseline-status/", env!("CARGO_PKG_VERSION"));

/// Fetches feature status documents over HTTP.
pub struct HttpStatusSource {
    base_url: String,
    http: reqwest::Client,
}

impl HttpStatusSource {
    /// Build a client for the given API base.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }
}

#[async_trait(?Send)]
impl StatusSource for HttpStatusSource {
    type Error = FetchError;

    async fn fetch_status(&self, feature_id: &str) -> Result<FeatureStatusPayload, FetchError> {
        let url = feature_url(&self.base_url, feature_id);
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, cache_control_value())
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        log::debug!("{url} returned {} bytes", body.len());
        parse_payload(&body)
    }
}
