//! Browser `fetch` implementation of the status source.

use async_trait::async_trait;
use baseline_core::source::{DEFAULT_API_BASE, FetchError, StatusSource, feature_url, parse_payload};
use baseline_core::FeatureStatusPayload;

use crate::dom;

/// Fetches feature status documents from the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebStatusSource {
    base: String,
}

impl WebStatusSource {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    #[must_use]
    pub fn url_for(&self, feature_id: &str) -> String {
        feature_url(&self.base, feature_id)
    }
}

impl Default for WebStatusSource {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[async_trait(?Send)]
impl StatusSource for WebStatusSource {
    type Error = FetchError;

    async fn fetch_status(&self, feature_id: &str) -> Result<FeatureStatusPayload, FetchError> {
        let response = dom::fetch_response(&self.url_for(feature_id))
            .await
            .map_err(|err| FetchError::Network(dom::js_error_message(&err)))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let text = dom::response_text(&response)
            .await
            .map_err(|err| FetchError::Network(dom::js_error_message(&err)))?
            .ok_or(FetchError::Utf8)?;

        parse_payload(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_source_targets_webstatus() {
        assert_eq!(
            WebStatusSource::default().url_for("popover"),
            "https://api.webstatus.dev/v1/features/popover"
        );
    }

    #[test]
    fn custom_base_is_used_verbatim() {
        let source = WebStatusSource::new("/api/features/");
        assert_eq!(source.url_for("grid"), "/api/features/grid");
    }
}
