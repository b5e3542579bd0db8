//! Retrieval contract for feature status payloads.
//!
//! Platform crates implement [`StatusSource`]; callers go through
//! [`resolve_feature_status`], which never fails and substitutes the
//! no-data payload when anything goes wrong.

use std::fmt::Display;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::payload::FeatureStatusPayload;

/// Status API base; the feature id is appended verbatim.
pub const DEFAULT_API_BASE: &str = "https://api.webstatus.dev/v1/features/";

/// How stale a cached status response may be.
pub const CACHE_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

pub const CACHE_CONTROL: &str = "Cache-Control";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Response was not valid UTF-8")]
    Utf8,
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Request URL for a feature. The id is not escaped or validated.
#[must_use]
pub fn feature_url(base: &str, feature_id: &str) -> String {
    format!("{base}{feature_id}")
}

/// `Cache-Control` request value accepting responses up to [`CACHE_TTL`] old.
#[must_use]
pub fn cache_control_value() -> String {
    format!("max-age={}", CACHE_TTL.as_secs())
}

/// Parse a response body into a payload.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] when the body is not a status document,
/// including when the baseline status is missing or unrecognised.
pub fn parse_payload(body: &str) -> Result<FeatureStatusPayload, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Source of feature status payloads.
/// Platform-specific implementations should provide this.
#[async_trait(?Send)]
pub trait StatusSource {
    type Error: std::error::Error + 'static;

    /// Fetch the status payload for a feature id.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// body that is not a status document.
    async fn fetch_status(&self, feature_id: &str) -> Result<FeatureStatusPayload, Self::Error>;
}

/// Keep a fetched payload, or fall back to the no-data payload.
#[must_use]
pub fn payload_or_fallback<E: Display>(
    result: Result<FeatureStatusPayload, E>,
    feature_id: &str,
) -> FeatureStatusPayload {
    match result {
        Ok(payload) => payload,
        Err(err) => {
            log::warn!("no status for feature {feature_id:?}: {err}");
            FeatureStatusPayload::no_data(feature_id)
        }
    }
}

/// Fetch once and always produce a payload.
pub async fn resolve_feature_status<S>(source: &S, feature_id: &str) -> FeatureStatusPayload
where
    S: StatusSource + ?Sized,
{
    log::debug!("fetching status for {feature_id:?}");
    payload_or_fallback(source.fetch_status(feature_id).await, feature_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::BaselineTier;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct CannedSource {
        response: Result<&'static str, u16>,
        calls: Cell<u32>,
    }

    #[async_trait(?Send)]
    impl StatusSource for CannedSource {
        type Error = FetchError;

        async fn fetch_status(
            &self,
            _feature_id: &str,
        ) -> Result<FeatureStatusPayload, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            match self.response {
                Ok(body) => parse_payload(body),
                Err(status) => Err(FetchError::Status {
                    status,
                    status_text: "Not Found".to_string(),
                }),
            }
        }
    }

    #[test]
    fn url_appends_id_verbatim() {
        assert_eq!(
            feature_url(DEFAULT_API_BASE, "grid"),
            "https://api.webstatus.dev/v1/features/grid"
        );
        assert_eq!(feature_url("http://x/", "a b"), "http://x/a b");
    }

    #[test]
    fn cache_ttl_is_one_week() {
        assert_eq!(cache_control_value(), "max-age=604800");
    }

    #[test]
    fn successful_fetch_is_kept() {
        let source = CannedSource {
            response: Ok(r#"{"name":"Grid","baseline":{"status":"widely"}}"#),
            calls: Cell::new(0),
        };
        let payload = block_on(resolve_feature_status(&source, "grid"));
        assert_eq!(payload.name, "Grid");
        assert_eq!(payload.tier(), BaselineTier::Widely);
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn http_error_degrades_to_no_data() {
        let source = CannedSource {
            response: Err(404),
            calls: Cell::new(0),
        };
        let payload = block_on(resolve_feature_status(&source, "grid"));
        assert_eq!(payload, FeatureStatusPayload::no_data("grid"));
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn body_without_status_degrades_to_no_data() {
        let source = CannedSource {
            response: Ok(r#"{"error":"unknown feature"}"#),
            calls: Cell::new(0),
        };
        let payload = block_on(resolve_feature_status(&source, ""));
        assert_eq!(payload.name, "Unknown feature");
        assert_eq!(payload.tier(), BaselineTier::NoData);
    }

    #[test]
    fn status_error_message_is_readable() {
        let err = FetchError::Status {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
    }
}
