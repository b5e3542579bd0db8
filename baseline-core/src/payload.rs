use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tier::BaselineTier;

/// Name used for the fallback payload when the caller supplied no feature id.
pub const UNKNOWN_FEATURE_NAME: &str = "Unknown feature";

/// Baseline block of a feature status response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baseline {
    pub status: BaselineTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_date: Option<String>,
}

/// Community interest in a feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperSignals {
    pub link: String,
    #[serde(default)]
    pub upvotes: u64,
}

/// Implementation record for one raw browser key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BrowserImplementation {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl BrowserImplementation {
    pub const AVAILABLE: &'static str = "available";

    /// Build a record with just a status.
    #[must_use]
    pub fn with_status(status: &str) -> Self {
        Self {
            status: Some(status.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status.as_deref() == Some(Self::AVAILABLE)
    }
}

/// Feature status document returned by the status API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureStatusPayload {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_id: Option<String>,
    pub baseline: Baseline,
    #[serde(
        default,
        alias = "developerSignals",
        skip_serializing_if = "Option::is_none"
    )]
    pub developer_signals: Option<DeveloperSignals>,
    #[serde(
        default,
        alias = "browserImplementations",
        skip_serializing_if = "Option::is_none"
    )]
    pub browser_implementations: Option<BTreeMap<String, BrowserImplementation>>,
}

impl FeatureStatusPayload {
    /// Minimal payload carrying only a name and a tier.
    #[must_use]
    pub fn new(name: impl Into<String>, status: BaselineTier) -> Self {
        Self {
            name: name.into(),
            feature_id: None,
            baseline: Baseline {
                status,
                low_date: None,
            },
            developer_signals: None,
            browser_implementations: None,
        }
    }

    /// Stand-in used whenever the real payload could not be retrieved.
    #[must_use]
    pub fn no_data(feature_id: &str) -> Self {
        let name = if feature_id.is_empty() {
            UNKNOWN_FEATURE_NAME
        } else {
            feature_id
        };
        Self::new(name, BaselineTier::NoData)
    }

    #[must_use]
    pub const fn tier(&self) -> BaselineTier {
        self.baseline.status
    }

    /// Raw implementation record for a browser key such as `chrome_android`.
    #[must_use]
    pub fn implementation(&self, key: &str) -> Option<&BrowserImplementation> {
        self.browser_implementations.as_ref()?.get(key)
    }
}
