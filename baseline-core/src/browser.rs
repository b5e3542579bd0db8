//! Folding of raw per-platform implementation records into the four
//! browser families shown in the widget.

use serde::{Deserialize, Serialize};

use crate::payload::{BrowserImplementation, FeatureStatusPayload};

/// Browser family shown in the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalBrowser {
    Chrome,
    Edge,
    Firefox,
    Safari,
}

/// Raw implementation keys backing each browser family, in display order.
/// Adding a platform variant is a one-line edit here.
pub const BROWSER_VARIANTS: [(LogicalBrowser, &[&str]); 4] = [
    (LogicalBrowser::Chrome, &["chrome", "chrome_android"]),
    (LogicalBrowser::Edge, &["edge"]),
    (LogicalBrowser::Firefox, &["firefox", "firefox_android"]),
    (LogicalBrowser::Safari, &["safari", "safari_ios"]),
];

impl LogicalBrowser {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chrome => "Chrome",
            Self::Edge => "Edge",
            Self::Firefox => "Firefox",
            Self::Safari => "Safari",
        }
    }

    /// Lowercase identifier, used for CSS classes and icon lookups.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Edge => "edge",
            Self::Firefox => "firefox",
            Self::Safari => "safari",
        }
    }

    #[must_use]
    pub fn raw_keys(self) -> &'static [&'static str] {
        BROWSER_VARIANTS
            .iter()
            .find(|(browser, _)| *browser == self)
            .map(|(_, keys)| *keys)
            .unwrap_or(&[])
    }
}

/// Binary availability of a browser family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    No,
}

impl Availability {
    /// Raw token used in the accessibility label.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::No => "no",
        }
    }

    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// True only when every slot holds a record with status `available`.
///
/// A missing record counts as unavailable, and so does an empty list.
#[must_use]
pub fn is_fully_available(records: &[Option<&BrowserImplementation>]) -> bool {
    !records.is_empty()
        && records
            .iter()
            .all(|record| record.is_some_and(BrowserImplementation::is_available))
}

/// Desktop and mobile records for a browser family, absent ones included.
#[must_use]
pub fn implementations_for<'a>(
    payload: &'a FeatureStatusPayload,
    browser: LogicalBrowser,
) -> Vec<Option<&'a BrowserImplementation>> {
    browser
        .raw_keys()
        .iter()
        .map(|key| payload.implementation(key))
        .collect()
}

#[must_use]
pub fn availability(payload: &FeatureStatusPayload, browser: LogicalBrowser) -> Availability {
    if is_fully_available(&implementations_for(payload, browser)) {
        Availability::Available
    } else {
        Availability::No
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::BaselineTier;
    use std::collections::BTreeMap;

    fn payload_with(entries: &[(&str, &str)]) -> FeatureStatusPayload {
        let mut payload = FeatureStatusPayload::new("Test", BaselineTier::Limited);
        let map: BTreeMap<String, BrowserImplementation> = entries
            .iter()
            .map(|(key, status)| ((*key).to_string(), BrowserImplementation::with_status(status)))
            .collect();
        payload.browser_implementations = Some(map);
        payload
    }

    #[test]
    fn table_covers_all_seven_raw_keys_once() {
        let mut keys: Vec<&str> = BROWSER_VARIANTS
            .iter()
            .flat_map(|(_, keys)| keys.iter().copied())
            .collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 7);
        assert_eq!(LogicalBrowser::Edge.raw_keys(), &["edge"]);
    }

    #[test]
    fn conjunction_requires_every_variant() {
        let payload = payload_with(&[("chrome", "available")]);
        assert_eq!(availability(&payload, LogicalBrowser::Chrome), Availability::No);

        let payload = payload_with(&[("chrome", "available"), ("chrome_android", "available")]);
        assert_eq!(
            availability(&payload, LogicalBrowser::Chrome),
            Availability::Available
        );

        let payload = payload_with(&[("safari", "unavailable"), ("safari_ios", "available")]);
        assert_eq!(availability(&payload, LogicalBrowser::Safari), Availability::No);
    }

    #[test]
    fn single_variant_browser_uses_its_only_record() {
        let payload = payload_with(&[("edge", "available")]);
        assert!(availability(&payload, LogicalBrowser::Edge).is_available());
    }

    #[test]
    fn empty_and_missing_records_are_unavailable() {
        assert!(!is_fully_available(&[]));
        assert!(!is_fully_available(&[None]));
        let payload = FeatureStatusPayload::new("Test", BaselineTier::Widely);
        assert_eq!(availability(&payload, LogicalBrowser::Firefox), Availability::No);
    }
}
