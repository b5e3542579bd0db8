//! Status resolution: turns a feature status payload into every string and
//! flag the widget displays.
//!
//! Everything here is a pure function of the payload. Resolving the same
//! payload twice yields identical views.

use serde::Serialize;

use crate::browser::{Availability, BROWSER_VARIANTS, LogicalBrowser, availability};
use crate::date::{format_month_year, year_token};
use crate::payload::FeatureStatusPayload;
use crate::support::SupportIcon;
use crate::tier::BaselineTier;

const BASELINE_PREFIX: &str = "Baseline";
const NEWLY_SUFFIX: &str = "(newly available)";
const UNKNOWN_WORD: &str = "unknown";
const UPVOTE_HINT: &str = "Need this feature across browsers? Click this and upvote it on GitHub.";

/// Per-browser slice of a [`ResolvedView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrowserView {
    pub browser: LogicalBrowser,
    pub fully_available: bool,
    pub availability: Availability,
    pub icon: SupportIcon,
}

/// Developer upvote link shown under the description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpvoteView {
    pub link: String,
    pub count: u64,
    pub label: String,
    pub tooltip: String,
}

/// Everything the renderer needs, derived from one payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedView {
    pub feature_id: String,
    pub name: String,
    pub tier: BaselineTier,
    pub title: &'static str,
    pub headline: String,
    pub badge: bool,
    pub date_label: String,
    pub description: String,
    pub browsers: [BrowserView; 4],
    pub aria_label: String,
    pub upvotes: Option<UpvoteView>,
}

impl ResolvedView {
    #[must_use]
    pub fn browser(&self, browser: LogicalBrowser) -> &BrowserView {
        // `browsers` is built from BROWSER_VARIANTS, so every family is present.
        let idx = BROWSER_VARIANTS
            .iter()
            .position(|(candidate, _)| *candidate == browser)
            .unwrap_or_default();
        &self.browsers[idx]
    }
}

/// Body text for a tier, using the dated sentence when a date is known.
#[must_use]
pub fn describe(tier: BaselineTier, date_label: &str) -> String {
    match tier {
        BaselineTier::Newly if !date_label.is_empty() => format!(
            "Since {date_label} this feature works across the latest devices and browser versions. This feature might not work in older devices or browsers."
        ),
        BaselineTier::Widely if !date_label.is_empty() => format!(
            "This feature is well established and works across many devices and browser versions. It’s been available across browsers since {date_label}"
        ),
        _ => tier.definition().default_description.to_string(),
    }
}

/// Visible headline: "Baseline 2024", "Baseline Widely available", or the
/// bare tier title.
#[must_use]
pub fn headline(tier: BaselineTier, year: &str) -> String {
    let title = tier.title();
    match tier {
        BaselineTier::Widely => format!("{BASELINE_PREFIX} {title}"),
        BaselineTier::Newly if !year.is_empty() => format!("{title} {year}"),
        _ => title.to_string(),
    }
}

/// Screen reader summary of the headline and the four browsers.
#[must_use]
pub fn aria_label(
    tier: BaselineTier,
    headline: &str,
    badge: bool,
    browsers: &[BrowserView],
) -> String {
    let mut label = headline.to_string();
    if badge {
        label.push(' ');
        label.push_str(NEWLY_SUFFIX);
    }
    label.push('.');
    for view in browsers {
        let word = if tier == BaselineTier::NoData {
            UNKNOWN_WORD
        } else if view.availability.is_available() {
            "yes"
        } else {
            view.availability.token()
        };
        label.push_str(&format!(" Supported in {}: {word}.", view.browser.name()));
    }
    label
}

/// "1 developer upvote" / "N developer upvotes".
#[must_use]
pub fn upvote_label(upvotes: u64) -> String {
    if upvotes == 1 {
        "1 developer upvote".to_string()
    } else {
        format!("{upvotes} developer upvotes")
    }
}

/// Resolve the payload fetched for `feature_id` into its display view.
///
/// The requested id wins over the id echoed in the payload; the payload's id
/// is only used when no id was requested.
#[must_use]
pub fn resolve(feature_id: &str, payload: &FeatureStatusPayload) -> ResolvedView {
    let feature_id = match payload.feature_id.as_deref() {
        Some(echoed) if feature_id.is_empty() => echoed.to_string(),
        _ => feature_id.to_string(),
    };
    let tier = payload.tier();
    let date_label = format_month_year(payload.baseline.low_date.as_deref());
    let badge = tier == BaselineTier::Newly;
    let headline = headline(tier, year_token(tier, &date_label));

    let browsers = BROWSER_VARIANTS.map(|(browser, _)| {
        let availability = availability(payload, browser);
        BrowserView {
            browser,
            fully_available: availability.is_available(),
            availability,
            icon: SupportIcon::classify(tier, availability),
        }
    });

    let upvotes = payload.developer_signals.as_ref().map(|signals| {
        let label = upvote_label(signals.upvotes);
        UpvoteView {
            link: signals.link.clone(),
            count: signals.upvotes,
            tooltip: format!("{label}. {UPVOTE_HINT}"),
            label,
        }
    });

    ResolvedView {
        feature_id,
        name: payload.name.clone(),
        tier,
        title: tier.title(),
        aria_label: aria_label(tier, &headline, badge, &browsers),
        headline,
        badge,
        description: describe(tier, &date_label),
        date_label,
        browsers,
        upvotes,
    }
}
