//! Baseline Status Core
//!
//! Platform-agnostic resolution of web feature "Baseline" status payloads
//! into headlines, descriptions, per-browser icons, and accessibility labels.
//! This crate has no UI or network dependencies; fetching and rendering live
//! in the platform crates.

pub mod browser;
pub mod date;
pub mod links;
pub mod payload;
pub mod resolve;
pub mod source;
pub mod support;
pub mod tier;

// Re-export commonly used types
pub use browser::{Availability, BROWSER_VARIANTS, LogicalBrowser, is_fully_available};
pub use date::{format_month_year, year_token};
pub use links::{LinkTarget, learn_more_url};
pub use payload::{
    Baseline, BrowserImplementation, DeveloperSignals, FeatureStatusPayload, UNKNOWN_FEATURE_NAME,
};
pub use resolve::{BrowserView, ResolvedView, UpvoteView, describe, resolve, upvote_label};
pub use source::{
    CACHE_TTL, DEFAULT_API_BASE, FetchError, StatusSource, feature_url, payload_or_fallback,
    resolve_feature_status,
};
pub use support::{IconStyle, SupportIcon};
pub use tier::{BaselineTier, TierDefinition};
