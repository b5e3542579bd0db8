//! Month/year labels for Baseline dates.
//!
//! Labels are always English ("March 2024") no matter where the code runs.
//! The calendar date is taken exactly as written; a time-of-day or offset
//! never moves the label into a neighbouring month.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::tier::BaselineTier;

const LABEL_FORMAT: &str = "%B %Y";

/// Calendar dates, extended and basic.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// Local date-times; `%.f` also matches when there is no fraction.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Offsets written without a colon, which RFC 3339 rejects.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date_naive())
        })
        // Year and month only; the label never shows the day.
        .or_else(|| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok())
}

/// Format an optional ISO date as "Month YYYY".
///
/// Returns an empty string when no date is present. Strings that are not
/// ISO dates are logged and treated as absent.
#[must_use]
pub fn format_month_year(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    match parse_calendar_date(raw) {
        Some(date) => date.format(LABEL_FORMAT).to_string(),
        None => {
            log::warn!("ignoring unparseable baseline date {raw:?}");
            String::new()
        }
    }
}

/// Year shown next to a newly available headline.
///
/// Relies on [`format_month_year`] producing exactly "Month YYYY". A label of
/// any other shape trips a debug assertion and is logged in release builds.
#[must_use]
pub fn year_token(tier: BaselineTier, date_label: &str) -> &str {
    if tier != BaselineTier::Newly || date_label.is_empty() {
        return "";
    }
    let mut tokens = date_label.split_whitespace();
    let year = tokens.nth(1).filter(|_| tokens.next().is_none());
    debug_assert!(
        year.is_some(),
        "date label {date_label:?} is not in Month YYYY form"
    );
    year.unwrap_or_else(|| {
        log::error!("date label {date_label:?} is not in Month YYYY form");
        ""
    })
}
